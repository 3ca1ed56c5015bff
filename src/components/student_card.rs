use dioxus::prelude::*;
use crate::utils::{bio_toggle_label, portrait_alt, subtitle};

#[derive(Props, Clone, PartialEq)]
pub struct StudentCardProps {
    pub name: String,
    pub major: String,
    pub year: String,
    pub bio: String,
    pub image_url: String,
}

/// Card showing one student's portrait, name, and program, with a button
/// that shows or hides the biography. The visibility flag lives on this
/// instance only and resets whenever the card is remounted.
#[component]
pub fn StudentCard(props: StudentCardProps) -> Element {
    let mut show_bio = use_signal(|| false);

    rsx! {
        div {
            style: "max-width: 350px; padding: 20px; border: 1px solid #ccc; border-radius: 12px; font-family: Arial, sans-serif; text-align: center; margin: 20px auto; background-color: #f9f9f9; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);",

            // Portrait (circular). The URL is passed through untouched; a bad
            // one just gets the browser's broken-image rendering.
            img {
                src: "{props.image_url}",
                alt: portrait_alt(&props.name),
                style: "width: 100px; height: 100px; border-radius: 50%; object-fit: cover; margin-bottom: 12px;"
            }

            h2 {
                style: "margin: 0; font-size: 22px;",
                "{props.name}"
            }

            p {
                style: "margin: 4px 0; font-size: 16px;",
                {subtitle(&props.major, &props.year)}
            }

            button {
                style: "margin-top: 12px; padding: 8px 16px; font-size: 14px; border-radius: 6px; border: none; cursor: pointer; background-color: #007BFF; color: white;",
                onclick: move |_| {
                    let current = *show_bio.read();
                    show_bio.set(!current);
                },
                {bio_toggle_label(*show_bio.read())}
            }

            if *show_bio.read() {
                p {
                    style: "margin-top: 16px; font-size: 14px;",
                    "{props.bio}"
                }
            }
        }
    }
}
