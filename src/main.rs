#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod utils;

use components::StudentCard;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting student directory");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        main {
            style: "padding: 20px;",
            h1 {
                style: "font-family: Arial, sans-serif; text-align: center; font-size: 26px;",
                "Student Directory"
            }
            StudentCard {
                name: "Alice Johnson",
                major: "Computer Science",
                year: "Junior",
                bio: "Loves compilers, rock climbing, and teaching intro programming labs.",
                image_url: "https://i.pravatar.cc/100?img=5",
            }
            StudentCard {
                name: "Marcus Lee",
                major: "Mechanical Engineering",
                year: "Senior",
                bio: "Builds combat robots and is writing a thesis on compliant mechanisms.",
                image_url: "https://i.pravatar.cc/100?img=12",
            }
        }
    }
}
