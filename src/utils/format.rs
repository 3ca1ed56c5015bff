/// Format the "major – year" subtitle line shown under a student's name.
/// Both parts are opaque display strings and pass through unmodified.
pub fn subtitle(major: &str, year: &str) -> String {
    format!("{} – {}", major, year)
}

/// Accessible alt text for a student's portrait image.
pub fn portrait_alt(name: &str) -> String {
    format!("{}'s profile", name)
}

/// Label for the biography toggle button, keyed on the current visibility.
pub fn bio_toggle_label(visible: bool) -> &'static str {
    if visible {
        "Hide Bio"
    } else {
        "Show Bio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle() {
        assert_eq!(subtitle("CS", "Junior"), "CS – Junior");
        assert_eq!(
            subtitle("Computer Science", "Class of 2027"),
            "Computer Science – Class of 2027"
        );
    }

    #[test]
    fn test_subtitle_passes_empty_parts_through() {
        // No validation layer exists, so empty slots render as-is
        assert_eq!(subtitle("", "Junior"), " – Junior");
        assert_eq!(subtitle("CS", ""), "CS – ");
        assert_eq!(subtitle("", ""), " – ");
    }

    #[test]
    fn test_portrait_alt() {
        assert_eq!(portrait_alt("Alice"), "Alice's profile");
        assert_eq!(portrait_alt(""), "'s profile");
    }

    #[test]
    fn test_bio_toggle_label() {
        assert_eq!(bio_toggle_label(false), "Show Bio");
        assert_eq!(bio_toggle_label(true), "Hide Bio");
    }

    #[test]
    fn test_bio_toggle_label_round_trip() {
        // Hidden on first render, flips on every click, never terminates
        let mut visible = false;
        assert_eq!(bio_toggle_label(visible), "Show Bio");

        visible = !visible;
        assert_eq!(bio_toggle_label(visible), "Hide Bio");

        visible = !visible;
        assert_eq!(bio_toggle_label(visible), "Show Bio");
    }
}
