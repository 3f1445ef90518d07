//! Printable "right to remain silent" card

pub const HEADING: &str = "RIGHT TO REMAIN SILENT";

pub const ASSERTIONS: [&str; 4] = [
    "I DO NOT CONSENT TO A SEARCH",
    "I DO NOT WANT TO SPEAK TO POLICE",
    "I WANT TO SPEAK TO AN ATTORNEY",
    "I DO NOT WANT TO SIGN ANYTHING",
];

/// The card's fine print, wrapped the way it is printed
pub const NOTICE: [&str; 4] = [
    "This card asserts my constitutional rights under the",
    "Fourth, Fifth, and Sixth Amendments to the U.S. Constitution.",
    "I do not consent to any searches, and I invoke my",
    "right to remain silent and my right to legal counsel.",
];

/// Plain text of the card, one printed line per line
///
/// The `Name:` line is present only when `name` is non-empty.
pub fn card_text(name: &str) -> String {
    let mut lines = Vec::with_capacity(10);
    lines.push(HEADING.to_string());
    lines.extend(ASSERTIONS.iter().map(|s| s.to_string()));
    if !name.is_empty() {
        lines.push(format!("Name: {}", name));
    }
    lines.extend(NOTICE.iter().map(|s| s.to_string()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_without_name() {
        let text = card_text("");
        assert!(!text.contains("Name:"));
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next(), Some(HEADING));
    }

    #[test]
    fn test_card_with_name() {
        let text = card_text("Alex Morgan");
        assert_eq!(text.lines().nth(5), Some("Name: Alex Morgan"));
        assert!(text.ends_with("right to remain silent and my right to legal counsel."));
    }
}
