//! The demo greeting application shown in the decks.

use chrono::NaiveDate;
use std::io::{self, Write};

/// Personalized welcome line.
///
/// ```rust
/// assert_eq!(deckgen::greeting::greet_user("Ada"), "Hello, Ada! Welcome to our app.");
/// ```
pub fn greet_user(name: &str) -> String {
    format!("Hello, {name}! Welcome to our app.")
}

/// Long US-English form of a date, e.g. `Monday, January 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Border, message line and border of a banner around `message`.
pub fn banner_lines(message: &str) -> [String; 3] {
    let border = "*".repeat(message.chars().count() + 4);
    let middle = format!("* {message} *");
    [border.clone(), middle, border]
}

/// Write the banner to `writer` and hand back the message.
pub fn write_banner<'m, W: Write>(writer: &mut W, message: &'m str) -> io::Result<&'m str> {
    for line in banner_lines(message) {
        writeln!(writer, "{line}")?;
    }
    Ok(message)
}

/// Print the banner to stdout and hand back the message.
pub fn print_banner(message: &str) -> &str {
    for line in banner_lines(message) {
        println!("{line}");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_format_date_components() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let formatted = format_date(date);
        assert!(formatted.contains("2024"));
        assert!(formatted.contains("January"));
        assert_eq!(formatted, "Monday, January 15, 2024");
    }

    #[test]
    fn test_empty_banner() {
        assert_eq!(banner_lines(""), ["****", "*  *", "****"]);
        assert_eq!(print_banner(""), "");
    }

    #[test]
    fn test_write_banner() {
        let mut out = Vec::new();
        let returned = write_banner(&mut out, "HELLO WORLD").unwrap();
        assert_eq!(returned, "HELLO WORLD");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "***************\n* HELLO WORLD *\n***************\n"
        );
    }

    #[test]
    fn test_banner_counts_chars() {
        let [top, middle, _] = banner_lines("héllo");
        assert_eq!(top.len(), 9);
        assert_eq!(middle, "* héllo *");
    }

    proptest! {
        #[test]
        fn greet_user_follows_template(name in ".*") {
            let greeting = greet_user(&name);
            prop_assert!(greeting.contains(&name));
            prop_assert_eq!(greeting, format!("Hello, {}! Welcome to our app.", name));
        }

        #[test]
        fn banner_borders_match_width(message in "\\PC{0,40}") {
            let [top, middle, bottom] = banner_lines(&message);
            let expected = "*".repeat(message.chars().count() + 4);
            prop_assert_eq!(&top, &expected);
            prop_assert_eq!(&bottom, &expected);
            prop_assert_eq!(middle, format!("* {} *", message));
        }

        #[test]
        fn print_banner_returns_input(message in "\\PC{0,40}") {
            prop_assert_eq!(print_banner(&message), message.as_str());
        }
    }
}
