//! Slug derivation and text helpers shared by the content entities.

/// Derive a URL-safe identifier from a human-readable name or title.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single hyphen, and strips leading/trailing hyphens. Deriving twice
/// from the same input always yields the same string.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|ch| match ch {
            'a'..='z' | '0'..='9' => ch,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Take at most `max` characters from `text`.
///
/// Character-based rather than byte-based, so multibyte input never gets cut
/// through a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust & Crab Cakes"), "rust-crab-cakes");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("a -- b!!c"), "a-b-c");
    }

    #[test]
    fn slugify_strips_edge_hyphens() {
        assert_eq!(slugify("  --- Deals of the Day! "), "deals-of-the-day");
    }

    #[test]
    fn slugify_is_deterministic_and_url_safe() {
        let names = ["Hello World!", "Top 10 Gadgets (2024)", "caf\u{e9} corner"];
        for name in names {
            let a = slugify(name);
            let b = slugify(name);
            assert_eq!(a, b);
            assert!(!a.starts_with('-') && !a.ends_with('-'));
            assert!(
                a.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
        }
    }

    #[test]
    fn slugify_of_a_slug_is_identity() {
        assert_eq!(slugify("hello-world"), "hello-world");
    }

    #[test]
    fn slugify_empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("h\u{e9}llo", 2), "h\u{e9}");
        assert_eq!(truncate_chars("short", 70), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }
}
