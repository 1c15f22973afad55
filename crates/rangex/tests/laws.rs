//! Expansion laws checked through the public API.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rangex::{
    char_at, expand, generate_range, CodeUnits, ErrorKind, ExpandOptions, OutputShape,
    RangeOutput,
};

fn expand_text(input: &str, options: impl Into<ExpandOptions>) -> Option<String> {
    expand(input, options).ok().map(RangeOutput::into_string)
}

// === Scenarios ===

#[test]
fn documented_scenarios() {
    assert_eq!(expand_text("a-o", "-").as_deref(), Some("abcdefghijklmno"));
    assert_eq!(expand_text("9-0", "-").as_deref(), Some("9876543210"));
    assert_eq!(
        expand_text("0-9_a-ox", "-").as_deref(),
        Some("0123456789_abcdefghijklmnox")
    );
    assert_eq!(expand_text("a\\-z", "-").as_deref(), Some("a-z"));
    assert_eq!(
        generate_range("\u{D7FE}", "\u{E001}", OutputShape::Text),
        Ok(RangeOutput::Text("\u{D7FE}\u{D7FF}\u{E000}\u{E001}".to_owned()))
    );
}

#[test]
fn char_at_scenarios() {
    let units = CodeUnits::new("a\u{1F4A9}c");
    assert_eq!(char_at(units.as_units(), 1), Ok(Some('\u{1F4A9}')));
    let pair = CodeUnits::new("\u{1F4A9}");
    assert_eq!(
        char_at(pair.as_units(), 1).map_err(|e| e.kind()),
        Err(ErrorKind::MalformedIndex)
    );
}

#[test]
fn options_only_call_yields_empty_result() {
    assert_eq!(
        expand(None::<&str>, ExpandOptions::default().with_separator("..")),
        Ok(RangeOutput::Text(String::new()))
    );
}

#[test]
fn separator_boundary_laws() {
    for separator in ["-", "..", "\u{2192}"] {
        let only = separator.to_owned();
        let leading = format!("{separator}abc");
        let trailing = format!("abc{separator}");
        for input in [&only, &leading, &trailing] {
            assert_eq!(
                expand_text(input, separator).as_deref(),
                Some(input.as_str()),
                "separator {separator:?}, input {input:?}"
            );
        }
    }
}

#[test]
fn escaped_separator_law() {
    for separator in ["-", "..", "\u{2192}"] {
        let input = format!("\\{separator}");
        assert_eq!(
            expand_text(&input, separator).as_deref(),
            Some(separator),
            "separator {separator:?}"
        );
    }
}

#[test]
fn text_without_separator_or_escape_is_unchanged() {
    for input in ["", "abc", "_0134", "a..b", "\u{1F4A9}\u{E000}\u{D7FF}", "\u{00E9}t\u{00E9}"] {
        assert_eq!(expand_text(input, "-").as_deref(), Some(input), "input {input:?}");
    }
}

// === Properties ===

/// Printable text with no backslash and no `-`.
fn plain_text() -> impl Strategy<Value = String> {
    "[^\\\\\\-\\p{Cc}]{0,24}"
}

proptest! {
    #[test]
    fn plain_text_is_unchanged(s in plain_text()) {
        prop_assert_eq!(expand_text(&s, "-"), Some(s));
    }

    #[test]
    fn escaping_returns_the_character(c in any::<char>()) {
        let input = format!("\\{c}");
        prop_assert_eq!(expand_text(&input, "-"), Some(c.to_string()));
    }

    #[test]
    fn text_and_sequence_agree(s in "[a-f0-9\\-\\\\]{0,12}") {
        let text = expand(s.as_str(), OutputShape::Text).map(RangeOutput::into_chars);
        let seq = expand(s.as_str(), OutputShape::Sequence).map(RangeOutput::into_chars);
        prop_assert_eq!(text, seq);
    }

    #[test]
    fn two_character_range_matches_generate_range(a in "[ -~]", b in "[ -~]") {
        prop_assume!(a != "\\");
        let expanded = expand(format!("{a}-{b}"), OutputShape::Sequence);
        let generated = generate_range(a.as_str(), b.as_str(), OutputShape::Sequence);
        prop_assert_eq!(expanded, generated);
    }
}
