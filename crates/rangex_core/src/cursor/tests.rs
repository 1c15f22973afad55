use crate::{CodeUnits, ErrorKind};
use pretty_assertions::assert_eq;

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === Basic Navigation ===

#[test]
fn next_char_advances_by_one_unit() {
    let buf = CodeUnits::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    assert_eq!(cursor.remaining(), units("bc"));
    assert_eq!(cursor.next_char(), Ok(Some('b')));
    assert_eq!(cursor.remaining(), units("c"));
}

#[test]
fn next_char_advances_past_surrogate_pair() {
    let buf = CodeUnits::new("\u{1F4A9}x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Ok(Some('\u{1F4A9}')));
    assert_eq!(cursor.remaining(), units("x"));
    assert_eq!(cursor.next_char(), Ok(Some('x')));
    assert!(cursor.is_eof());
}

#[test]
fn next_char_at_eof_does_not_move() {
    let buf = CodeUnits::new("a");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    assert_eq!(cursor.next_char(), Ok(None));
    assert!(cursor.is_eof());
    assert!(cursor.remaining().is_empty());
}

#[test]
fn next_char_reports_lone_surrogate_and_stays_put() {
    let buf = CodeUnits::from_units([u16::from(b'a'), 0xD800, u16::from(b'b')]);
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    let err = cursor.next_char().map_err(|e| e.kind());
    assert_eq!(err, Err(ErrorKind::InvalidEncoding));
    assert_eq!(cursor.remaining(), &[0xD800, u16::from(b'b')]);
}

// === EOF Detection ===

#[test]
fn empty_input_is_eof() {
    let buf = CodeUnits::default();
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert!(cursor.remaining().is_empty());
}

// === Token Matching ===

#[test]
fn starts_with_and_eat() {
    let buf = CodeUnits::new("a..z");
    let dots = CodeUnits::new("..");
    let mut cursor = buf.cursor();
    assert!(!cursor.starts_with(dots.as_units()));
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    assert!(cursor.starts_with(dots.as_units()));
    assert!(cursor.eat(dots.as_units()));
    assert_eq!(cursor.remaining(), units("z"));
}

#[test]
fn eat_mismatch_leaves_cursor() {
    let buf = CodeUnits::new("ab");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat(CodeUnits::new("b").as_units()));
    assert_eq!(cursor.remaining(), units("ab"));
}

#[test]
fn token_longer_than_rest_does_not_match() {
    let buf = CodeUnits::new("a.");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    assert!(!cursor.starts_with(CodeUnits::new("..").as_units()));
}

#[test]
fn cursor_is_copy_snapshot() {
    let buf = CodeUnits::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    assert_eq!(cursor.next_char(), Ok(Some('a')));
    assert_eq!(snapshot.remaining(), units("abc"));
    assert_eq!(cursor.remaining(), units("bc"));
}
