use super::*;

#[test]
fn advance_steps_whole_characters() {
    let mut cursor = Cursor::new("çx");
    assert_eq!(cursor.current(), Some('ç'));
    assert_eq!(cursor.peek(), Some('x'));
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('x'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_includes_unicode_spaces() {
    let mut cursor = Cursor::new(" \t\r\n\u{a0}\u{2003}x");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn eat_while_stops_at_first_mismatch() {
    let mut cursor = Cursor::new("DEV_PORT?:");
    cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
    assert_eq!(cursor.slice_from(0), "DEV_PORT");
    assert_eq!(cursor.current(), Some('?'));
}

#[test]
fn eat_until_byte_leaves_delimiter() {
    let mut cursor = Cursor::new("// note\nnext");
    assert!(cursor.eat_until_byte(b'\n'));
    assert_eq!(cursor.slice_from(0), "// note");
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_until_byte_missing_moves_to_end() {
    let mut cursor = Cursor::new("'never closed");
    cursor.advance();
    assert!(!cursor.eat_until_byte(b'\''));
    assert_eq!(cursor.pos(), "'never closed".len());
}

#[test]
fn eat_past_consumes_needle() {
    let mut cursor = Cursor::new("/* a * b */rest");
    cursor.advance_ascii(2);
    assert!(cursor.eat_past(b"*/"));
    assert_eq!(cursor.slice_from(0), "/* a * b */");
    assert_eq!(cursor.current(), Some('r'));
}

#[test]
fn eat_past_missing_moves_to_end() {
    let mut cursor = Cursor::new("/* open");
    cursor.advance_ascii(2);
    assert!(!cursor.eat_past(b"*/"));
    assert_eq!(cursor.pos(), "/* open".len());
}
