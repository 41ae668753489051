use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new(b"abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_stops_at_end() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let cursor = Cursor::new(b"=!");
    assert_eq!(cursor.peek(), b'!');
}

#[test]
fn peek_past_end_returns_zero() {
    let cursor = Cursor::new(b"=");
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn empty_input_is_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new(b"123abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice_from(0), b"123");
}

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new(b"999");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_accepting_null_still_terminates() {
    let mut cursor = Cursor::new(b"\0\0");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_whitespace_skips_all_six() {
    let mut cursor = Cursor::new(b" \t\n\x0B\x0C\rx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn whitespace_set_is_exact() {
    let ws: Vec<u8> = (0u8..=255).filter(|&b| is_whitespace(b)).collect();
    assert_eq!(ws, [b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ']);
}

#[test]
fn slice_from_current_is_empty() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert!(cursor.slice_from(1).is_empty());
}
