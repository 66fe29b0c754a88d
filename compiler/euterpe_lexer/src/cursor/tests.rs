use super::*;

#[test]
fn empty_source_starts_at_eof() {
    let c = Cursor::new("");
    assert!(c.is_eof());
    assert_eq!(c.current(), None);
    assert_eq!(c.pos(), 0);
}

#[test]
fn advance_walks_characters() {
    let mut c = Cursor::new("Ab");
    assert_eq!(c.current(), Some('A'));
    assert_eq!(c.advance(), Some('A'));
    assert_eq!(c.pos(), 1);
    assert_eq!(c.current(), Some('b'));
    assert_eq!(c.advance(), Some('b'));
    assert!(c.is_eof());
}

#[test]
fn advance_at_eof_does_not_move() {
    let mut c = Cursor::new("A");
    c.advance();
    assert_eq!(c.advance(), None);
    assert_eq!(c.pos(), 1);
}

#[test]
fn advance_over_multibyte_characters() {
    // U+3000 is 3 bytes, U+1F3B5 is 4 bytes.
    let mut c = Cursor::new("\u{3000}\u{1F3B5}C");
    assert_eq!(c.advance(), Some('\u{3000}'));
    assert_eq!(c.pos(), 3);
    assert_eq!(c.advance(), Some('\u{1F3B5}'));
    assert_eq!(c.pos(), 7);
    assert_eq!(c.current(), Some('C'));
}

#[test]
fn back_retracts_one_character() {
    let mut c = Cursor::new("A\u{00A0}B");
    c.advance();
    c.advance();
    assert_eq!(c.pos(), 3);
    assert_eq!(c.back(), Some('\u{00A0}'));
    assert_eq!(c.pos(), 1);
    assert_eq!(c.current(), Some('\u{00A0}'));
}

#[test]
fn back_at_start_does_not_move() {
    let mut c = Cursor::new("A");
    assert_eq!(c.back(), None);
    assert_eq!(c.pos(), 0);
}

#[test]
fn slice_by_span() {
    let mut c = Cursor::new("x\u{2003}y");
    c.advance();
    let start = c.pos();
    c.advance();
    assert_eq!(c.slice(Span::new(start, c.pos())), "\u{2003}");
    assert_eq!(c.slice(Span::new(0, 1)), "x");
    assert_eq!(c.slice(Span::point(1)), "");
    assert_eq!(c.rest(), "y");
}

#[test]
fn cursor_is_copy_snapshot() {
    let mut c = Cursor::new("AB");
    let snapshot = c;
    c.advance();
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(c.pos(), 1);
}
