use super::*;
use pretty_assertions::assert_eq;

fn scanner(source: &str) -> Scanner<'_, 'static> {
    Scanner::new(source, Ruleset::euterpean())
}

fn scan(source: &str) -> Vec<(TokenKind, String)> {
    scanner(source)
        .map(|t| (t.kind, t.value.to_string()))
        .collect()
}

#[test]
fn state_transitions() {
    let mut s = scanner("A");
    assert_eq!(s.state(), ScanState::Scanning);
    assert_eq!(s.prev_kind(), None);

    let note = s.next_token();
    assert_eq!(note.kind, TokenKind::Note);
    assert_eq!(s.state(), ScanState::AtEnd);
    assert_eq!(s.prev_kind(), Some(TokenKind::Note));

    let eof = s.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(s.state(), ScanState::Done);
}

#[test]
fn empty_input_starts_at_end() {
    let mut s = scanner("");
    assert_eq!(s.state(), ScanState::AtEnd);
    assert_eq!(s.next_token(), Token::eof(0));
    assert_eq!(s.state(), ScanState::Done);
}

#[test]
#[should_panic(expected = "after the end-marker was emitted")]
fn next_token_after_done_panics() {
    let mut s = scanner("A");
    s.next_token();
    s.next_token();
    s.next_token();
}

#[test]
fn iterator_is_fused_after_eof() {
    let mut s = scanner("C");
    assert_eq!(s.next().map(|t| t.kind), Some(TokenKind::Note));
    assert_eq!(s.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
}

#[test]
fn spans_follow_byte_offsets() {
    let spans: Vec<Span> = scanner("A\u{3000}b").map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(1, 4),
            Span::new(4, 5),
            Span::point(5)
        ]
    );
}

#[test]
fn context_is_previous_emitted_kind() {
    assert_eq!(
        scan("Aab"),
        vec![
            (TokenKind::Note, "A".into()),
            (TokenKind::Note, "a".into()),
            (TokenKind::Note, "b".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn context_does_not_look_past_one_token() {
    // The space breaks the chain even though a note came two tokens earlier.
    assert_eq!(
        scan("A a"),
        vec![
            (TokenKind::Note, "A".into()),
            (TokenKind::DoubleVolume, " ".into()),
            (TokenKind::Rest, "a".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn invalid_character_becomes_context() {
    let kinds: Vec<TokenKind> = scanner("A@a").map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Note,
            TokenKind::Invalid,
            TokenKind::Rest,
            TokenKind::Eof
        ]
    );
}

#[test]
fn skipping_invalid_drops_and_keeps_context() {
    let s = scanner("A@#a").skipping_invalid();
    let tokens: Vec<(TokenKind, String)> = s.map(|t| (t.kind, t.value.to_string())).collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Note, "A".into()),
            (TokenKind::Note, "a".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn skipping_invalid_at_end_still_emits_eof() {
    let tokens: Vec<Token> = scanner("@@").skipping_invalid().collect();
    assert_eq!(tokens, vec![Token::eof(2)]);
}

#[test]
fn size_hint_bounds_token_count() {
    for source in ["", "A", "A\u{3000}b", "\u{1F3B5}\u{1F3B5}", "hello world"] {
        let s = scanner(source);
        let (lower, upper) = s.size_hint();
        let count = s.count();
        assert!(lower <= count, "lower bound {lower} > {count} for {source:?}");
        assert!(
            upper.is_some_and(|u| count <= u),
            "upper bound {upper:?} < {count} for {source:?}"
        );
    }
}

#[test]
fn pos_tracks_progress() {
    let mut s = scanner("AB");
    assert_eq!(s.pos(), 0);
    s.next_token();
    assert_eq!(s.pos(), 1);
}
