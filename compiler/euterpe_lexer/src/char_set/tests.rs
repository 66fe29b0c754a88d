use super::*;

#[test]
fn ascii_whitespace_members() {
    for ch in ['\t', '\n', '\u{000B}', '\u{000C}', '\r', ' '] {
        assert!(is_notation_whitespace(ch), "{ch:?} should be whitespace");
    }
}

#[test]
fn unicode_whitespace_members() {
    let exotic = [
        '\u{0085}', '\u{00A0}', '\u{1680}', '\u{180E}', '\u{2000}', '\u{2005}', '\u{200A}',
        '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
    ];
    for ch in exotic {
        assert!(is_notation_whitespace(ch), "{ch:?} should be whitespace");
    }
}

#[test]
fn near_misses_are_not_whitespace() {
    // Zero-width space and BOM sit next to the set but are excluded.
    for ch in ['\u{200B}', '\u{FEFF}', '\u{0008}', '\u{000E}', '\u{001F}', 'a', '\0'] {
        assert!(!is_notation_whitespace(ch), "{ch:?} should not be whitespace");
    }
}

#[test]
fn range_is_inclusive() {
    let set = CharSet::Range('A', 'G');
    assert!(set.contains('A'));
    assert!(set.contains('G'));
    assert!(!set.contains('H'));
    assert!(!set.contains('a'));
}

#[test]
fn chars_matches_listed_only() {
    let set = CharSet::Chars(&['?', '.']);
    assert!(set.contains('?'));
    assert!(set.contains('.'));
    assert!(!set.contains(','));
}

#[test]
fn union_matches_any_member() {
    static LETTERS: &[CharSet] = &[CharSet::Range('h', 'z'), CharSet::Range('H', 'Z')];
    let set = CharSet::Union(LETTERS);
    assert!(set.contains('h'));
    assert!(set.contains('Z'));
    assert!(!set.contains('a'));
    assert!(!set.contains('G'));
}

#[test]
fn empty_union_matches_nothing() {
    assert!(!CharSet::Union(&[]).contains('A'));
}
