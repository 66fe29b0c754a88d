//! Declarative classification rules.
//!
//! A [`Ruleset`] maps single characters to a [`CharClass`]. Rules are kept
//! sorted by the precedence of the class they produce, so the first matching
//! rule always wins in the same fixed order no matter how the table was
//! written down. Adding a character to the notation only requires touching
//! [`EUTERPEAN_RULES`].
//!
//! The one context-sensitive decision in the notation lives here as well:
//! lowercase `a`-`g` repeat the previous note when the previous emitted token
//! was a note, and are rests otherwise. See [`Ruleset::resolve_ambiguous`].

use std::sync::OnceLock;

use euterpe_ir::TokenKind;

use crate::char_set::CharSet;

/// Context-free classification of one character.
///
/// Variants are declared in precedence order: when two rules could match
/// the same character, the one producing the lower discriminant wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CharClass {
    DoubleVolume = 0,
    Note = 1,
    /// Lowercase `a`-`g`: a note repeat or a rest, depending on context.
    RepeatOrRest = 2,
    InstrumentChange = 3,
    OctaveChange = 4,
    Rest = 5,
    /// Matched by no rule.
    Invalid = 6,
}

impl CharClass {
    /// Rank used to order rules (lower = checked first).
    #[inline]
    pub const fn precedence(self) -> u8 {
        self as u8
    }

    /// The token kind this class produces on its own.
    ///
    /// Returns `None` for [`CharClass::RepeatOrRest`], which needs the
    /// previous token to decide.
    #[inline]
    pub const fn token_kind(self) -> Option<TokenKind> {
        match self {
            CharClass::DoubleVolume => Some(TokenKind::DoubleVolume),
            CharClass::Note => Some(TokenKind::Note),
            CharClass::RepeatOrRest => None,
            CharClass::InstrumentChange => Some(TokenKind::InstrumentChange),
            CharClass::OctaveChange => Some(TokenKind::OctaveChange),
            CharClass::Rest => Some(TokenKind::Rest),
            CharClass::Invalid => Some(TokenKind::Invalid),
        }
    }
}

/// A declarative classification rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Human-readable name for debugging.
    pub name: &'static str,

    /// The class assigned to matching characters.
    pub class: CharClass,

    /// The characters this rule matches.
    pub set: CharSet,
}

impl Rule {
    #[inline]
    pub const fn new(name: &'static str, class: CharClass, set: CharSet) -> Self {
        Rule { name, class, set }
    }

    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        self.set.contains(ch)
    }
}

static INSTRUMENT_SETS: &[CharSet] = &[
    CharSet::Chars(&['!', 'i', 'I', 'o', 'O', 'u', 'U', '\n', ';']),
    CharSet::Range('0', '9'),
];

static REST_LETTERS: &[CharSet] = &[CharSet::Range('h', 'z'), CharSet::Range('H', 'Z')];

/// The canonical Euterpean rule table.
///
/// Overlaps are settled by class precedence, not by position in this list:
/// `\n` is both whitespace and an instrument change and classifies as
/// whitespace; `i`, `o`, `u` are both letters and instrument changes and
/// classify as instrument changes.
pub static EUTERPEAN_RULES: &[Rule] = &[
    Rule::new("whitespace", CharClass::DoubleVolume, CharSet::Whitespace),
    Rule::new("note", CharClass::Note, CharSet::Range('A', 'G')),
    Rule::new(
        "repeat-or-rest",
        CharClass::RepeatOrRest,
        CharSet::Range('a', 'g'),
    ),
    Rule::new(
        "instrument",
        CharClass::InstrumentChange,
        CharSet::Union(INSTRUMENT_SETS),
    ),
    Rule::new("octave", CharClass::OctaveChange, CharSet::Chars(&['?', '.'])),
    Rule::new("rest", CharClass::Rest, CharSet::Union(REST_LETTERS)),
];

static EUTERPEAN: OnceLock<Ruleset> = OnceLock::new();

/// An immutable, precedence-ordered table of classification rules.
///
/// Construct once and share freely: a `Ruleset` has no interior mutability,
/// so any number of tokenizers may read it concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    /// Rules sorted by `(class precedence, name)`.
    rules: Vec<Rule>,
    /// Pre-computed classification of every ASCII character.
    ascii: [CharClass; 128],
}

impl Ruleset {
    /// Build a ruleset from rules given in any order.
    ///
    /// Any permutation of the same rules produces an equal ruleset.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules: Vec<Rule> = rules.into_iter().collect();
        rules.sort_by_key(|rule| (rule.class.precedence(), rule.name));

        let mut ascii = [CharClass::Invalid; 128];
        for (byte, slot) in (0u8..128).zip(ascii.iter_mut()) {
            *slot = first_match(&rules, char::from(byte));
        }

        Ruleset { rules, ascii }
    }

    /// The canonical Euterpean ruleset (lazily initialized, shared).
    pub fn euterpean() -> &'static Ruleset {
        EUTERPEAN.get_or_init(|| Ruleset::new(EUTERPEAN_RULES.iter().copied()))
    }

    /// Rules in the order they are checked.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify one character without context.
    ///
    /// Never fails: a character no rule matches is [`CharClass::Invalid`].
    #[inline]
    pub fn classify(&self, ch: char) -> CharClass {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            first_match(&self.rules, ch)
        }
    }

    /// Resolve a [`CharClass::RepeatOrRest`] character.
    ///
    /// `prev` is the kind of the token emitted immediately before, or `None`
    /// at the start of the stream. Only that one token matters.
    #[inline]
    #[allow(
        clippy::unused_self,
        reason = "resolution belongs to the ruleset even though the canonical rule is fixed"
    )]
    pub fn resolve_ambiguous(&self, prev: Option<TokenKind>) -> TokenKind {
        if prev == Some(TokenKind::Note) {
            TokenKind::Note
        } else {
            TokenKind::Rest
        }
    }

    /// Classify `ch` and resolve it against the previous token's kind.
    #[inline]
    pub fn kind_of(&self, ch: char, prev: Option<TokenKind>) -> TokenKind {
        match self.classify(ch).token_kind() {
            Some(kind) => kind,
            None => self.resolve_ambiguous(prev),
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::euterpean().clone()
    }
}

fn first_match(rules: &[Rule], ch: char) -> CharClass {
    rules
        .iter()
        .find(|rule| rule.matches(ch))
        .map_or(CharClass::Invalid, |rule| rule.class)
}
