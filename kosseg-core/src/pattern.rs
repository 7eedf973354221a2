//! Static pattern table for Korean sentence boundary detection
//!
//! Maps (scan state, character) pairs to the grammatical roles that
//! character can play at that state. The table contents are hand-curated
//! linguistic data; the per-character flag combinations are intentional
//! and changing any entry changes segmentation behavior.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Bitset of grammatical roles a character can play at a given scan state.
///
/// Multiple roles may apply to one character in one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Roles(u8);

impl Roles {
    /// No recognized role.
    pub const NONE: Roles = Roles(0);

    /// As the *previous* character, licenses entry into the ending state.
    pub const PREV_TRIGGER: Roles = Roles(1 << 0);

    /// Under [`common_roles`] only: the apparent boundary is actually
    /// mid-word (trailing jamo) or mid-punctuation-run.
    pub const CONTINUATION: Roles = Roles(1 << 1);

    /// As the *current* character, the sentence keeps going; no split.
    pub const NEXT_CONTINUES: Roles = Roles(1 << 2);

    /// As the current character, may belong to the *next* sentence and is
    /// held back from the buffer until the boundary side is decided.
    pub const NEXT_HELD: Roles = Roles(1 << 3);

    /// Softer keeps-going signal, consulted when nothing stronger matched.
    pub const NEXT_WEAK: Roles = Roles(1 << 4);

    /// Combine two role sets.
    pub const fn or(self, other: Roles) -> Roles {
        Roles(self.0 | other.0)
    }

    /// True if any role in `other` is present in `self`.
    pub const fn contains(self, other: Roles) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no role is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Tentative scan state of the boundary state machine.
///
/// Every non-default state returns to [`State::Default`] within the same
/// or a later iteration; only end-of-input is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// No sentence-ending candidate pending.
    #[default]
    Default,
    /// Candidate triggered by the ending particle "다".
    Da,
    /// Candidate triggered by the ending particle "요".
    Yo,
    /// Candidate triggered by the ending particles "죠" / "죵".
    Jyo,
    /// Candidate triggered by sentence-final punctuation.
    Punct,
}

impl State {
    /// State a character would open when seen while scanning in
    /// [`State::Default`], if its preceding character licenses it.
    pub(crate) fn trigger_for(ch: char) -> Option<State> {
        match ch {
            '다' => Some(State::Da),
            '요' => Some(State::Yo),
            '죠' | '죵' => Some(State::Jyo),
            '.' | '!' | '?' | '…' | '~' => Some(State::Punct),
            _ => None,
        }
    }
}

// Short aliases so the table data below stays readable.
const PREV: Roles = Roles::PREV_TRIGGER;
const CONT: Roles = Roles::CONTINUATION;
const NEXT: Roles = Roles::NEXT_CONTINUES;
const HELD: Roles = Roles::NEXT_HELD;
const WEAK: Roles = Roles::NEXT_WEAK;

// Stem-final characters and following particles for the "다" ending.
const DA_PATTERNS: &[(char, Roles)] = &[
    ('갔', PREV), ('간', PREV), ('겠', PREV), ('겼', PREV), ('같', PREV),
    ('놨', PREV), ('녔', PREV), ('니', PREV), ('논', PREV), ('낸', PREV),
    ('냈', PREV),
    ('뒀', PREV), ('때', PREV),
    ('랐', PREV), ('럽', PREV), ('렵', PREV), ('렸', PREV), ('린', PREV),
    ('뤘', PREV),
    ('몄', PREV), ('밌', PREV),
    ('볐', PREV), ('볍', PREV), ('봤', PREV),
    ('섰', PREV), ('샜', PREV), ('셨', PREV), ('싸', PREV),
    ('않', PREV), ('았', PREV), ('없', PREV), ('었', PREV), ('였', PREV),
    ('온', PREV), ('웠', PREV), ('이', PREV), ('인', PREV), ('있', PREV),
    ('진', PREV), ('졌', PREV),
    ('쳤', PREV), ('챘', PREV), ('췄', PREV),
    ('팠', PREV), ('펐', PREV), ('폈', PREV),
    ('캔', PREV), ('켰', PREV), ('켠', PREV),
    ('했', PREV), ('혔', PREV),
    ('가', NEXT),
    ('고', NEXT.or(WEAK)),
    ('는', NEXT.or(WEAK)),
    ('라', NEXT),
    ('시', NEXT),
    ('던', NEXT),
    ('든', NEXT),
    ('지', WEAK),
    ('를', NEXT),
    ('운', NEXT),
    ('만', NEXT),
    ('며', NEXT.or(WEAK)),
    ('면', NEXT.or(HELD).or(WEAK)),
    ('서', PREV.or(WEAK)),
    ('싶', PREV.or(NEXT)),
    ('죠', NEXT),
    ('죵', NEXT),
    ('쥬', NEXT),
    ('한', NEXT),
    ('하', PREV.or(HELD)),
    ('해', HELD),
    ('도', WEAK),
];

// Stem-final characters and following particles for the "요" ending.
const YO_PATTERNS: &[(char, Roles)] = &[
    ('겨', PREV), ('거', PREV), ('구', PREV), ('군', PREV), ('걸', PREV),
    ('까', PREV), ('께', PREV), ('껴', PREV),
    ('네', PREV), ('나', PREV), ('니', PREV),
    ('데', PREV), ('든', PREV),
    ('려', PREV),
    ('서', PREV), ('세', PREV),
    ('아', PREV), ('어', PREV), ('워', PREV), ('에', PREV), ('예', PREV),
    ('을', PREV),
    ('져', PREV), ('줘', PREV), ('지', PREV),
    ('춰', PREV),
    ('해', PREV),
    ('먼', PREV), ('만', PREV),
    ('고', WEAK),
    ('는', NEXT),
    ('라', HELD),
    ('를', NEXT),
    ('즘', NEXT),
    ('소', NEXT),
    ('며', WEAK),
    ('면', PREV.or(WEAK)),
    ('하', HELD),
];

// Stem-final characters and following particles for the "죠"/"죵" endings.
const JYO_PATTERNS: &[(char, Roles)] = &[
    ('거', PREV), ('가', PREV), ('갔', PREV), ('겠', PREV), ('같', PREV),
    ('놨', PREV), ('녔', PREV), ('냈', PREV), ('니', PREV),
    ('뒀', PREV),
    ('르', PREV), ('랐', PREV), ('럽', PREV), ('렵', PREV), ('렸', PREV),
    ('서', PREV), ('섰', PREV), ('셨', PREV), ('샜', PREV),
    ('았', PREV), ('않', PREV), ('없', PREV), ('었', PREV), ('였', PREV),
    ('이', PREV),
    ('졌', PREV),
    ('쳤', PREV), ('챘', PREV),
    ('팠', PREV), ('펐', PREV), ('폈', PREV),
    ('켰', PREV),
    ('했', PREV), ('혔', PREV),
    ('고', PREV.or(WEAK)),
    ('는', NEXT),
    ('라', HELD),
    ('를', NEXT),
    ('며', WEAK),
    ('면', PREV.or(WEAK)),
];

// Characters that license or continue a punctuation boundary.
const PUNCT_PATTERNS: &[(char, Roles)] = &[
    ('것', PREV), ('가', PREV), ('까', PREV), ('거', PREV), ('걸', PREV),
    ('껄', PREV),
    ('나', PREV), ('니', PREV), ('네', PREV),
    ('다', PREV), ('도', PREV), ('든', PREV), ('데', PREV),
    ('랴', PREV), ('래', PREV),
    ('마', PREV),
    ('봐', PREV),
    ('서', PREV), ('셈', PREV),
    ('아', PREV), ('어', PREV), ('오', PREV), ('요', PREV), ('을', PREV),
    ('자', PREV), ('지', PREV), ('죠', PREV), ('쥬', PREV), ('죵', PREV),
    ('고', PREV.or(WEAK)),
    ('는', NEXT),
    ('라', PREV.or(NEXT)),
    ('며', WEAK),
    ('면', WEAK),
    ('하', HELD),
];

// Jamo fragments and secondary punctuation that keep an apparent boundary
// open: mid-word consonant/vowel letters and punctuation-run characters.
const COMMON_PATTERNS: &[(char, Roles)] = &[
    ('ㄱ', CONT), ('ㄴ', CONT), ('ㄷ', CONT), ('ㄹ', CONT),
    ('ㅁ', CONT), ('ㅂ', CONT), ('ㅅ', CONT), ('ㅇ', CONT),
    ('ㅈ', CONT), ('ㅊ', CONT), ('ㅋ', CONT), ('ㅌ', CONT),
    ('ㅍ', CONT), ('ㅎ', CONT),
    ('ㅏ', CONT), ('ㅑ', CONT), ('ㅓ', CONT), ('ㅕ', CONT),
    ('ㅗ', CONT), ('ㅛ', CONT), ('ㅜ', CONT), ('ㅠ', CONT),
    ('ㅡ', CONT), ('ㅣ', CONT),
    ('^', CONT), (';', CONT), ('.', CONT), ('?', CONT),
    ('!', CONT), ('~', CONT), ('…', CONT), (',', CONT),
];

/// The assembled lookup table, one map per namespace.
struct PatternTable {
    da: HashMap<char, Roles>,
    yo: HashMap<char, Roles>,
    jyo: HashMap<char, Roles>,
    punct: HashMap<char, Roles>,
    common: HashMap<char, Roles>,
}

impl PatternTable {
    fn build() -> Self {
        fn collect(patterns: &[(char, Roles)]) -> HashMap<char, Roles> {
            patterns.iter().copied().collect()
        }

        Self {
            da: collect(DA_PATTERNS),
            yo: collect(YO_PATTERNS),
            jyo: collect(JYO_PATTERNS),
            punct: collect(PUNCT_PATTERNS),
            common: collect(COMMON_PATTERNS),
        }
    }

    fn namespace(&self, state: State) -> Option<&HashMap<char, Roles>> {
        match state {
            State::Default => None,
            State::Da => Some(&self.da),
            State::Yo => Some(&self.yo),
            State::Jyo => Some(&self.jyo),
            State::Punct => Some(&self.punct),
        }
    }
}

static TABLE: OnceLock<PatternTable> = OnceLock::new();

fn table() -> &'static PatternTable {
    TABLE.get_or_init(PatternTable::build)
}

/// Roles `ch` plays under `state`'s namespace.
///
/// Characters absent from the table (and [`State::Default`], which has no
/// namespace) yield [`Roles::NONE`].
pub fn roles(state: State, ch: Option<char>) -> Roles {
    match (table().namespace(state), ch) {
        (Some(map), Some(ch)) => map.get(&ch).copied().unwrap_or(Roles::NONE),
        _ => Roles::NONE,
    }
}

/// Roles `ch` plays under the shared `Common` namespace.
pub fn common_roles(ch: Option<char>) -> Roles {
    match ch {
        Some(ch) => table().common.get(&ch).copied().unwrap_or(Roles::NONE),
        None => Roles::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_characters_map_to_their_states() {
        assert_eq!(State::trigger_for('다'), Some(State::Da));
        assert_eq!(State::trigger_for('요'), Some(State::Yo));
        assert_eq!(State::trigger_for('죠'), Some(State::Jyo));
        assert_eq!(State::trigger_for('죵'), Some(State::Jyo));
        for punct in ['.', '!', '?', '…', '~'] {
            assert_eq!(State::trigger_for(punct), Some(State::Punct));
        }
        assert_eq!(State::trigger_for('가'), None);
    }

    #[test]
    fn hand_tuned_flag_combinations_survive() {
        // These exact combinations drive the guard-clause priority order;
        // regression-pin them.
        let myeon = roles(State::Da, Some('면'));
        assert!(myeon.contains(Roles::NEXT_CONTINUES));
        assert!(myeon.contains(Roles::NEXT_HELD));
        assert!(myeon.contains(Roles::NEXT_WEAK));
        assert!(!myeon.contains(Roles::PREV_TRIGGER));

        let ha = roles(State::Da, Some('하'));
        assert!(ha.contains(Roles::PREV_TRIGGER));
        assert!(ha.contains(Roles::NEXT_HELD));

        assert_eq!(roles(State::Yo, Some('라')), Roles::NEXT_HELD);
        assert_eq!(
            roles(State::Jyo, Some('고')),
            Roles::PREV_TRIGGER.or(Roles::NEXT_WEAK)
        );
        assert_eq!(roles(State::Punct, Some('하')), Roles::NEXT_HELD);
    }

    #[test]
    fn unknown_characters_have_no_role() {
        assert_eq!(roles(State::Da, Some('김')), Roles::NONE);
        assert_eq!(roles(State::Default, Some('다')), Roles::NONE);
        assert_eq!(roles(State::Da, None), Roles::NONE);
        assert_eq!(common_roles(Some('가')), Roles::NONE);
    }

    #[test]
    fn common_namespace_marks_jamo_and_secondary_punctuation() {
        for ch in ['ㄱ', 'ㅎ', 'ㅏ', 'ㅣ', '.', '!', '…', ',', '^', ';'] {
            assert!(common_roles(Some(ch)).contains(Roles::CONTINUATION));
        }
        assert!(!common_roles(Some(' ')).contains(Roles::CONTINUATION));
    }

    #[test]
    fn role_set_operations() {
        let combined = Roles::PREV_TRIGGER.or(Roles::NEXT_WEAK);
        assert!(combined.contains(Roles::PREV_TRIGGER));
        assert!(combined.contains(Roles::NEXT_WEAK));
        assert!(!combined.contains(Roles::NEXT_HELD));
        assert!(Roles::NONE.is_empty());
        assert!(!combined.is_empty());
    }
}
