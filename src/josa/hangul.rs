//! Hangul syllable classification.

/// First precomposed syllable (가).
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣).
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of jongseong slots, including "no final consonant".
const JONGSEONG_COUNT: u32 = 28;

/// Whether `c` is a precomposed modern Hangul syllable.
pub fn is_hangul_syllable(c: char) -> bool {
	(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// Jongseong index of a syllable (0 = none, 1..=27 = ㄱ..ㅎ).
///
/// Returns `None` for anything that is not a precomposed syllable.
pub fn jongseong_index(c: char) -> Option<u32> {
	if !is_hangul_syllable(c) {
		return None;
	}
	Some((c as u32 - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT)
}

/// Whether `c` carries a final consonant (batchim).
///
/// Non-Hangul characters never do.
pub fn has_batchim(c: char) -> bool {
	jongseong_index(c).is_some_and(|jong| jong != 0)
}

/// How a word ends, for particle selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
	Consonant,
	Vowel,
}

impl Ending {
	/// Classify a word by its last character. Empty words count as vowel-ending.
	pub fn of_word(word: &str) -> Self {
		match word.chars().next_back() {
			Some(c) if has_batchim(c) => Ending::Consonant,
			_ => Ending::Vowel,
		}
	}
}
