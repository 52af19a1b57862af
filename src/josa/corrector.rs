use crate::josa::hangul::Ending;
use crate::josa::particle::{Particle, all_forms};
use crate::rules::literal::{MATCHER_SIZE_LIMIT, build_regex, escape_literal};
use log::{debug, warn};
use regex::{Captures, Regex};

/// Matcher for one target word followed by a particle.
#[derive(Debug, Clone)]
struct WordMatcher {
	word: String,
	ending: Ending,
	regex: Regex,
}

impl WordMatcher {
	fn build(word: &str, size_limit: usize) -> Option<Self> {
		if word.is_empty() {
			return None;
		}
		let pattern = format!("{}({})", escape_literal(word), all_forms().join("|"));
		match build_regex(&pattern, word, size_limit) {
			Ok(regex) => Some(WordMatcher {
				word: word.to_string(),
				ending: Ending::of_word(word),
				regex,
			}),
			Err(e) => {
				warn!("skipping particle correction for {word:?}: {e}");
				None
			}
		}
	}

	fn correct(&self, text: &str) -> String {
		self.regex
			.replace_all(text, |caps: &Captures| {
				let found = &caps[1];
				let fixed = Particle::from_form(found)
					.map(|p| p.form_for(self.ending))
					.unwrap_or(found);
				if fixed != found {
					debug!("particle after {:?}: {found} -> {fixed}", self.word);
				}
				format!("{}{}", self.word, fixed)
			})
			.into_owned()
	}
}

/// Rewrites particles after a fixed list of words so they agree with each
/// word's final syllable.
///
/// Words are applied one after another over the whole text, in list order.
/// When two words cover the same span, the later word sees the earlier
/// word's output.
#[derive(Debug, Clone, Default)]
pub struct JosaCorrector {
	matchers: Vec<WordMatcher>,
}

impl JosaCorrector {
	pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
		Self::with_size_limit(words, MATCHER_SIZE_LIMIT)
	}

	pub(crate) fn with_size_limit<S: AsRef<str>>(words: &[S], size_limit: usize) -> Self {
		Self {
			matchers: words
				.iter()
				.filter_map(|w| WordMatcher::build(w.as_ref(), size_limit))
				.collect(),
		}
	}

	pub fn correct(&self, text: &str) -> String {
		let mut current = text.to_string();
		for matcher in &self.matchers {
			current = matcher.correct(&current);
		}
		current
	}
}

/// Correct particles after each of `words` in `text`.
pub fn correct<S: AsRef<str>>(text: &str, words: &[S]) -> String {
	JosaCorrector::new(words).correct(text)
}
