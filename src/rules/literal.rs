use crate::error::{PasteError, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

/// Upper bound on the compiled size of a single matcher.
///
/// Pasted rules can be arbitrarily long; anything past this is rejected
/// instead of compiled.
pub const MATCHER_SIZE_LIMIT: usize = 1 << 20;

/// A matcher for one literal string.
///
/// The literal is escaped before compilation, so `.*`, `$1`, `[`, `\` and
/// friends only ever match themselves.
#[derive(Debug, Clone)]
pub struct LiteralPattern {
	regex: Regex,
}

impl LiteralPattern {
	/// Compile a literal.
	///
	/// Returns `Ok(None)` for an empty literal: there is nothing to match and a
	/// zero-length matcher would hit between every character.
	pub fn compile(literal: &str) -> Result<Option<Self>> {
		Self::compile_with_limit(literal, MATCHER_SIZE_LIMIT)
	}

	pub(crate) fn compile_with_limit(literal: &str, size_limit: usize) -> Result<Option<Self>> {
		if literal.is_empty() {
			return Ok(None);
		}
		let regex = build_regex(&escape_literal(literal), literal, size_limit)?;
		Ok(Some(LiteralPattern { regex }))
	}

	pub fn is_match(&self, text: &str) -> bool {
		self.regex.is_match(text)
	}

	/// Replace every occurrence with `replacement`, taken verbatim.
	pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
		self.regex.replace_all(text, NoExpand(replacement))
	}
}

/// Escape every regex metacharacter in `literal`.
pub fn escape_literal(literal: &str) -> String {
	regex::escape(literal)
}

/// Compile an already-escaped pattern, attributing failures to `literal`.
pub(crate) fn build_regex(pattern: &str, literal: &str, size_limit: usize) -> Result<Regex> {
	RegexBuilder::new(pattern)
		.size_limit(size_limit)
		.build()
		.map_err(|source| PasteError::InvalidPattern {
			literal: literal.to_string(),
			source,
		})
}
