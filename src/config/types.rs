use serde::{Deserialize, Serialize};

use crate::error::PasteError;

pub const DEFAULT_PREFIX_TEXT: &str = "접두사";
pub const DEFAULT_SUFFIX_TEXT: &str = "접미사";

/// Settings for one paste transformation.
///
/// Field names follow the extension storage keys (`prefixEnabled`,
/// `replaceRules`, ...) so a stored settings object maps onto this type
/// directly. Missing keys fall back to [`TransformConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformConfig {
	/// Master switch. When false the pipeline returns its input untouched.
	pub enabled: bool,

	pub prefix_enabled: bool,

	pub suffix_enabled: bool,

	/// Text prepended when `prefix_enabled` is set.
	pub prefix_text: String,

	/// Text appended when `suffix_enabled` is set.
	pub suffix_text: String,

	/// Replace rules, applied in order.
	#[serde(rename = "replaceRules", alias = "rules")]
	pub rules: Vec<ReplaceRule>,
}

impl Default for TransformConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			prefix_enabled: false,
			suffix_enabled: false,
			prefix_text: DEFAULT_PREFIX_TEXT.to_string(),
			suffix_text: DEFAULT_SUFFIX_TEXT.to_string(),
			rules: vec![ReplaceRule::new("\n", "")],
		}
	}
}

/// A literal find/replace rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceRule {
	/// Literal text to search for. Never interpreted as a regex.
	pub from: String,

	/// Literal replacement text. May be empty.
	#[serde(default)]
	pub to: String,

	#[serde(default = "default_enabled")]
	pub enabled: bool,
}

fn default_enabled() -> bool {
	true
}

impl ReplaceRule {
	/// Create an enabled rule.
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			enabled: true,
		}
	}

	/// Create a rule that is stored but skipped.
	pub fn disabled(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			enabled: false,
			..Self::new(from, to)
		}
	}
}

impl TransformConfig {
	/// Check that every rule has a non-empty `from`.
	///
	/// The rule engine tolerates empty patterns, but a settings file that
	/// contains one was almost certainly edited by hand and is reported.
	pub fn validate(&self) -> Result<(), PasteError> {
		for (i, rule) in self.rules.iter().enumerate() {
			if rule.from.is_empty() {
				return Err(PasteError::EmptyPattern { index: i + 1 });
			}
		}
		Ok(())
	}

	/// Non-empty `to` values of enabled rules, first occurrence only, in rule order.
	pub fn target_words(&self) -> Vec<&str> {
		let mut words: Vec<&str> = Vec::new();
		for rule in self.rules.iter().filter(|r| r.enabled) {
			if !rule.to.is_empty() && !words.contains(&rule.to.as_str()) {
				words.push(&rule.to);
			}
		}
		words
	}

	/// Append a rule.
	pub fn add_rule(&mut self, rule: ReplaceRule) {
		self.rules.push(rule);
	}

	/// Remove the rule at a 1-based position.
	pub fn remove_rule(&mut self, index: usize) -> Result<ReplaceRule, PasteError> {
		let i = self.rule_slot(index)?;
		Ok(self.rules.remove(i))
	}

	/// Enable or disable the rule at a 1-based position.
	pub fn set_rule_enabled(&mut self, index: usize, enabled: bool) -> Result<(), PasteError> {
		let i = self.rule_slot(index)?;
		self.rules[i].enabled = enabled;
		Ok(())
	}

	fn rule_slot(&self, index: usize) -> Result<usize, PasteError> {
		if index == 0 || index > self.rules.len() {
			return Err(PasteError::RuleIndexOutOfRange {
				index,
				len: self.rules.len(),
			});
		}
		Ok(index - 1)
	}
}
