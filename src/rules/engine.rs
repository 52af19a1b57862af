use crate::config::types::ReplaceRule;
use crate::rules::literal::{LiteralPattern, MATCHER_SIZE_LIMIT};
use log::{debug, warn};

/// An enabled rule with its literal matcher built.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// The configured rule.
	pub rule: ReplaceRule,

	/// Zero-based position of the rule in the configured list.
	pub position: usize,

	pattern: LiteralPattern,
}

impl CompiledRule {
	/// Apply this rule, returning `None` when nothing matched.
	pub fn apply(&self, text: &str) -> Option<String> {
		if !self.pattern.is_match(text) {
			return None;
		}
		Some(self.pattern.replace_all(text, &self.rule.to).into_owned())
	}
}

/// Result of running a rule list over some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
	pub text: String,

	/// Positions of the rules that matched at least once, in application order.
	pub fired: Vec<usize>,
}

/// Compile the enabled rules of a rule list.
///
/// Disabled rules and rules with an empty `from` are dropped. A rule whose
/// matcher cannot be built is logged and dropped; the rest still compile.
pub fn compile_rules(rules: &[ReplaceRule]) -> Vec<CompiledRule> {
	compile_rules_with_limit(rules, MATCHER_SIZE_LIMIT)
}

pub(crate) fn compile_rules_with_limit(
	rules: &[ReplaceRule],
	size_limit: usize,
) -> Vec<CompiledRule> {
	rules
		.iter()
		.enumerate()
		.filter(|(_, rule)| rule.enabled)
		.filter_map(|(position, rule)| {
			match LiteralPattern::compile_with_limit(&rule.from, size_limit) {
				Ok(Some(pattern)) => Some(CompiledRule {
					rule: rule.clone(),
					position,
					pattern,
				}),
				Ok(None) => {
					debug!("rule {} has an empty pattern, skipping", position + 1);
					None
				}
				Err(e) => {
					warn!("skipping rule {}: {e}", position + 1);
					None
				}
			}
		})
		.collect()
}

/// Apply compiled rules in order; each rule sees the previous rule's output.
pub fn apply_compiled(text: &str, rules: &[CompiledRule]) -> RuleOutcome {
	let mut current = text.to_string();
	let mut fired = Vec::new();

	for compiled in rules {
		if let Some(replaced) = compiled.apply(&current) {
			debug!(
				"rule {} replaced {:?} with {:?}",
				compiled.position + 1,
				compiled.rule.from,
				compiled.rule.to
			);
			current = replaced;
			fired.push(compiled.position);
		}
	}

	RuleOutcome {
		text: current,
		fired,
	}
}

/// Apply the enabled rules of `rules` to `text`.
pub fn apply_rules(text: &str, rules: &[ReplaceRule]) -> String {
	apply_compiled(text, &compile_rules(rules)).text
}
