//! The paste transformation pipeline.
//!
//! Fixed order:
//! 1. Replace rules, in list order
//! 2. Particle correction after the `to` words of enabled rules
//! 3. Newline removal (`\r\n`, `\n`, `\r`)
//! 4. Prefix, then suffix

use crate::config::TransformConfig;
use crate::josa::JosaCorrector;
use crate::rules::{apply_compiled, compile_rules};
use log::debug;

/// Per-paste options that are not part of the stored settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformRequest {
	/// Insert the clipboard text as-is (plain paste).
	pub bypass_transform: bool,
}

/// Transform pasted text with the given settings.
pub fn transform(raw: &str, config: &TransformConfig) -> String {
	transform_request(raw, config, TransformRequest::default())
}

/// Transform pasted text, honoring per-paste options.
pub fn transform_request(raw: &str, config: &TransformConfig, request: TransformRequest) -> String {
	if request.bypass_transform || !config.enabled {
		debug!(
			"transform bypassed (bypass={}, enabled={})",
			request.bypass_transform, config.enabled
		);
		return raw.to_string();
	}

	let outcome = apply_compiled(raw, &compile_rules(&config.rules));
	debug!("{} replace rule(s) fired", outcome.fired.len());

	let corrected = JosaCorrector::new(&config.target_words()).correct(&outcome.text);
	let mut text = strip_newlines(&corrected);

	if config.prefix_enabled {
		text.insert_str(0, &config.prefix_text);
	}
	if config.suffix_enabled {
		text.push_str(&config.suffix_text);
	}

	text
}

/// Remove every `\r` and `\n`, which covers `\r\n` as well.
pub fn strip_newlines(text: &str) -> String {
	text.replace(['\r', '\n'], "")
}
