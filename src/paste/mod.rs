//! Paste handling.
//!
//! This module handles:
//! - Reading the pasted text from a clipboard source
//! - Taking a settings snapshot for this paste
//! - Running the transformation pipeline
//! - Inserting the result, falling back through insertion strategies

pub mod io;

pub use io::{ClipboardReader, FieldInserter, StreamReader, TextInserter, WriterInserter};

use crate::config::SettingsStore;
use crate::pipeline::{TransformRequest, transform_request};
use log::{debug, info, warn};

/// What happened to one paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
	/// The text was inserted by the named strategy.
	Inserted { strategy: String, text: String },

	/// Clipboard text was unavailable; the host should paste natively.
	NativePaste,

	/// Every insertion strategy failed. Native paste is not retried.
	InsertFailed { text: String },
}

/// Handle one paste event.
///
/// Settings are read from `store` for every call, so changes made between
/// pastes are picked up. Inserters are tried in order until one succeeds.
pub fn handle_paste(
	reader: &mut dyn ClipboardReader,
	store: &dyn SettingsStore,
	inserters: &mut [&mut dyn TextInserter],
	request: TransformRequest,
) -> PasteOutcome {
	let raw = match reader.read_text() {
		Ok(text) => text,
		Err(e) => {
			warn!("{e}; falling back to native paste");
			return PasteOutcome::NativePaste;
		}
	};
	debug!("clipboard text: {raw:?}");

	let config = store.get();
	let text = transform_request(&raw, &config, request);
	debug!("transformed text: {text:?}");

	for inserter in inserters.iter_mut() {
		match inserter.insert(&text) {
			Ok(()) => {
				info!("inserted {} chars via {}", text.chars().count(), inserter.strategy());
				return PasteOutcome::Inserted {
					strategy: inserter.strategy().to_string(),
					text,
				};
			}
			Err(e) => warn!("{e}"),
		}
	}

	warn!("all insertion strategies failed");
	PasteOutcome::InsertFailed { text }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{ReplaceRule, TransformConfig};
	use crate::error::{PasteError, Result};
	use std::cell::Cell;

	struct FixedStore {
		config: TransformConfig,
		reads: Cell<usize>,
	}

	impl FixedStore {
		fn new(config: TransformConfig) -> Self {
			Self {
				config,
				reads: Cell::new(0),
			}
		}
	}

	impl SettingsStore for FixedStore {
		fn get(&self) -> TransformConfig {
			self.reads.set(self.reads.get() + 1);
			self.config.clone()
		}

		fn set(&self, _config: &TransformConfig) -> Result<()> {
			Ok(())
		}
	}

	struct FailingInserter;

	impl TextInserter for FailingInserter {
		fn strategy(&self) -> &str {
			"failing"
		}

		fn insert(&mut self, _text: &str) -> Result<()> {
			Err(PasteError::InsertFailed {
				strategy: "failing".to_string(),
				reason: "unsupported element".to_string(),
			})
		}
	}

	fn store() -> FixedStore {
		FixedStore::new(TransformConfig {
			rules: vec![ReplaceRule::new("철수", "선생님"), ReplaceRule::new("\n", " ")],
			..Default::default()
		})
	}

	#[test]
	fn test_paste_into_field() {
		let store = store();
		let mut reader = Some("철수가\n왔다".to_string());
		let mut field = FieldInserter::new("> ");

		let outcome = handle_paste(
			&mut reader,
			&store,
			&mut [&mut field],
			TransformRequest::default(),
		);

		assert_eq!(
			outcome,
			PasteOutcome::Inserted {
				strategy: "field".to_string(),
				text: "선생님이 왔다".to_string(),
			}
		);
		assert_eq!(field.value, "> 선생님이 왔다");
		assert_eq!(store.reads.get(), 1);
	}

	#[test]
	fn test_bypass_inserts_raw_text() {
		let store = store();
		let mut reader = Some("철수가\n".to_string());
		let mut field = FieldInserter::default();

		handle_paste(
			&mut reader,
			&store,
			&mut [&mut field],
			TransformRequest {
				bypass_transform: true,
			},
		);

		assert_eq!(field.value, "철수가\n");
	}

	#[test]
	fn test_read_failure_falls_back_to_native_paste() {
		let store = store();
		let mut reader: Option<String> = None;
		let mut field = FieldInserter::default();

		let outcome = handle_paste(
			&mut reader,
			&store,
			&mut [&mut field],
			TransformRequest::default(),
		);

		assert_eq!(outcome, PasteOutcome::NativePaste);
		assert_eq!(store.reads.get(), 0);
		assert!(field.value.is_empty());
	}

	#[test]
	fn test_falls_through_to_next_strategy() {
		let store = store();
		let mut reader = Some("철수".to_string());
		let mut failing = FailingInserter;
		let mut writer = WriterInserter::new(Vec::new());

		let outcome = handle_paste(
			&mut reader,
			&store,
			&mut [&mut failing, &mut writer],
			TransformRequest::default(),
		);

		assert!(matches!(outcome, PasteOutcome::Inserted { ref strategy, .. } if strategy == "writer"));
		assert_eq!(writer.into_inner(), "선생님".as_bytes());
	}

	#[test]
	fn test_all_strategies_fail() {
		let store = store();
		let mut reader = Some("철수".to_string());
		let mut failing = FailingInserter;
		let mut read_only = FieldInserter {
			read_only: true,
			..Default::default()
		};

		let outcome = handle_paste(
			&mut reader,
			&store,
			&mut [&mut failing, &mut read_only],
			TransformRequest::default(),
		);

		assert_eq!(
			outcome,
			PasteOutcome::InsertFailed {
				text: "선생님".to_string()
			}
		);
	}
}
