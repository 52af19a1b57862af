use std::path::PathBuf;

/// Library-level structured errors for paste-rewrite.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
	#[error("Failed to read settings file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to write settings file: {path}")]
	ConfigWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to serialize settings")]
	ConfigSerialize {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Replace rule {index} has an empty `from` value")]
	EmptyPattern { index: usize },

	#[error("Cannot build a literal matcher for: {literal}")]
	InvalidPattern {
		literal: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read clipboard text")]
	ClipboardRead {
		#[source]
		source: std::io::Error,
	},

	#[error("Text insertion failed via {strategy}: {reason}")]
	InsertFailed { strategy: String, reason: String },

	#[error("No replace rule at position {index} (rule count: {len})")]
	RuleIndexOutOfRange { index: usize, len: usize },

	#[error("Failed to resolve configuration directory")]
	ConfigDirectoryNotFound,
}

/// Result type alias using PasteError.
pub type Result<T> = std::result::Result<T, PasteError>;
