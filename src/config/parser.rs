use crate::config::types::TransformConfig;
use crate::error::{PasteError, Result};
use std::path::Path;

/// Parse a settings file from the given path.
pub fn parse_config_file(path: &Path) -> Result<TransformConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| PasteError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse settings from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<TransformConfig> {
	let config = parse_config_str_lenient(content, path)?;

	config.validate()?;

	Ok(config)
}

/// Parse settings without rule validation.
///
/// Rules with an empty `from` are kept; the rule engine skips them.
pub fn parse_config_str_lenient(content: &str, path: &Path) -> Result<TransformConfig> {
	toml::from_str(content).map_err(|source| PasteError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Render settings as TOML for writing back to disk.
pub fn render_config(config: &TransformConfig) -> Result<String> {
	toml::to_string_pretty(config).map_err(|source| PasteError::ConfigSerialize { source })
}
