use crate::config::parser::{parse_config_file, parse_config_str_lenient, render_config};
use crate::config::types::TransformConfig;
use crate::error::{PasteError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV_VAR: &str = "PASTE_REWRITE_CONFIG";

/// Environment variable that, if truthy, bypasses transformation (plain paste).
pub const PLAIN_PASTE_ENV_VAR: &str = "PASTE_REWRITE_PLAIN";

/// Persistent settings storage.
///
/// `get` never fails: a missing or unreadable store resolves to
/// [`TransformConfig::default`] so the paste flow always has a snapshot to run with.
pub trait SettingsStore {
	fn get(&self) -> TransformConfig;

	fn set(&self, config: &TransformConfig) -> Result<()>;
}

/// A settings store backed by a single TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Open the store at the resolved location (see [`resolve_config_path`]).
	pub fn open(explicit: Option<&Path>) -> Result<Self> {
		Ok(Self::new(resolve_config_path(explicit)?))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Load the settings file strictly.
	///
	/// Returns `Ok(None)` if the file does not exist.
	pub fn load(&self) -> Result<Option<TransformConfig>> {
		if !self.path.exists() {
			return Ok(None);
		}
		parse_config_file(&self.path).map(Some)
	}

	/// Load the settings file, keeping rules that fail validation.
	///
	/// Returns `Ok(None)` if the file does not exist.
	fn load_lenient(&self) -> Result<Option<TransformConfig>> {
		if !self.path.exists() {
			return Ok(None);
		}
		let content =
			std::fs::read_to_string(&self.path).map_err(|source| PasteError::ConfigRead {
				path: self.path.clone(),
				source,
			})?;
		let config = parse_config_str_lenient(&content, &self.path)?;
		if let Err(e) = config.validate() {
			warn!("{}: {e}; the rule will be skipped", self.path.display());
		}
		Ok(Some(config))
	}
}

impl SettingsStore for FileStore {
	fn get(&self) -> TransformConfig {
		match self.load_lenient() {
			Ok(Some(config)) => config,
			Ok(None) => {
				debug!(
					"no settings at {}, using defaults",
					self.path.display()
				);
				TransformConfig::default()
			}
			Err(e) => {
				warn!("{e}; falling back to default settings");
				TransformConfig::default()
			}
		}
	}

	fn set(&self, config: &TransformConfig) -> Result<()> {
		let rendered = render_config(config)?;
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent).map_err(|source| PasteError::ConfigWrite {
				path: self.path.clone(),
				source,
			})?;
		}
		std::fs::write(&self.path, rendered).map_err(|source| PasteError::ConfigWrite {
			path: self.path.clone(),
			source,
		})?;
		debug!("saved settings to {}", self.path.display());
		Ok(())
	}
}

/// Resolve the settings file location.
///
/// Order: the explicit path, then `$PASTE_REWRITE_CONFIG`, then
/// `<config dir>/paste-rewrite/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
	if let Some(path) = explicit {
		return Ok(path.to_path_buf());
	}
	if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR)
		&& !path.is_empty()
	{
		return Ok(PathBuf::from(path));
	}
	default_config_path()
}

/// Get the path to the per-user settings file.
pub fn default_config_path() -> Result<PathBuf> {
	let config_dir = dirs::config_dir().ok_or(PasteError::ConfigDirectoryNotFound)?;
	Ok(config_dir.join("paste-rewrite").join("config.toml"))
}

/// Whether plain paste is forced through the environment.
pub fn plain_paste_forced() -> bool {
	is_env_truthy(PLAIN_PASTE_ENV_VAR)
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::ReplaceRule;

	#[test]
	fn test_is_env_truthy() {
		// SAFETY: These env var operations are safe in single-threaded test context
		unsafe {
			std::env::remove_var("TEST_PASTE_ENV_1");
			assert!(!is_env_truthy("TEST_PASTE_ENV_1"));

			std::env::set_var("TEST_PASTE_ENV_2", "");
			assert!(!is_env_truthy("TEST_PASTE_ENV_2"));

			std::env::set_var("TEST_PASTE_ENV_3", "0");
			assert!(!is_env_truthy("TEST_PASTE_ENV_3"));

			std::env::set_var("TEST_PASTE_ENV_4", "FALSE");
			assert!(!is_env_truthy("TEST_PASTE_ENV_4"));

			std::env::set_var("TEST_PASTE_ENV_5", "no");
			assert!(!is_env_truthy("TEST_PASTE_ENV_5"));

			std::env::set_var("TEST_PASTE_ENV_6", "1");
			assert!(is_env_truthy("TEST_PASTE_ENV_6"));

			std::env::set_var("TEST_PASTE_ENV_7", "yes");
			assert!(is_env_truthy("TEST_PASTE_ENV_7"));

			for i in 1..=7 {
				std::env::remove_var(format!("TEST_PASTE_ENV_{}", i));
			}
		}
	}

	#[test]
	fn test_explicit_path_wins() {
		let path = resolve_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
		assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
	}

	#[test]
	fn test_get_missing_file_returns_default() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(temp_dir.path().join("absent.toml"));

		assert!(store.load().unwrap().is_none());
		assert_eq!(store.get(), TransformConfig::default());
	}

	#[test]
	fn test_get_broken_file_returns_default() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("config.toml");
		std::fs::write(&path, "replaceRules = 7").unwrap();
		let store = FileStore::new(&path);

		assert!(store.load().is_err());
		assert_eq!(store.get(), TransformConfig::default());
	}

	#[test]
	fn test_get_keeps_settings_around_empty_from_rule() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("config.toml");
		std::fs::write(
			&path,
			r#"
prefixEnabled = true
prefixText = "> "

[[replaceRules]]
from = "바보"
to = "천재"

[[replaceRules]]
from = ""
to = "x"
"#,
		)
		.unwrap();
		let store = FileStore::new(&path);

		assert!(matches!(store.load(), Err(PasteError::EmptyPattern { index: 2 })));

		let config = store.get();
		assert_ne!(config, TransformConfig::default());
		assert_eq!(config.rules.len(), 2);
		assert_eq!(crate::pipeline::transform("바보가", &config), "> 천재가");
	}

	#[test]
	fn test_set_creates_directories_and_round_trips() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(temp_dir.path().join("nested/dir/config.toml"));
		let config = TransformConfig {
			prefix_enabled: true,
			prefix_text: "> ".to_string(),
			rules: vec![ReplaceRule::new("바보", "천재")],
			..Default::default()
		};

		store.set(&config).unwrap();

		assert!(store.path().exists());
		assert_eq!(store.get(), config);
	}
}
