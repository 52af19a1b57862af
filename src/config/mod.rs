//! Settings for paste-rewrite.
//!
//! This module handles:
//! - The `TransformConfig` data model and its defaults
//! - TOML parsing and validation
//! - The file-backed settings store

pub mod parser;
pub mod store;
pub mod types;

pub use parser::{parse_config_file, parse_config_str, parse_config_str_lenient, render_config};
pub use store::{
	FileStore, SettingsStore, default_config_path, plain_paste_forced, resolve_config_path,
};
pub use types::{ReplaceRule, TransformConfig};
