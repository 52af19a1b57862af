//! paste-rewrite - rewrite pasted text with literal replace rules and Korean
//! particle correction.
//!
//! This library provides the core functionality for paste-rewrite, including:
//! - Settings loading, validation and storage
//! - Literal find/replace rules applied in order
//! - Josa (particle) agreement after replaced words
//! - The transformation pipeline and the paste flow around it
//!
//! # Example
//!
//! ```
//! use paste_rewrite::config::{ReplaceRule, TransformConfig};
//! use paste_rewrite::pipeline::transform;
//!
//! let config = TransformConfig {
//!     rules: vec![ReplaceRule::new("철수", "선생님")],
//!     ..Default::default()
//! };
//!
//! assert_eq!(transform("철수가\n왔다", &config), "선생님이왔다");
//! ```

pub mod config;
pub mod error;
pub mod josa;
pub mod paste;
pub mod pipeline;
pub mod rules;

pub use error::{PasteError, Result};
