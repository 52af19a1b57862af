//! Literal find/replace rules.
//!
//! This module handles:
//! - Compiling user-supplied search strings into literal matchers
//! - Applying enabled rules in order over pasted text

pub mod engine;
pub mod literal;

pub use engine::{CompiledRule, RuleOutcome, apply_compiled, apply_rules, compile_rules};
pub use literal::{LiteralPattern, escape_literal};
