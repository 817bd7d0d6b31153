//! # Config Crate
//!
//! Centralized constants for the tinyc pipeline.
//! Every character class the lexer recognizes and every separator the
//! generator emits is defined here, so the stages cannot drift apart.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR};
//!
//! let rendered = format!("add({}){}", ["1", "2"].join(ARGUMENT_SEPARATOR), STATEMENT_TERMINATOR);
//! assert_eq!(rendered, "add(1, 2);");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Each constant is defined once, used everywhere
//! - **No Runtime Configuration**: Compilation has no options; these are fixed

pub mod constants;
