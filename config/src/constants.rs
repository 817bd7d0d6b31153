//! # Configuration Constants
//!
//! Fixed characters and separators shared by the lexer and the generator.
//!
//! ## Categories
//!
//! - **Source syntax**: Characters the lexer treats specially
//! - **Output syntax**: Separators and terminators the generator emits

// =============================================================================
// SOURCE SYNTAX
// =============================================================================

/// Opens a call expression in the source language.
///
/// # Example
///
/// ```rust
/// use config::constants::OPEN_PAREN;
///
/// assert!("(add 1 2)".starts_with(OPEN_PAREN));
/// ```
pub const OPEN_PAREN: char = '(';

/// Closes a call expression in the source language.
pub const CLOSE_PAREN: char = ')';

/// Delimits string literals, both in the source and in rendered output.
///
/// Strings carry no escape sequences, so the delimiter can never appear
/// inside a string value.
///
/// # Example
///
/// ```rust
/// use config::constants::STRING_DELIMITER;
///
/// let quoted = format!("{STRING_DELIMITER}hello{STRING_DELIMITER}");
/// assert_eq!(quoted, "\"hello\"");
/// ```
pub const STRING_DELIMITER: char = '"';

// =============================================================================
// OUTPUT SYNTAX
// =============================================================================

/// Joins rendered top-level statements.
///
/// # Example
///
/// ```rust
/// use config::constants::STATEMENT_SEPARATOR;
///
/// let program = ["add(1, 2);", "add(3, 4);"].join(STATEMENT_SEPARATOR);
/// assert_eq!(program, "add(1, 2);\nadd(3, 4);");
/// ```
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Joins rendered call arguments.
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Appended to every expression statement.
pub const STATEMENT_TERMINATOR: char = ';';
