//! End-to-end compilation tests.

use tinyc_compiler::{compile, CompileError};
use tinyc_parser::{Location, ParseErrorKind, Position, TokenKind};

fn parse_error(source: &str) -> tinyc_parser::ParseError {
    match compile(source) {
        Err(CompileError::Parse(err)) => err,
        other => panic!("Expected parse error for {source:?}, got {other:?}"),
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_two_arguments() {
    assert_eq!(compile("(add 2 3)").unwrap(), "add(2, 3);");
}

#[test]
fn test_nested_call() {
    assert_eq!(compile("(add 2 (subtract 4 2))").unwrap(), "add(2, subtract(4, 2));");
}

#[test]
fn test_string_argument() {
    assert_eq!(compile("(add 2 \"hello\")").unwrap(), "add(2, \"hello\");");
}

#[test]
fn test_zero_arguments() {
    assert_eq!(compile("(foo)").unwrap(), "foo();");
}

#[test]
fn test_two_statements() {
    assert_eq!(compile("(add 1 2) (add 3 4)").unwrap(), "add(1, 2);\nadd(3, 4);");
}

#[test]
fn test_missing_close_paren() {
    let err = parse_error("(add 2 3");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof { expected: "')'" });
    assert_eq!(err.location, Location::Token(4));
}

// =============================================================================
// MORE INPUTS
// =============================================================================

#[test]
fn test_multi_digit_number() {
    assert_eq!(compile("(f 22 1000)").unwrap(), "f(22, 1000);");
}

#[test]
fn test_mixed_case_names() {
    assert_eq!(compile("(printLine \"Hi\")").unwrap(), "printLine(\"Hi\");");
}

#[test]
fn test_deep_nesting() {
    assert_eq!(compile("(a (b (c (d 1))))").unwrap(), "a(b(c(d(1))));");
}

#[test]
fn test_top_level_literal() {
    assert_eq!(compile("7 (f)").unwrap(), "7\nf();");
}

#[test]
fn test_leading_byte_order_mark() {
    assert_eq!(compile("\u{FEFF}(f 1)").unwrap(), "f(1);");
}

#[test]
fn test_string_keeps_inner_spaces_and_parens() {
    assert_eq!(compile("(log \"a (b) c\")").unwrap(), "log(\"a (b) c\");");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_unrecognized_character() {
    let err = parse_error("(add 1 -2)");
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedCharacter { character: '-' });
    assert_eq!(err.location, Location::Source(Position::new(7, 0, 7)));
}

#[test]
fn test_unterminated_string() {
    let err = parse_error("(say \"hello)");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.location, Location::Source(Position::new(5, 0, 5)));
}

#[test]
fn test_stray_close_paren() {
    let err = parse_error(")");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken { found: TokenKind::CloseParen, expected: "expression" }
    );
}

#[test]
fn test_open_paren_without_name() {
    let err = parse_error("(\"f\" 1)");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { found: TokenKind::String, .. }));
}

#[test]
fn test_error_message_names_offender() {
    let message = compile("(add @)").unwrap_err().to_string();
    assert!(message.contains('@'));
    assert!(message.contains("line 1, column 6"));
}

#[test]
fn test_next_line_character_is_unrecognized() {
    let err = parse_error("(f\u{85}1)");
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedCharacter { character: '\u{85}' });
}
