use tinyc_parser::{parse_source, tokenize, NodeKind, ParseErrorKind, SourceNode, Token};

#[test]
fn test_tokenizes_nested_call() {
    let tokens = tokenize("(add 2 (subtract 4 2))").unwrap();
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[1], Token::Name("add".to_string()));
    assert_eq!(tokens[2], Token::Number("2".to_string()));
}

#[test]
fn test_parses_sibling_statements() {
    let program = parse_source("(add 1 2)\n(add 3 4)").unwrap();
    assert_eq!(program.body.len(), 2);
    assert!(program.body.iter().all(|node| node.kind() == NodeKind::CallExpression));
}

#[test]
fn test_parses_string_with_spaces() {
    let program = parse_source("\"a b c\"").unwrap();
    match &program.body[0] {
        SourceNode::StringLiteral(string) => assert_eq!(string.value, "a b c"),
        other => panic!("expected string literal, got {other:?}"),
    }
}

#[test]
fn test_rejects_unterminated_string() {
    let err = parse_source("(say \"hi").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
}

#[test]
fn test_rejects_unclosed_call() {
    let err = parse_source("(add 2 3").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
}
