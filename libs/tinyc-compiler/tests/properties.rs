//! Property tests over generated well-formed programs.

use proptest::prelude::*;
use tinyc_compiler::{compile, parse, tokenize, transform, CompileError};
use tinyc_parser::{ParseErrorKind, SourceNode, TokenKind};
use tinyc_transform::TargetNode;

/// Independent model of a source expression.
#[derive(Debug, Clone)]
enum Expr {
    Number(String),
    Text(String),
    Call(String, Vec<Expr>),
}

impl Expr {
    fn source(&self) -> String {
        match self {
            Expr::Number(value) => value.clone(),
            Expr::Text(value) => format!("\"{value}\""),
            Expr::Call(name, args) => {
                let mut parts = vec![name.clone()];
                parts.extend(args.iter().map(Expr::source));
                format!("({})", parts.join(" "))
            }
        }
    }

    fn output(&self) -> String {
        match self {
            Expr::Number(value) => value.clone(),
            Expr::Text(value) => format!("\"{value}\""),
            Expr::Call(name, args) => {
                let args: Vec<_> = args.iter().map(Expr::output).collect();
                format!("{name}({})", args.join(", "))
            }
        }
    }

    fn calls(&self) -> usize {
        match self {
            Expr::Call(_, args) => 1 + args.iter().map(Expr::calls).sum::<usize>(),
            _ => 0,
        }
    }
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        "[0-9]{1,6}".prop_map(Expr::Number),
        "[a-zA-Z0-9 ()_.,!?]{0,10}".prop_map(Expr::Text),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[A-Za-z]{1,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, args)| Expr::Call(name, args))
    })
}

fn program() -> impl Strategy<Value = Vec<Expr>> {
    prop::collection::vec(expr(), 0..4)
}

fn program_source(exprs: &[Expr]) -> String {
    exprs.iter().map(Expr::source).collect::<Vec<_>>().join(" \n")
}

fn program_output(exprs: &[Expr]) -> String {
    exprs
        .iter()
        .map(|expr| match expr {
            Expr::Call(..) => format!("{};", expr.output()),
            _ => expr.output(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_source_calls(node: &SourceNode) -> usize {
    match node {
        SourceNode::CallExpression(call) => 1 + call.params.iter().map(count_source_calls).sum::<usize>(),
        _ => 0,
    }
}

fn count_target_calls(node: &TargetNode) -> usize {
    match node {
        TargetNode::ExpressionStatement(statement) => {
            1 + statement.expression.arguments.iter().map(count_target_calls).sum::<usize>()
        }
        TargetNode::CallExpression(call) => 1 + call.arguments.iter().map(count_target_calls).sum::<usize>(),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn test_well_formed_programs_compile(exprs in program()) {
        let output = compile(&program_source(&exprs));
        prop_assert_eq!(output.ok(), Some(program_output(&exprs)));
    }

    #[test]
    fn test_paren_tokens_balance(exprs in program()) {
        let tokens = tokenize(&program_source(&exprs)).unwrap();
        let opens = tokens.iter().filter(|t| t.kind() == TokenKind::OpenParen).count();
        let closes = tokens.iter().filter(|t| t.kind() == TokenKind::CloseParen).count();
        let calls: usize = exprs.iter().map(Expr::calls).sum();

        prop_assert_eq!(opens, closes);
        prop_assert_eq!(opens, calls);
    }

    #[test]
    fn test_transform_preserves_calls(exprs in program()) {
        let source = parse(tokenize(&program_source(&exprs)).unwrap()).unwrap();
        let target = transform(&source);

        let source_calls: usize = source.body.iter().map(count_source_calls).sum();
        let target_calls: usize = target.body.iter().map(count_target_calls).sum();
        prop_assert_eq!(source_calls, target_calls);

        let top_level_calls = source
            .body
            .iter()
            .filter(|node| matches!(node, SourceNode::CallExpression(_)))
            .count();
        let statements = target
            .body
            .iter()
            .filter(|node| matches!(node, TargetNode::ExpressionStatement(_)))
            .count();
        prop_assert_eq!(top_level_calls, statements);
    }

    #[test]
    fn test_literals_survive_verbatim(number in "[0-9]{1,12}", text in "[^\"]{0,16}") {
        let output = compile(&format!("(f {number} \"{text}\")")).unwrap();
        prop_assert_eq!(output, format!("f({number}, \"{text}\");"));
    }

    #[test]
    fn test_compile_never_panics(s in "\\PC*") {
        let _ = compile(&s);
    }

    #[test]
    fn test_stray_symbol_is_unrecognized(symbol in "[#$%&*+,\\-./:;<=>?@^|~]") {
        let result = compile(&format!("(f 1 {symbol})"));
        let is_unrecognized = matches!(
            result,
            Err(CompileError::Parse(ref err))
                if matches!(err.kind, ParseErrorKind::UnrecognizedCharacter { .. })
        );
        prop_assert!(is_unrecognized);
    }
}
