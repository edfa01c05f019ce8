//! Integration tests for the front end.
//!
//! These tests drive complete programs through the public API, from source
//! text through tokenization to the rendered syntax tree and error list.

use mini_parser::{
    ast::ast::Statement,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
    parser::parser::parse,
};
use pretty_assertions::assert_eq;

const FACTORIAL: &str = "\
// computes n!
n := 5;
result := 1;
while (n > 0) do
    result := result * n;
    n := n - 1;
end
if (result = 120 && !(n != 0)) then
    ok := true;
end else
    ok := false;
end
";

#[test]
fn test_parse_complete_program() {
    let (program, errors) = parse_source(FACTORIAL);

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 4);
    assert_eq!(
        program.to_string(),
        "n := 5;result := 1;\
         while (n > 0) do result := (result * n);n := (n - 1);\
         if ((result = 120) && (!(n != 0))) then ok := true; else ok := false;"
    );
}

#[test]
fn test_statement_positions() {
    let (program, _) = parse_source(FACTORIAL);

    let positions = program
        .statements
        .iter()
        .map(|stmt| (stmt.token_literal().to_string(), stmt.get_position().line))
        .collect::<Vec<_>>();

    assert_eq!(
        positions,
        vec![
            ("n".to_string(), 2),
            ("result".to_string(), 3),
            ("while".to_string(), 4),
            ("if".to_string(), 8),
        ]
    );
}

#[test]
fn test_rendering_round_trips_grouping() {
    let sources = [
        "x := 1 + 2 * 3 - 4 / 2;",
        "x := (a || b) && !c;",
        "x := -(1 + 2) * -3;",
        "x := a < b = b > c;",
    ];

    for source in sources {
        let (first, errors) = parse_source(source);
        assert!(errors.is_empty(), "{source}: {:?}", errors);

        // The rendering is itself a valid program with identical grouping
        let rendered = first.to_string();
        let (second, errors) = parse_source(&rendered);
        assert!(errors.is_empty(), "{rendered}: {:?}", errors);
        assert_eq!(second.to_string(), rendered);
    }
}

#[test]
fn test_errors_across_lines_are_all_reported() {
    let source = "\
x := 1;
y := 2 +;
if (x) z := 3; end
w := @;
while (x < 10) do x := x + 1;
";

    let (parser, program) = parse(source);
    let errors = parser.errors();

    assert_eq!(
        errors,
        vec![
            "line 2 column 9: cannot parse ;",
            "line 3 column 8: if statement is missing `then`: expected then, got IDENT",
            "line 3 column 16: unexpected start of statement: end",
            "line 4 column 6: cannot parse @",
            "line 4 column 7: unexpected start of statement: ;",
            "line 6 column 1: while block is missing `end`: expected end, got EOF",
        ]
    );

    let kinds = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Assign(s) => s.name.value.clone(),
            Statement::While(_) => "while".to_string(),
            Statement::If(_) => "if".to_string(),
            Statement::Block(_) => "block".to_string(),
        })
        .collect::<Vec<_>>();
    assert_eq!(kinds, vec!["x", "z", "while"]);
}

#[test]
fn test_fresh_runs_are_identical() {
    let source = "a := 1 +;\nif (a then b := 2; end\nc := 0x;";

    let (first_program, first_errors) = parse_source(source);
    let (second_program, second_errors) = parse_source(source);

    assert_eq!(first_program, second_program);
    assert_eq!(first_errors, second_errors);
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize("program p; begin x := 1 end.");

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Program,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Begin,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::End,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}
