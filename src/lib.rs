#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{ast::ast::Program, errors::errors::Error, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Runs a fresh lexer and parser over `source`.
///
/// Returns the (possibly partial) program together with every diagnostic
/// recorded along the way, in detection order.
pub fn parse_source(source: &str) -> (Program, Vec<Error>) {
    let (parser, program) = parse(source);

    (program, parser.into_diagnostics())
}

/// Returns the text of the 1-based `line` of `source`, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "x := 1;\r\ny := 2;\n\nz := 3;";

        assert_eq!(super::get_line_at_position(source, 1), Some("x := 1;"));
        assert_eq!(super::get_line_at_position(source, 2), Some("y := 2;"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("z := 3;"));
        assert_eq!(super::get_line_at_position(source, 5), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_parse_source_is_repeatable() {
        let source = "x := 1 + ;\nwhile (x < 3) do x := x + 1; end";

        let (first_program, first_errors) = super::parse_source(source);
        let (second_program, second_errors) = super::parse_source(source);

        assert_eq!(first_program.to_string(), second_program.to_string());
        assert_eq!(
            first_errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            second_errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
        );
    }
}
