use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{AssignStatement, BlockStatement, IfStatement, WhileStatement},
};

/// Root of the syntax tree: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Literal of the first statement's token, or an empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement
///
/// Every statement form of the language. `if` and `while` only exist in
/// statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(AssignStatement),
    If(IfStatement),
    While(WhileStatement),
    Block(BlockStatement),
}

impl Statement {
    /// Source text of the token that starts the statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Assign(stmt) => &stmt.token.literal,
            Statement::If(stmt) => &stmt.token.literal,
            Statement::While(stmt) => &stmt.token.literal,
            Statement::Block(stmt) => &stmt.token.literal,
        }
    }

    pub fn get_position(&self) -> Position {
        match self {
            Statement::Assign(stmt) => stmt.token.position(),
            Statement::If(stmt) => stmt.token.position(),
            Statement::While(stmt) => stmt.token.position(),
            Statement::Block(stmt) => stmt.token.position(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Assign(stmt) => write!(f, "{}", stmt),
            Statement::If(stmt) => write!(f, "{}", stmt),
            Statement::While(stmt) => write!(f, "{}", stmt),
            Statement::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// Parenthesised groups have no node of their own; they only steer the shape
/// of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => &expr.token.literal,
            Expression::Integer(expr) => &expr.token.literal,
            Expression::Boolean(expr) => &expr.token.literal,
            Expression::Prefix(expr) => &expr.token.literal,
            Expression::Infix(expr) => &expr.token.literal,
        }
    }

    pub fn get_position(&self) -> Position {
        match self {
            Expression::Identifier(expr) => expr.token.position(),
            Expression::Integer(expr) => expr.token.position(),
            Expression::Boolean(expr) => expr.token.position(),
            Expression::Prefix(expr) => expr.token.position(),
            Expression::Infix(expr) => expr.left.get_position(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
        }
    }
}
