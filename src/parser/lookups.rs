use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
///
/// `&&` and `||` bind looser than equality, so `a = b && c = d` groups as
/// `((a = b) && (c = d))`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Logical,
    Equals,
    Comparison,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Option<Expression>;

/// Binding power of `kind` when it appears between two operands.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::And | TokenKind::Or => BindingPower::Logical,
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::Comparison,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Asterisk | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// Null denotation: the rule for a token that starts an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Identifier | TokenKind::Number | TokenKind::True | TokenKind::False => {
            Some(parse_primary_expr)
        }
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::Bang | TokenKind::Minus => Some(parse_prefix_expr),
        _ => None,
    }
}

/// Left denotation: the rule for a token that follows a complete operand.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::And
        | TokenKind::Or => Some(parse_binary_expr),
        _ => None,
    }
}

/// The rule for a token that starts a statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_assign_stmt),
        TokenKind::If => Some(parse_if_stmt),
        TokenKind::While => Some(parse_while_stmt),
        TokenKind::Begin => Some(parse_begin_stmt),
        _ => None,
    }
}
