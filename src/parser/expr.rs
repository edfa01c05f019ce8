use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
};

/// Pratt loop. Starts on the first token of the expression and leaves the
/// parser on its last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    if !parser.enter_nested() {
        return None;
    }

    let expr = parse_expr_at(parser, bp);
    parser.leave_nested();

    expr
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let Some(nud) = nud_handler(parser.current_token_kind()) else {
        let token = parser.current_token();
        let token = if token.literal.is_empty() {
            token.kind.to_string()
        } else {
            token.literal.clone()
        };
        parser.report(ErrorImpl::NoPrefixRule { token });
        return None;
    };

    let mut left = nud(parser)?;

    // Each extension deepens the tree by one level on the left
    let mut extensions = 0;

    // While the lookahead binds tighter than bp, extend lhs with its LED
    let expr = loop {
        if parser.peek_token_kind() == TokenKind::Semicolon
            || binding_power(parser.peek_token_kind()) <= bp
        {
            break Some(left);
        }
        let Some(led) = led_handler(parser.peek_token_kind()) else {
            break Some(left);
        };

        parser.advance();
        if !parser.enter_nested() {
            break None;
        }
        extensions += 1;

        let operator_bp = binding_power(parser.current_token_kind());
        match led(parser, left, operator_bp) {
            Some(extended) => left = extended,
            None => break None,
        }
    };

    for _ in 0..extensions {
        parser.leave_nested();
    }

    expr
}

pub fn parse_primary_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => match parse_integer(&token.literal) {
            Some(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            None => {
                parser.report(ErrorImpl::IntegerParseError {
                    token: token.literal,
                });
                None
            }
        },
        TokenKind::Identifier => Some(Expression::Identifier(Identifier {
            value: token.literal.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Some(Expression::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => {
            parser.report(ErrorImpl::NoPrefixRule {
                token: token.literal,
            });
            None
        }
    }
}

/// Parses an integer literal, inferring the base from its prefix: `0x`, `0o`
/// and `0b` select hex, octal and binary, and a bare leading `0` selects octal.
pub fn parse_integer(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x" | "0X") => (&literal[2..], 16),
        Some("0o" | "0O") => (&literal[2..], 8),
        Some("0b" | "0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    // from_str_radix tolerates a leading sign, the literal syntax does not
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same power on the right keeps equal operators left-associative
    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}
