use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{AssignStatement, BlockStatement, IfStatement, WhileStatement},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

/// Parses the statement starting at the current token.
///
/// On success the parser is left on the statement's last token. On failure
/// `None` is returned and the caller resumes at the next token.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    let token = parser.current_token().literal.clone();
    parser.report(ErrorImpl::UnexpectedStatementStart { token });

    None
}

/// `name := expression [;]`
pub fn parse_assign_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let name = Identifier {
        token: token.clone(),
        value: token.literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Statement::Assign(AssignStatement { token, name, value }))
}

/// `if ( condition ) then block end [else block end]`
pub fn parse_if_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !expect_delimiter(parser, TokenKind::If, TokenKind::OpenParen) {
        return None;
    }

    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    if !expect_delimiter(parser, TokenKind::If, TokenKind::CloseParen)
        || !expect_delimiter(parser, TokenKind::If, TokenKind::Then)
    {
        return None;
    }

    let consequence = parse_block(parser, TokenKind::If);

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser, TokenKind::If))
    } else {
        None
    };

    Some(Statement::If(IfStatement {
        token,
        condition,
        consequence,
        alternative,
    }))
}

/// `while ( condition ) do block end`
pub fn parse_while_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !expect_delimiter(parser, TokenKind::While, TokenKind::OpenParen) {
        return None;
    }

    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    if !expect_delimiter(parser, TokenKind::While, TokenKind::CloseParen)
        || !expect_delimiter(parser, TokenKind::While, TokenKind::Do)
    {
        return None;
    }

    let body = parse_block(parser, TokenKind::While);

    Some(Statement::While(WhileStatement {
        token,
        condition,
        body,
    }))
}

/// `begin block end`
pub fn parse_begin_stmt(parser: &mut Parser) -> Option<Statement> {
    Some(Statement::Block(parse_block(parser, TokenKind::Begin)))
}

/// Parses the statements after the current opening keyword up to `end`.
///
/// Leaves the parser on the closing `end`, or on EOF after recording an
/// unterminated block error.
pub fn parse_block(parser: &mut Parser, construct: TokenKind) -> BlockStatement {
    let token = parser.current_token().clone();

    if !parser.enter_nested() {
        return BlockStatement {
            token,
            statements: Vec::new(),
        };
    }

    let block = parse_block_body(parser, token, construct);
    parser.leave_nested();

    block
}

fn parse_block_body(parser: &mut Parser, token: Token, construct: TokenKind) -> BlockStatement {
    parser.advance();

    let mut statements = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::End, TokenKind::EOF])
    {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        parser.report(ErrorImpl::UnterminatedBlock { construct });
    }

    BlockStatement { token, statements }
}

fn expect_delimiter(parser: &mut Parser, construct: TokenKind, expected: TokenKind) -> bool {
    let error = ErrorImpl::MissingDelimiter {
        construct,
        expected,
        found: parser.peek_token_kind(),
    };

    parser.expect_peek_error(expected, Some(error))
}
