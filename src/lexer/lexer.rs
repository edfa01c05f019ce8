use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Handles a pattern match of the given byte length at the lexer's position.
///
/// Returns `None` when the matched text produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, so two-character operators must precede their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\p{L}[\\p{L}0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
    ];
}

/// Lazily scans source text into positioned tokens.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the input
/// is exhausted every further call returns an EOF token.
pub struct Lexer {
    source: String,
    /// Byte offset of the next unread character
    pos: usize,
    /// Line of the next unread character, 1-based
    line: u32,
    /// Column of the next unread character, 1-based
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes the next `n` bytes, keeping line and column in step.
    ///
    /// `n` must end on a character boundary.
    pub fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;

        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn slice(&self, n: usize) -> String {
        String::from(&self.source[self.pos..self.pos + n])
    }

    /// Returns the next token, skipping whitespace and line comments.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.position());
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| (m.end(), pattern.handler))
            });

            let token = match matched {
                Some((len, handler)) => handler(self, len),
                None => illegal_handler(self),
            };

            if let Some(token) = token {
                log::trace!("Scanned {}", token);
                return token;
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.advance_n(len);
    None
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let start = lexer.position();
    let value = lexer.slice(len);
    lexer.advance_n(len);

    Some(MK_TOKEN!(lookup_identifier(&value), value, start))
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let start = lexer.position();
    let value = lexer.slice(len);
    lexer.advance_n(len);

    Some(MK_TOKEN!(TokenKind::Number, value, start))
}

/// Consumes exactly one character as an illegal token, so a lone `&`, `|` or `:`
/// can never stall the scan.
fn illegal_handler(lexer: &mut Lexer) -> Option<Token> {
    let c = lexer.at()?;
    let start = lexer.position();
    lexer.advance_n(c.len_utf8());

    Some(MK_TOKEN!(TokenKind::Illegal, c.to_string(), start))
}

/// Scans `source` to completion, returning every token including the final EOF.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
