//! Formula lexer
//!
//! Turns raw cell text into a token sequence. Text that does not start
//! with `=` is not a formula at all: the whole of it becomes a single
//! string token. Formula text is scanned with the grammar below; the
//! leading `=` is discarded, whitespace between tokens is skipped, and
//! the output always ends with exactly one [`TokenKind::Eof`].

use crate::error::{FormulaError, FormulaResult};
use std::fmt;

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Number,
    Identifier,
    LeftParen,
    RightParen,
    Colon,
    Comma,
    Plus,
    Minus,
    Multiply,
    Divide,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A single lexed token: a kind plus, for string/number/identifier
/// tokens, the literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<String>,
}

impl Token {
    fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            literal: None,
        }
    }

    fn with_literal(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: Some(literal.into()),
        }
    }
}

/// Lex cell text into tokens.
///
/// Total for any input: either the full token sequence is produced or a
/// lex error is returned; the input is never partially consumed.
pub fn lex(source: &str) -> FormulaResult<Vec<Token>> {
    match source.strip_prefix('=') {
        Some(formula) => Lexer::new(formula).lex(),
        None => Ok(vec![
            Token::with_literal(TokenKind::String, source),
            Token::new(TokenKind::Eof),
        ]),
    }
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn lex(mut self) -> FormulaResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof));
                return Ok(tokens);
            }
            tokens.push(self.scan_token()?);
        }
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof)),
        };

        let symbol = match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            _ => None,
        };
        if let Some(kind) = symbol {
            self.advance();
            return Ok(Token::new(kind));
        }

        match c {
            '"' => self.scan_string(),
            '0'..='9' => self.scan_number(),
            'A'..='Z' => Ok(self.scan_identifier()),
            other => Err(FormulaError::UnexpectedChar(other)),
        }
    }

    fn scan_string(&mut self) -> FormulaResult<Token> {
        self.advance(); // opening quote
        let start = self.pos;

        while let Some(c) = self.peek_char() {
            if c == '"' {
                let literal = &self.input[start..self.pos];
                self.advance(); // closing quote
                return Ok(Token::with_literal(TokenKind::String, literal));
            }
            self.advance();
        }

        Err(FormulaError::UnterminatedString)
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek_char() == Some('.') {
            // The dot must be followed by at least one digit.
            if !self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()) {
                let literal = &self.input[start..self.pos + 1];
                return Err(FormulaError::MalformedNumber(literal.to_string()));
            }
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        Ok(Token::with_literal(
            TokenKind::Number,
            &self.input[start..self.pos],
        ))
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            self.advance();
        }
        Token::with_literal(TokenKind::Identifier, &self.input[start..self.pos])
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
