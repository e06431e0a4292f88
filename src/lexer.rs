//! Tokenizer
//!
//! Turns source text into a lazy stream of [`Token`]s. A newline is appended
//! to the input before scanning, so every program ends with a `Newline`
//! token followed by a single `Eof`.
//!
//! Spaces, tabs and carriage returns are skipped; newlines are significant
//! and end a statement. A `#` starts a comment running to the end of the
//! line. Offsets in spans count characters, not bytes.

use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Characters that may not appear inside a string literal. They would
/// otherwise leak into the target's `printf` format string.
const ILLEGAL_STRING_CHARS: &[char] = &['\r', '\n', '\t', '\\', '%'];

pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    done: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        chars.push('\n');
        Self {
            source: chars,
            pos: 0,
            done: false,
        }
    }

    /// Restarts scanning from the beginning of the source.
    pub fn rewind(&mut self) {
        self.pos = 0;
        self.done = false;
    }

    fn current(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(' ' | '\t' | '\r')) {
            self.pos += 1;
        }
    }

    fn skip_comment(&mut self) {
        if self.current() == Some('#') {
            while !matches!(self.current(), Some('\n') | None) {
                self.pos += 1;
            }
        }
    }

    /// Consumes `len` characters as a token of `kind`.
    fn take(&mut self, len: usize, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += len;
        Token::new(self.text(start, self.pos), kind, Span::new(start, self.pos))
    }

    /// `=`, `<` and `>` become their two-character form when followed by `=`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        if self.peek() == Some('=') {
            self.take(2, double)
        } else {
            self.take(1, single)
        }
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        loop {
            match self.current() {
                Some('"') => break,
                Some(ch) if ILLEGAL_STRING_CHARS.contains(&ch) => {
                    return Err(LexError::IllegalStringChar {
                        ch,
                        span: Span::new(self.pos, self.pos + 1),
                    });
                }
                Some(_) => self.pos += 1,
                // Unreachable in practice: the trailing newline is rejected first.
                None => {
                    return Err(LexError::IllegalStringChar {
                        ch: '\n',
                        span: Span::new(self.pos, self.pos),
                    })
                }
            }
        }
        let text = self.text(start, self.pos);
        self.pos += 1;
        Ok(Token::new(text, TokenKind::String, Span::new(open, self.pos)))
    }

    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            if !self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(LexError::IllegalNumberChar {
                    span: Span::new(self.pos, self.pos + 1),
                });
            }
            while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        self.pos += 1;
        Ok(Token::new(
            self.text(start, self.pos),
            TokenKind::Number,
            Span::new(start, self.pos),
        ))
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        while self.current().is_some_and(|ch| ch.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        let text = self.text(start, self.pos);
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident);
        Token::new(text, kind, Span::new(start, self.pos))
    }

    /// Scans the next token. After the end of the source this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.skip_comment();

        let Some(ch) = self.current() else {
            return Ok(Token::new("", TokenKind::Eof, Span::new(self.pos, self.pos)));
        };

        let token = match ch {
            '+' => self.take(1, TokenKind::Plus),
            '-' => self.take(1, TokenKind::Minus),
            '*' => self.take(1, TokenKind::Asterisk),
            '/' => self.take(1, TokenKind::Slash),
            '\n' => self.take(1, TokenKind::Newline),
            '=' => self.one_or_two(TokenKind::Eq, TokenKind::EqEq),
            '<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            '>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            '!' => {
                if self.peek() != Some('=') {
                    return Err(LexError::ExpectedNotEqual {
                        span: Span::new(self.pos, self.pos + 1),
                    });
                }
                self.take(2, TokenKind::NotEq)
            }
            '"' => self.string()?,
            ch if ch.is_ascii_digit() => self.number()?,
            ch if ch.is_ascii_alphabetic() => self.identifier(),
            ch => {
                return Err(LexError::UnknownToken {
                    ch,
                    span: Span::new(self.pos, self.pos + 1),
                })
            }
        };

        tracing::trace!(kind = %token.kind, text = ?token.text, "token");
        Ok(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including `Eof`, or up to the first
    /// error, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.done = true;
        }
        Some(result)
    }
}

/// Tokenizes the whole source, ending with the `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
