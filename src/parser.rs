//! Single-pass parser and emitter.
//!
//! [`Parser`] recognizes the grammar by recursive descent and appends the
//! equivalent C to an [`Emitter`] as each construct is matched; no tree is
//! built. It holds a two-token lookahead (`cur_token`, `peek_token`), the
//! set of declared variables and the two label sets.
//!
//! Variables must be declared (by LET or INPUT) before they are read, and
//! that is checked as soon as they are read. Labels may be jumped to before
//! they are declared, so GOTO targets are only checked once the whole
//! program has been parsed. Duplicate LABELs are rejected immediately.

use indexmap::{IndexMap, IndexSet};

use crate::compiler::generators::statement;
use crate::compiler::runtime;
use crate::emitter::Emitter;
use crate::error::{CompileError, ParseError};
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

pub struct Parser<'e> {
    lexer: Lexer,
    pub(crate) emitter: &'e mut Emitter,
    symbols: IndexSet<String>,
    labels_declared: IndexSet<String>,
    // Name -> span of the first GOTO that referenced it.
    labels_gotoed: IndexMap<String, Span>,
    pub(crate) cur_token: Token,
    peek_token: Token,
}

impl<'e> Parser<'e> {
    /// Creates a parser and primes the lookahead with the first two tokens.
    pub fn new(mut lexer: Lexer, emitter: &'e mut Emitter) -> Result<Self, CompileError> {
        let cur_token = lexer.next_token()?;
        let peek_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            emitter,
            symbols: IndexSet::new(),
            labels_declared: IndexSet::new(),
            labels_gotoed: IndexMap::new(),
            cur_token,
            peek_token,
        })
    }

    /// Variables declared so far, in declaration order.
    pub fn symbols(&self) -> &IndexSet<String> {
        &self.symbols
    }

    pub fn labels_declared(&self) -> &IndexSet<String> {
        &self.labels_declared
    }

    /// Labels named by a GOTO so far, in order of first reference.
    pub fn labels_gotoed(&self) -> impl Iterator<Item = &str> {
        self.labels_gotoed.keys().map(String::as_str)
    }

    pub(crate) fn check_token(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    /// Advances the lookahead by one token.
    pub(crate) fn next_token(&mut self) -> Result<(), CompileError> {
        let incoming = self.lexer.next_token()?;
        self.cur_token = std::mem::replace(&mut self.peek_token, incoming);
        Ok(())
    }

    /// Requires the current token to be of `kind`, consumes it and returns it.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if !self.check_token(kind) {
            return Err(ParseError::Expected {
                expected: kind,
                found: self.cur_token.kind,
                span: self.cur_token.span,
            }
            .into());
        }
        let token = self.cur_token.clone();
        self.next_token()?;
        Ok(token)
    }

    /// nl ::= '\n'+
    pub(crate) fn nl(&mut self) -> Result<(), CompileError> {
        tracing::trace!("NEWLINE");
        self.match_token(TokenKind::Newline)?;
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }

    /// Names that would clash with C keywords or `<stdio.h>` in the output.
    fn check_reserved(token: &Token) -> Result<(), CompileError> {
        if runtime::is_reserved(&token.text) {
            return Err(ParseError::ReservedIdentifier {
                name: token.text.clone(),
                span: token.span,
            }
            .into());
        }
        Ok(())
    }

    /// Records a variable, emitting its declaration on first sight only.
    pub(crate) fn declare_variable(&mut self, token: &Token) -> Result<(), CompileError> {
        Self::check_reserved(token)?;
        let name = token.text.as_str();
        if self.symbols.insert(name.to_string()) {
            tracing::debug!(name, "declaring variable");
            self.emitter.header_line(&runtime::declare_float(name));
        }
        Ok(())
    }

    pub(crate) fn is_declared(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    /// Records the current token as a declared label, failing if the name
    /// is reserved or was already declared.
    pub(crate) fn declare_label(&mut self) -> Result<(), CompileError> {
        let token = &self.cur_token;
        Self::check_reserved(token)?;
        if !self.labels_declared.insert(token.text.clone()) {
            return Err(ParseError::DuplicateLabel {
                name: token.text.clone(),
                span: token.span,
            }
            .into());
        }
        tracing::debug!(name = %token.text, "declaring label");
        Ok(())
    }

    /// Records a GOTO target. Resolution is deferred to the end of the program.
    pub(crate) fn reference_label(&mut self, token: &Token) -> Result<(), CompileError> {
        Self::check_reserved(token)?;
        self.labels_gotoed
            .entry(token.text.clone())
            .or_insert(token.span);
        Ok(())
    }

    /// Every label named by a GOTO must have been declared somewhere.
    fn check_labels(&self) -> Result<(), CompileError> {
        match self
            .labels_gotoed
            .iter()
            .find(|(name, _)| !self.labels_declared.contains(name.as_str()))
        {
            Some((name, span)) => Err(ParseError::UndeclaredLabel {
                name: name.clone(),
                span: *span,
            }
            .into()),
            None => Ok(()),
        }
    }

    /// program ::= {nl} {statement}
    ///
    /// Drives the whole compilation. On error the emitter holds partial
    /// output that must be discarded.
    pub fn compile_program(&mut self) -> Result<(), CompileError> {
        tracing::trace!("PROGRAM");
        for line in runtime::PREAMBLE {
            self.emitter.header_line(line);
        }

        // Leading blank lines; each statement consumes the ones after it.
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }

        while !self.check_token(TokenKind::Eof) {
            statement::compile_statement(self)?;
        }

        for line in runtime::EPILOGUE {
            self.emitter.emit_line(line);
        }

        self.check_labels()
    }
}
