use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::token::{Span, TokenKind};

#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    #[error("Unknown token: {ch:?}")]
    UnknownToken { ch: char, span: Span },
    #[error("Expected `!=`, got a lone `!`")]
    ExpectedNotEqual { span: Span },
    #[error("Illegal character in string: {ch:?}")]
    IllegalStringChar { ch: char, span: Span },
    #[error("Illegal character in number: a decimal point must be followed by a digit")]
    IllegalNumberChar { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownToken { span, .. }
            | LexError::ExpectedNotEqual { span }
            | LexError::IllegalStringChar { span, .. }
            | LexError::IllegalNumberChar { span } => *span,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected} but found {found}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    #[error("Invalid statement of {text:?} ({kind})")]
    InvalidStatement {
        text: String,
        kind: TokenKind,
        span: Span,
    },
    #[error("Expected comparison operator at: {text:?}")]
    ExpectedComparisonOperator { text: String, span: Span },
    #[error("Unexpected token at {text:?}")]
    UnexpectedToken { text: String, span: Span },
    #[error("Referencing variable before assignment: {name}")]
    UndeclaredVariable { name: String, span: Span },
    #[error("Label already exists: {name}")]
    DuplicateLabel { name: String, span: Span },
    #[error("Attempting to GOTO to undeclared label: {name}")]
    UndeclaredLabel { name: String, span: Span },
    #[error("Identifier is reserved in the generated C: {name}")]
    ReservedIdentifier { name: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. }
            | ParseError::InvalidStatement { span, .. }
            | ParseError::ExpectedComparisonOperator { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UndeclaredVariable { span, .. }
            | ParseError::DuplicateLabel { span, .. }
            | ParseError::UndeclaredLabel { span, .. }
            | ParseError::ReservedIdentifier { span, .. } => *span,
        }
    }
}

/// The first error of a compilation. Nothing is emitted once one occurs.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("Lexing error. {0}")]
    Lex(#[from] LexError),
    #[error("Parsing error. {0}")]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(error) => error.span(),
            CompileError::Parse(error) => error.span(),
        }
    }
}

/// Display a compile error with ariadne formatting
pub fn display_compile_error(source: &str, filename: &str, error: &CompileError) {
    // Offsets past the end (EOF, the synthesized newline) are clamped so
    // the label still lands on the last character.
    let len = source.chars().count();
    let span = error.span().range();
    let start = span.start.min(len.saturating_sub(1));
    let end = span.end.clamp(start + 1, len.max(start + 1));
    let (title, detail) = match error {
        CompileError::Lex(inner) => ("Lexing error", inner.to_string()),
        CompileError::Parse(inner) => ("Parsing error", inner.to_string()),
    };

    let printed = Report::build(ReportKind::Error, filename, start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, start..end))
                .with_message(format!("{title}: {detail}"))
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if printed.is_err() {
        eprintln!("{error}");
    }
}
