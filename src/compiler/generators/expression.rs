//! Expression Compilation Module
//!
//! Precedence from loosest to tightest: comparison, additive,
//! multiplicative, unary sign, primary. Operators and literals are copied
//! to the output verbatim as they are consumed, so the C expression has the
//! same shape as the source one. Two additions keep C's meaning equal to
//! the source's: a signed primary is parenthesized, so `4 - -4` cannot turn
//! into C's `--`, and the divisor of `/` is cast to `float`, so integer
//! literals never divide as integers.

use crate::compiler::runtime;
use crate::error::{CompileError, ParseError};
use crate::parser::Parser;
use crate::token::TokenKind;

/// Emits the current token's text and advances past it.
fn emit_current(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    parser.emitter.emit(&parser.cur_token.text);
    parser.next_token()
}

/// comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
pub fn compile_comparison(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("COMPARISON");
    compile_expression(parser)?;

    if !parser.cur_token.kind.is_comparison_operator() {
        return Err(ParseError::ExpectedComparisonOperator {
            text: parser.cur_token.text.clone(),
            span: parser.cur_token.span,
        }
        .into());
    }

    while parser.cur_token.kind.is_comparison_operator() {
        emit_current(parser)?;
        compile_expression(parser)?;
    }
    Ok(())
}

/// expression ::= term {("+" | "-") term}
pub fn compile_expression(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("EXPRESSION");
    compile_term(parser)?;
    while parser.check_token(TokenKind::Plus) || parser.check_token(TokenKind::Minus) {
        emit_current(parser)?;
        compile_term(parser)?;
    }
    Ok(())
}

/// term ::= unary {("*" | "/") unary}
pub fn compile_term(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("TERM");
    compile_unary(parser)?;
    while parser.check_token(TokenKind::Asterisk) || parser.check_token(TokenKind::Slash) {
        let divides = parser.check_token(TokenKind::Slash);
        emit_current(parser)?;
        if divides {
            parser.emitter.emit(runtime::FLOAT_CAST);
        }
        compile_unary(parser)?;
    }
    Ok(())
}

/// unary ::= ["+" | "-"] primary
pub fn compile_unary(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("UNARY");
    if parser.check_token(TokenKind::Plus) || parser.check_token(TokenKind::Minus) {
        parser.emitter.emit(runtime::GROUP_OPEN);
        emit_current(parser)?;
        compile_primary(parser)?;
        parser.emitter.emit(runtime::GROUP_CLOSE);
        return Ok(());
    }
    compile_primary(parser)
}

/// primary ::= number | ident
///
/// An identifier must already have been declared by LET or INPUT.
pub fn compile_primary(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!(text = %parser.cur_token.text, "PRIMARY");
    match parser.cur_token.kind {
        TokenKind::Number => emit_current(parser),
        TokenKind::Ident => {
            if !parser.is_declared(&parser.cur_token.text) {
                return Err(ParseError::UndeclaredVariable {
                    name: parser.cur_token.text.clone(),
                    span: parser.cur_token.span,
                }
                .into());
            }
            emit_current(parser)
        }
        _ => Err(ParseError::UnexpectedToken {
            text: parser.cur_token.text.clone(),
            span: parser.cur_token.span,
        }
        .into()),
    }
}
