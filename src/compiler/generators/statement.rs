//! Statement Compilation Module
//!
//! This module contains the statement productions of the grammar. Each
//! function takes `&mut Parser`, recognizes one statement starting at the
//! current token and emits its C translation as it goes.
//!
//! ## Grammar
//! ```text
//! statement ::= "PRINT" (string | expression) nl
//!             | "IF" comparison "THEN" nl {statement} "ENDIF" nl
//!             | "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE" nl
//!             | "LABEL" ident nl
//!             | "GOTO" ident nl
//!             | "LET" ident "=" expression nl
//!             | "INPUT" ident nl
//! ```

use crate::compiler::generators::expression::{compile_comparison, compile_expression};
use crate::compiler::runtime;
use crate::error::{CompileError, ParseError};
use crate::parser::Parser;
use crate::token::TokenKind;

/// Compiles one statement and the newlines that terminate it.
pub fn compile_statement(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    match parser.cur_token.kind {
        TokenKind::Print => compile_print(parser)?,
        TokenKind::If => compile_if(parser)?,
        TokenKind::While => compile_while(parser)?,
        TokenKind::Label => compile_label(parser)?,
        TokenKind::Goto => compile_goto(parser)?,
        TokenKind::Let => compile_let(parser)?,
        TokenKind::Input => compile_input(parser)?,
        kind => {
            return Err(ParseError::InvalidStatement {
                text: parser.cur_token.text.clone(),
                kind,
                span: parser.cur_token.span,
            }
            .into())
        }
    }
    parser.nl()
}

// ============================================================================
// Simple Statements
// ============================================================================

/// "PRINT" (string | expression)
pub fn compile_print(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-PRINT");
    parser.next_token()?;

    if parser.check_token(TokenKind::String) {
        let line = runtime::print_literal(&parser.cur_token.text);
        parser.emitter.emit_line(&line);
        parser.next_token()?;
    } else {
        parser.emitter.emit(runtime::PRINT_VALUE_OPEN);
        compile_expression(parser)?;
        parser.emitter.emit_line(runtime::PRINT_VALUE_CLOSE);
    }
    Ok(())
}

/// "LABEL" ident
pub fn compile_label(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-LABEL");
    parser.next_token()?;

    // Checked while the name is still the current token, so a duplicate
    // fails before any further token is consumed.
    if parser.check_token(TokenKind::Ident) {
        parser.declare_label()?;
    }
    let name = parser.match_token(TokenKind::Ident)?;
    parser.emitter.emit_line(&runtime::label(&name.text));
    Ok(())
}

/// "GOTO" ident
pub fn compile_goto(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-GOTO");
    parser.next_token()?;

    let name = parser.match_token(TokenKind::Ident)?;
    parser.reference_label(&name)?;
    parser.emitter.emit_line(&runtime::goto(&name.text));
    Ok(())
}

/// "LET" ident "=" expression
pub fn compile_let(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-LET");
    parser.next_token()?;

    let name = parser.match_token(TokenKind::Ident)?;
    parser.declare_variable(&name)?;
    parser.emitter.emit(&runtime::assign_open(&name.text));
    parser.match_token(TokenKind::Eq)?;
    compile_expression(parser)?;
    parser.emitter.emit_line(runtime::STATEMENT_END);
    Ok(())
}

/// "INPUT" ident
pub fn compile_input(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-INPUT");
    parser.next_token()?;

    let name = parser.match_token(TokenKind::Ident)?;
    parser.declare_variable(&name)?;
    for line in runtime::read_float(&name.text) {
        parser.emitter.emit_line(&line);
    }
    Ok(())
}

// ============================================================================
// Control Flow
// ============================================================================

/// "IF" comparison "THEN" nl {statement} "ENDIF"
pub fn compile_if(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-IF");
    parser.next_token()?;

    parser.emitter.emit(runtime::IF_OPEN);
    compile_comparison(parser)?;
    parser.match_token(TokenKind::Then)?;
    parser.nl()?;
    parser.emitter.emit_line(runtime::BLOCK_OPEN);

    compile_block(parser, TokenKind::EndIf)
}

/// "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"
pub fn compile_while(parser: &mut Parser<'_>) -> Result<(), CompileError> {
    tracing::trace!("STATEMENT-WHILE");
    parser.next_token()?;

    parser.emitter.emit(runtime::WHILE_OPEN);
    compile_comparison(parser)?;
    parser.match_token(TokenKind::Repeat)?;
    parser.nl()?;
    parser.emitter.emit_line(runtime::BLOCK_OPEN);

    compile_block(parser, TokenKind::EndWhile)
}

/// Compiles statements until `end` is the current token, then consumes it
/// and closes the C block. Reaching EOF first fails as an invalid statement.
fn compile_block(parser: &mut Parser<'_>, end: TokenKind) -> Result<(), CompileError> {
    while !parser.check_token(end) {
        compile_statement(parser)?;
    }
    parser.match_token(end)?;
    parser.emitter.emit_line(runtime::BLOCK_CLOSE);
    Ok(())
}
