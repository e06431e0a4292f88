pub mod compiler;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod token;

pub use emitter::Emitter;
pub use error::{CompileError, LexError, ParseError};
pub use lexer::{tokenize, Lexer};
pub use parser::Parser;
pub use token::{Span, Token, TokenKind};

/// Compiles a BASIC program into the text of an equivalent C program.
pub fn compile(source: &str) -> Result<String, CompileError> {
    tracing::debug!(chars = source.chars().count(), "compiling program");
    let mut emitter = Emitter::new();
    let mut parser = Parser::new(Lexer::new(source), &mut emitter)?;
    parser.compile_program()?;
    let output = emitter.finish();
    tracing::debug!(bytes = output.len(), "compilation finished");
    Ok(output)
}
