//! Runtime and Target Fragments
//!
//! This module owns every fixed piece of C text the compiler produces.
//! Generated programs rely only on `<stdio.h>`: `printf` for PRINT and
//! `scanf` for INPUT. Every variable is a `float`.
//!
//! ## Purpose
//! - Keeps the target language in one place
//! - Lets the grammar code deal only with source constructs

/// Header lines written before any statement.
pub const PREAMBLE: &[&str] = &["#include <stdio.h>", "int main(void){"];

/// Body lines written after the last statement.
pub const EPILOGUE: &[&str] = &["return 0;", "}"];

/// Declaration of a variable, placed in the header.
pub fn declare_float(name: &str) -> String {
    format!("float {name};")
}

/// Prints a string literal followed by a newline.
/// The lexer guarantees the text holds no `%`, `\` or control characters.
pub fn print_literal(text: &str) -> String {
    format!("printf(\"{text}\\n\");")
}

/// Opens a print of a numeric value; the expression follows directly.
pub const PRINT_VALUE_OPEN: &str = "printf(\"%.2f\\n\", (float)(";

/// Closes [`PRINT_VALUE_OPEN`].
pub const PRINT_VALUE_CLOSE: &str = "));";

/// Reads a float into `name`. On a failed read the variable is zeroed and
/// the offending input word is discarded.
pub fn read_float(name: &str) -> [String; 4] {
    [
        format!("if(0 == scanf(\"%f\", &{name})) {{"),
        format!("{name} = 0;"),
        "scanf(\"%*s\");".to_string(),
        "}".to_string(),
    ]
}

/// Opens an assignment; the expression follows directly.
pub fn assign_open(name: &str) -> String {
    format!("{name} = ")
}

pub const STATEMENT_END: &str = ";";

/// Written after `/` so the divisor, and with it the division, is floating point.
pub const FLOAT_CAST: &str = "(float)";

/// Wraps a signed primary, keeping `-` `-` from reading as C's `--`.
pub const GROUP_OPEN: &str = "(";
pub const GROUP_CLOSE: &str = ")";

pub const IF_OPEN: &str = "if(";
pub const WHILE_OPEN: &str = "while(";
/// Closes the condition of an `if`/`while` and opens its block.
pub const BLOCK_OPEN: &str = "){";
pub const BLOCK_CLOSE: &str = "}";

pub fn label(name: &str) -> String {
    format!("{name}:")
}

pub fn goto(name: &str) -> String {
    format!("goto {name};")
}

/// Identifiers that cannot name a variable or label in the generated
/// program: C keywords (through C23) and the names it declares or uses
/// from `<stdio.h>`.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "auto", "bool", "break", "case", "char", "const",
    "constexpr", "continue", "default", "do", "double", "else", "enum",
    "extern", "false", "float", "for", "goto", "if", "inline", "int", "long",
    "nullptr", "register", "restrict", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "true", "typedef", "typeof",
    "union", "unsigned", "void", "volatile", "while",
    // <stdio.h> and the generated program
    "main", "printf", "scanf", "EOF", "NULL", "FILE", "stdin", "stdout",
    "stderr",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}
