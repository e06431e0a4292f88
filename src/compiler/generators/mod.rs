//! Code Generators Module
//!
//! Recognition and emission happen together: each production appends its
//! C translation while it consumes tokens.
//! - `statement`: PRINT, IF, WHILE, LABEL, GOTO, LET, INPUT
//! - `expression`: comparisons and arithmetic

pub mod expression;
pub mod statement;
