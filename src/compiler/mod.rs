//! Compiler Module
//!
//! Grammar productions and the target text they produce.
//!
//! ## Architecture
//! - `generators`: statement and expression productions, driven by [`crate::parser::Parser`]
//! - `runtime`: the fixed C fragments (preamble, printf/scanf forms, declarations)

pub mod generators;
pub mod runtime;
