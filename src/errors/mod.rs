//! Error types and error collection for the front end.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures with line/column information
//! - Specific error variants for lexical and syntactic failures
//! - The collector that accumulates errors instead of aborting the parse
//! - Helpful error messages and suggestions

pub mod errors;
