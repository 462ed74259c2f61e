//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while reading source text.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntax problems
//! - The scope resolution error reported by environments
//! - Helpful error messages and suggestions

pub mod errors;
