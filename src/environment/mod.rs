//! Lexical scopes for name resolution.
//!
//! A scope maps names to a value and a type and links to the scope it is
//! nested in. Later stages open a child scope per function body or block,
//! define parameters and locals in it, and resolve identifiers outward.

pub mod environment;
