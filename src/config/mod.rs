//! Configuration threaded through the lexer and parser.
//!
//! - `Configuration` carries the verbosity and strictness flags
//! - `Logger` is the sink for progress messages and warnings

pub mod config;
pub mod logger;
