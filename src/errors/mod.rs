//! Error types and diagnostics for the front end.
//!
//! - Fatal errors (`Error`) carry a source position and stop the run
//! - Warnings are reported through the logger and never stop parsing

pub mod errors;
pub mod warnings;
