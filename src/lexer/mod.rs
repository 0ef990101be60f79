//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - The ordered grammar table and its first-match priority
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/character tracking for error reporting
//! - Whitespace and unrecognised characters, which are dropped

pub mod grammar;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
