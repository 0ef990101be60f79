#![allow(clippy::module_inception)]

//! Front end for a small block-structured teaching language.
//!
//! Source text is split into tokens by [`lexer::lexer::tokenize`], then
//! [`parser::parser::parse`] grows a concrete syntax tree, an abstract syntax
//! tree and a nested-scope symbol table in a single recursive-descent pass.

use std::fmt::Display;

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tree;

extern crate regex;

/// A line/column location in the source text.
///
/// Lines start at 1. The column is the distance from the preceding newline,
/// so it starts at 1 after a newline and at 0 on the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Computes the position of byte offset `offset` within `source`.
    ///
    /// Lines are counted by `'\n'`. The column is the number of characters
    /// between the preceding newline (or the start of the text) and `offset`.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let before = &source[..offset];
        let line = 1 + before.matches('\n').count();
        let column = match before.rfind('\n') {
            Some(newline) => before[newline..].chars().count(),
            None => before.chars().count(),
        };

        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} at character {}", self.line, self.column)
    }
}
