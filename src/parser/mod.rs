//! Parser module that grows the CST, AST and symbol table together.
//!
//! This module contains a one-token-lookahead recursive-descent parser.
//! Every production function receives the current parent in each of the
//! three trees and decides what, if anything, to attach to each one.
//!
//! - `parser`: cursor, terminal matching and the entry point
//! - `stmt`: program, block and statement productions
//! - `expr`: expression productions
//! - `lookups`: dispatch tables keyed on the lookahead token kind

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
