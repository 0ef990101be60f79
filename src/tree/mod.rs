//! Trees grown by the parser.
//!
//! - `node`: the arena (`Tree`), node payloads and production labels
//! - `symbols`: variables, scopes and the scope-chained symbol table
//!
//! The CST and AST are plain `Tree`s; the symbol table wraps one.

pub mod node;
pub mod symbols;

#[cfg(test)]
mod tests;
