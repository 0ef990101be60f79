//! Parser state and terminal matching.
//!
//! The only state that moves during a parse is the token cursor, which never
//! goes backwards. The three trees are grown through the `BuildContext` that
//! each production receives.

use std::rc::Rc;

use crate::{
    config::config::Configuration,
    errors::{
        errors::{Error, ErrorImpl, Expected},
        warnings::Warning,
    },
    lexer::tokens::{Token, TokenKind},
    tree::{
        node::{NodeId, Payload, Tree},
        symbols::SymbolTable,
    },
    Position, MK_PRODUCTION,
};

use super::stmt::parse_program;

/// Current parent node in each of the three trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildContext {
    pub cst: NodeId,
    pub ast: NodeId,
    pub scope: NodeId,
}

impl BuildContext {
    pub fn with_cst(self, cst: NodeId) -> Self {
        BuildContext { cst, ..self }
    }
}

/// Where a matched terminal is attached.
///
/// `variable` is the symbol-table node the token is recorded on: a type
/// keyword sets its type, an identifier renames it and a literal sets its
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targets {
    pub cst: Option<NodeId>,
    pub ast: Option<NodeId>,
    pub variable: Option<NodeId>,
}

impl Targets {
    pub fn cst(cst: NodeId) -> Self {
        Targets {
            cst: Some(cst),
            ..Targets::default()
        }
    }

    pub fn both(ctx: BuildContext) -> Self {
        Targets {
            cst: Some(ctx.cst),
            ast: Some(ctx.ast),
            variable: None,
        }
    }

    pub fn bind(self, variable: Option<NodeId>) -> Self {
        Targets { variable, ..self }
    }
}

/// What `match_expect` does when the current token is of another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPolicy {
    /// Return a parser error
    Raise,
    /// Report `false` and leave the cursor alone
    Soft,
}

pub struct Parser {
    /// The tokens to parse
    tokens: Vec<Rc<Token>>,
    /// Index of the current token
    pos: usize,
    cst: Tree,
    ast: Tree,
    symbol_table: SymbolTable,
    /// Warnings raised so far, in the order they were logged
    warnings: Vec<Warning>,
    config: Configuration,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, config: &Configuration) -> Self {
        Parser {
            tokens: tokens.into_iter().map(Rc::new).collect(),
            pos: 0,
            cst: Tree::new(),
            ast: Tree::new(),
            symbol_table: SymbolTable::new(),
            warnings: vec![],
            config: config.clone(),
        }
    }

    pub fn cst(&self) -> &Tree {
        &self.cst
    }

    pub fn ast(&self) -> &Tree {
        &self.ast
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn symbol_table_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbol_table
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn tokens(&self) -> &[Rc<Token>] {
        &self.tokens
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Rc<Token>> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `offset` places after the current one.
    pub fn peek(&self, offset: usize) -> Option<&Rc<Token>> {
        self.tokens.get(self.pos + offset)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn info(&self, message: &str) {
        self.config.logger().info(message);
    }

    /// Logs a warning and keeps it for later inspection.
    pub fn warn(&mut self, warning: Warning) {
        self.config.logger().warning(&warning.to_string());
        self.warnings.push(warning);
    }

    /// Position just past the last token, used when the input runs out.
    fn end_position(&self) -> Position {
        match self.tokens.last() {
            Some(last) => Position::new(last.line(), last.column() + last.lexeme.chars().count()),
            None => Position::new(1, 0),
        }
    }

    /// Error for the current token (or the end of input) not being `expected`.
    pub fn unexpected(&self, expected: Expected) -> Error {
        match self.current_token() {
            Some(token) => Error::unexpected(token, expected),
            None => Error::new(ErrorImpl::UnexpectedEndOfInput { expected }, self.end_position()),
        }
    }

    /// Lookahead probe: is the current token one of `kinds`? Never consumes.
    pub fn match_any(&self, kinds: &[TokenKind]) -> bool {
        self.current_token()
            .is_some_and(|token| token.is_one_of_many(kinds))
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// On a match the token is appended to the requested tree parents and
    /// recorded on the target variable, then the cursor moves forward. On a
    /// mismatch the cursor stays put and `policy` decides between an error
    /// and `Ok(false)`.
    pub fn match_expect(
        &mut self,
        kind: TokenKind,
        targets: Targets,
        policy: FailPolicy,
    ) -> Result<bool, Error> {
        let token = match self.current_token() {
            Some(token) if token.kind == kind => Rc::clone(token),
            _ => {
                return match policy {
                    FailPolicy::Raise => Err(self.unexpected(Expected::Kind(kind))),
                    FailPolicy::Soft => Ok(false),
                }
            }
        };

        if let Some(cst) = targets.cst {
            self.cst.append_child(cst, Payload::Token(Rc::clone(&token)));
        }
        if let Some(ast) = targets.ast {
            self.ast.append_child(ast, Payload::Token(Rc::clone(&token)));
        }
        if let Some(variable) = targets.variable {
            self.record(variable, &token);
        }

        self.advance();
        Ok(true)
    }

    fn record(&mut self, id: NodeId, token: &Rc<Token>) {
        if let Some(variable) = self.symbol_table.variable_mut(id) {
            variable.push_token(Rc::clone(token));

            match token.kind {
                TokenKind::Type => variable.set_type(&token.lexeme),
                TokenKind::Char => variable.rename(&token.lexeme),
                kind if kind.is_literal() => variable.set_value(&token.lexeme),
                _ => {}
            }
        }
    }

    /// Creates the `Program` root of all three trees.
    pub fn set_roots(&mut self) -> BuildContext {
        BuildContext {
            cst: self.cst.set_root(MK_PRODUCTION!("Program")),
            ast: self.ast.set_root(MK_PRODUCTION!("Program")),
            scope: self.symbol_table.set_root(MK_PRODUCTION!("Program")),
        }
    }

    /// Appends a `label` production to both the CST and AST parents.
    pub fn open_production(&mut self, ctx: BuildContext, label: &'static str) -> BuildContext {
        BuildContext {
            cst: self.cst.append_child(ctx.cst, MK_PRODUCTION!(label)),
            ast: self.ast.append_child(ctx.ast, MK_PRODUCTION!(label)),
            scope: ctx.scope,
        }
    }

    /// Like `open_production`, and also opens a new scope in the symbol table.
    pub fn open_scope(&mut self, ctx: BuildContext, label: &'static str) -> BuildContext {
        let scope = self.symbol_table.open_scope(ctx.scope, label);
        BuildContext {
            scope,
            ..self.open_production(ctx, label)
        }
    }

    /// Appends a production to the CST only.
    pub fn open_cst_production(&mut self, ctx: BuildContext, label: &'static str) -> BuildContext {
        ctx.with_cst(self.cst.append_child(ctx.cst, MK_PRODUCTION!(label)))
    }

    /// Parses the whole token stream.
    ///
    /// Returns `Ok(true)` once the program has been parsed, or the first
    /// parser error. Whatever was built before an error stays in the trees.
    pub fn parse(&mut self) -> Result<bool, Error> {
        self.info("Parsing...");

        if self.tokens.is_empty() {
            return Err(self.unexpected(Expected::Kind(TokenKind::BlockBegin)));
        }

        parse_program(self)?;

        if self.config.verbose {
            self.info("Printing CST...");
            self.info(&self.cst.render());
            self.info("Printing AST...");
            self.info(&self.ast.render());
            self.info("Printing symbol table...");
            self.info(&self.symbol_table.render());
        }

        self.report_unused();
        self.info("Parse completed successfully.");

        Ok(true)
    }

    /// Warns about every variable of the outermost scope that never got a value.
    fn report_unused(&mut self) {
        let Some(scope) = self.symbol_table.root_scope() else {
            return;
        };

        let unused = self
            .symbol_table
            .variables_in(scope)
            .into_iter()
            .filter_map(|id| self.symbol_table.variable(id))
            .filter(|variable| !variable.is_used())
            .map(|variable| Warning::UnusedVariable {
                name: variable.name.clone(),
                position: variable.first_token().map(|t| t.position).unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        for warning in unused {
            self.warn(warning);
        }
    }
}

/// Parses a stream of tokens into a CST, AST and symbol table.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the trees and warnings)
/// - `Ok(true)` on success, or the first parser error
pub fn parse(tokens: Vec<Token>, config: &Configuration) -> (Parser, Result<bool, Error>) {
    let mut parser = Parser::new(tokens, config);
    let result = parser.parse();
    (parser, result)
}
