use std::{fmt::Display, rc::Rc};

use crate::lexer::tokens::Token;

use super::node::{NodeId, Payload, Tree};

/// A declared (or re-declared) identifier.
///
/// `value` stays `None` until a literal is consumed while this variable is
/// being initialized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variable {
    pub name: String,
    pub declared_type: Option<String>,
    pub tokens: Vec<Rc<Token>>,
    pub value: Option<String>,
}

impl Variable {
    pub fn new() -> Self {
        Variable::default()
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_type(&mut self, declared_type: &str) {
        self.declared_type = Some(declared_type.to_string());
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    pub fn push_token(&mut self, token: Rc<Token>) {
        self.tokens.push(token);
    }

    pub fn is_used(&self) -> bool {
        self.value.is_some()
    }

    pub fn first_token(&self) -> Option<&Token> {
        self.tokens.first().map(Rc::as_ref)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(declared_type) = &self.declared_type {
            write!(f, ": {}", declared_type)?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

/// Symbol container for one lexical block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    label: &'static str,
}

impl Scope {
    pub fn new(label: &'static str) -> Self {
        Scope { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Tree of scopes and the variables declared directly inside each one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    tree: Tree,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn set_root(&mut self, payload: Payload) -> NodeId {
        self.tree.set_root(payload)
    }

    pub fn open_scope(&mut self, parent: NodeId, label: &'static str) -> NodeId {
        self.tree.append_child(parent, Payload::Scope(Scope::new(label)))
    }

    /// Adds an empty variable as a new child of `scope`.
    pub fn declare(&mut self, scope: NodeId) -> NodeId {
        self.tree.append_child(scope, Payload::Variable(Variable::new()))
    }

    pub fn variable(&self, id: NodeId) -> Option<&Variable> {
        self.tree.payload(id).as_variable()
    }

    pub fn variable_mut(&mut self, id: NodeId) -> Option<&mut Variable> {
        self.tree.get_mut(id).payload.as_variable_mut()
    }

    pub fn is_scope(&self, id: NodeId) -> bool {
        self.tree.payload(id).as_scope().is_some()
    }

    /// The outermost scope: the first scope reachable from the root.
    pub fn root_scope(&self) -> Option<NodeId> {
        let root = self.tree.root()?;
        if self.is_scope(root) {
            return Some(root);
        }
        self.tree
            .children(root)
            .iter()
            .copied()
            .find(|child| self.is_scope(*child))
    }

    /// Variables declared directly inside `scope`, in declaration order.
    pub fn variables_in(&self, scope: NodeId) -> Vec<NodeId> {
        self.tree
            .children(scope)
            .iter()
            .copied()
            .filter(|child| self.variable(*child).is_some())
            .collect()
    }

    /// Looks for `name` among the direct children of `scope` only.
    pub fn find_in_scope(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        self.variables_in(scope)
            .into_iter()
            .rfind(|id| self.variable(*id).is_some_and(|variable| variable.name == name))
    }

    /// Looks for `name` in `scope`, then in each enclosing scope.
    pub fn resolve(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        let mut current = Some(scope);

        while let Some(scope) = current {
            if let Some(found) = self.find_in_scope(scope, name) {
                return Some(found);
            }
            current = self.tree.parent(scope).filter(|parent| self.is_scope(*parent));
        }

        None
    }

    pub fn render(&self) -> String {
        self.tree.render()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tree)
    }
}
