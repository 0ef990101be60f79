use std::{fmt::Display, rc::Rc};

use crate::lexer::tokens::Token;

use super::symbols::{Scope, Variable};

/// Index of a node inside its owning [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Name of the grammar rule an internal node stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    label: &'static str,
}

impl Production {
    pub fn new(label: &'static str) -> Self {
        Production { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Token(Rc<Token>),
    Production(Production),
    Scope(Scope),
    Variable(Variable),
}

impl Payload {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Payload::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_production(&self) -> Option<&Production> {
        match self {
            Payload::Production(production) => Some(production),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&Scope> {
        match self {
            Payload::Scope(scope) => Some(scope),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Payload::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match self {
            Payload::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Token(token) => write!(f, "[{}]", token.lexeme),
            Payload::Production(production) => write!(f, "<{}>", production.label),
            Payload::Scope(scope) => write!(f, "Scope({})", scope.label()),
            Payload::Variable(variable) => write!(f, "{}", variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub payload: Payload,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of nodes with a single root.
///
/// Children are owned through the arena; `parent` is only an index used for
/// upward lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    /// Creates the root node. A tree only ever gets one.
    pub fn set_root(&mut self, payload: Payload) -> NodeId {
        let id = self.alloc(payload, None);
        self.root = Some(id);
        id
    }

    /// Adds `payload` as the last child of `parent` and links it back.
    pub fn append_child(&mut self, parent: NodeId, payload: Payload) -> NodeId {
        let id = self.alloc(payload, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn alloc(&mut self, payload: Payload, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            payload,
            parent,
            children: vec![],
        });
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn payload(&self, id: NodeId) -> &Payload {
        &self.nodes[id.0].payload
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order, starting at the root.
    pub fn iter(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = self.root.into_iter().collect::<Vec<_>>();

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }

        order
    }

    /// Depth of `id` below the root (the root is 0).
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Indented text rendering, one node per line.
    pub fn render(&self) -> String {
        self.iter()
            .into_iter()
            .map(|id| format!("{}{}\n", "-".repeat(self.depth(id)), self.payload(id)))
            .collect()
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
