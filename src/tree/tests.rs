use std::rc::Rc;

use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, MK_PRODUCTION, MK_TOKEN};

use super::{
    node::{Payload, Tree},
    symbols::{SymbolTable, Variable},
};

fn token(kind: TokenKind, lexeme: &str) -> Rc<Token> {
    Rc::new(MK_TOKEN!(kind, lexeme.to_string(), Position::new(1, 1)))
}

#[test]
fn test_append_child_links_both_ways() {
    let mut tree = Tree::new();
    let root = tree.set_root(MK_PRODUCTION!("Program"));
    let block = tree.append_child(root, MK_PRODUCTION!("Block"));
    let open = tree.append_child(block, Payload::Token(token(TokenKind::BlockBegin, "{")));

    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.children(root), &[block]);
    assert_eq!(tree.children(block), &[open]);
    assert_eq!(tree.parent(open), Some(block));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.depth(open), 2);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = Tree::new();
    let root = tree.set_root(MK_PRODUCTION!("Block"));
    let first = tree.append_child(root, Payload::Token(token(TokenKind::BlockBegin, "{")));
    let second = tree.append_child(root, Payload::Token(token(TokenKind::BlockEnd, "}")));

    assert_eq!(tree.children(root), &[first, second]);
    assert_eq!(tree.iter(), vec![root, first, second]);
}

#[test]
fn test_render() {
    let mut tree = Tree::new();
    let root = tree.set_root(MK_PRODUCTION!("Program"));
    let block = tree.append_child(root, MK_PRODUCTION!("Block"));
    tree.append_child(block, Payload::Token(token(TokenKind::BlockBegin, "{")));
    tree.append_child(block, Payload::Token(token(TokenKind::BlockEnd, "}")));
    tree.append_child(root, Payload::Token(token(TokenKind::ProgramEnd, "$")));

    assert_eq!(tree.render(), "<Program>\n-<Block>\n--[{]\n--[}]\n-[$]\n");
    assert_eq!(tree.to_string(), tree.render());
}

#[test]
fn test_empty_tree() {
    let tree = Tree::new();

    assert!(tree.is_empty());
    assert!(tree.iter().is_empty());
    assert_eq!(tree.render(), "");
}

#[test]
fn test_variable_wiring() {
    let mut variable = Variable::new();
    variable.push_token(token(TokenKind::Type, "int"));
    variable.set_type("int");
    variable.push_token(token(TokenKind::Char, "a"));
    variable.rename("a");

    assert_eq!(variable.name, "a");
    assert_eq!(variable.declared_type.as_deref(), Some("int"));
    assert_eq!(variable.first_token().map(|t| t.kind), Some(TokenKind::Type));
    assert!(!variable.is_used());
    assert_eq!(variable.to_string(), "a: int");

    variable.set_value("5");
    assert!(variable.is_used());
    assert_eq!(variable.to_string(), "a: int = 5");
}

fn declare(table: &mut SymbolTable, scope: crate::tree::node::NodeId, name: &str) -> crate::tree::node::NodeId {
    let id = table.declare(scope);
    table.variable_mut(id).unwrap().rename(name);
    id
}

#[test]
fn test_symbol_table_root_scope() {
    let mut table = SymbolTable::new();
    assert_eq!(table.root_scope(), None);

    let root = table.set_root(MK_PRODUCTION!("Program"));
    let scope = table.open_scope(root, "Block");

    assert_eq!(table.root_scope(), Some(scope));
    assert!(table.is_scope(scope));
    assert!(!table.is_scope(root));
}

#[test]
fn test_resolve_walks_scope_chain() {
    let mut table = SymbolTable::new();
    let root = table.set_root(MK_PRODUCTION!("Program"));
    let outer = table.open_scope(root, "Block");
    let a = declare(&mut table, outer, "a");
    let inner = table.open_scope(outer, "Block");
    let b = declare(&mut table, inner, "b");

    assert_eq!(table.resolve(inner, "b"), Some(b));
    assert_eq!(table.resolve(inner, "a"), Some(a));
    assert_eq!(table.resolve(outer, "b"), None);
    assert_eq!(table.resolve(inner, "c"), None);
}

#[test]
fn test_find_in_scope_ignores_parents() {
    let mut table = SymbolTable::new();
    let root = table.set_root(MK_PRODUCTION!("Program"));
    let outer = table.open_scope(root, "Block");
    declare(&mut table, outer, "a");
    let inner = table.open_scope(outer, "Block");

    assert_eq!(table.find_in_scope(inner, "a"), None);
    assert!(table.find_in_scope(outer, "a").is_some());
}

#[test]
fn test_inner_declaration_shadows_outer() {
    let mut table = SymbolTable::new();
    let root = table.set_root(MK_PRODUCTION!("Program"));
    let outer = table.open_scope(root, "Block");
    let outer_a = declare(&mut table, outer, "a");
    let inner = table.open_scope(outer, "Block");
    let inner_a = declare(&mut table, inner, "a");

    assert_ne!(outer_a, inner_a);
    assert_eq!(table.resolve(inner, "a"), Some(inner_a));
    assert_eq!(table.resolve(outer, "a"), Some(outer_a));
}

#[test]
fn test_variables_in_skips_nested_scopes() {
    let mut table = SymbolTable::new();
    let root = table.set_root(MK_PRODUCTION!("Program"));
    let outer = table.open_scope(root, "Block");
    let a = declare(&mut table, outer, "a");
    let inner = table.open_scope(outer, "Block");
    declare(&mut table, inner, "b");
    let c = declare(&mut table, outer, "c");

    assert_eq!(table.variables_in(outer), vec![a, c]);
    assert_eq!(
        table.render(),
        "<Program>\n-Scope(Block)\n--a\n--Scope(Block)\n---b\n--c\n"
    );
}
