use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, tree::node::NodeId};

use super::{
    expr::{parse_boolean_expr, parse_id, parse_int_expr, parse_string_expr},
    parser::{BuildContext, Parser},
    stmt::{
        parse_assignment_stmt, parse_block, parse_if_stmt, parse_print_stmt, parse_var_decl,
        parse_while_stmt,
    },
};

pub type StmtHandler = fn(&mut Parser, BuildContext) -> Result<(), Error>;
pub type ExprHandler = fn(&mut Parser, BuildContext, Option<NodeId>) -> Result<(), Error>;

/// Kinds that can start a statement, in the order they are reported.
pub const STATEMENT_KINDS: [TokenKind; 6] = [
    TokenKind::Print,
    TokenKind::Char,
    TokenKind::Type,
    TokenKind::While,
    TokenKind::If,
    TokenKind::BlockBegin,
];

/// Kinds that can start an expression, in the order they are reported.
pub const EXPRESSION_KINDS: [TokenKind; 5] = [
    TokenKind::Digit,
    TokenKind::String,
    TokenKind::BoolVal,
    TokenKind::OpenParen,
    TokenKind::Char,
];

lazy_static! {
    pub static ref STMT_LOOKUP: HashMap<TokenKind, StmtHandler> = {
        let mut map: HashMap<TokenKind, StmtHandler> = HashMap::new();
        map.insert(TokenKind::Print, parse_print_stmt);
        map.insert(TokenKind::Char, parse_assignment_stmt);
        map.insert(TokenKind::Type, parse_var_decl);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::BlockBegin, parse_block);
        map
    };

    pub static ref EXPR_LOOKUP: HashMap<TokenKind, ExprHandler> = {
        let mut map: HashMap<TokenKind, ExprHandler> = HashMap::new();
        map.insert(TokenKind::Digit, parse_int_expr);
        map.insert(TokenKind::String, parse_string_expr);
        map.insert(TokenKind::BoolVal, parse_boolean_expr);
        map.insert(TokenKind::OpenParen, parse_boolean_expr);
        map.insert(TokenKind::Char, parse_id);
        map
    };
}
