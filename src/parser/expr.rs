use crate::{
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
    tree::node::NodeId,
};

use super::{
    lookups::{EXPRESSION_KINDS, EXPR_LOOKUP},
    parser::{BuildContext, FailPolicy, Parser, Targets},
};

/// `Expr ::= IntExpr | StringExpr | BooleanExpr | Id`
///
/// `variable` is the variable being assigned, if any. Terminals consumed
/// here are recorded on it.
pub fn parse_expr(
    parser: &mut Parser,
    ctx: BuildContext,
    variable: Option<NodeId>,
) -> Result<(), Error> {
    parser.info("  Parsing expression...");

    match parser.current_token_kind().and_then(|kind| EXPR_LOOKUP.get(&kind)) {
        Some(handler) => handler(parser, ctx, variable),
        None => Err(parser.unexpected(Expected::from(&EXPRESSION_KINDS[..]))),
    }
}

/// `IntExpr ::= digit (intop Expr)?`
///
/// Only the leading digit is recorded on the assigned variable.
pub fn parse_int_expr(
    parser: &mut Parser,
    ctx: BuildContext,
    variable: Option<NodeId>,
) -> Result<(), Error> {
    parser.info("  Parsing integer expression...");

    parser.match_expect(TokenKind::Digit, Targets::both(ctx).bind(variable), FailPolicy::Raise)?;

    if parser.match_expect(TokenKind::IntOp, Targets::both(ctx), FailPolicy::Soft)? {
        parse_expr(parser, ctx, None)?;
    }

    Ok(())
}

/// `StringExpr ::= string`
pub fn parse_string_expr(
    parser: &mut Parser,
    ctx: BuildContext,
    variable: Option<NodeId>,
) -> Result<(), Error> {
    parser.info("  Parsing string expression...");

    parser.match_expect(TokenKind::String, Targets::both(ctx).bind(variable), FailPolicy::Raise)?;

    Ok(())
}

/// `BooleanExpr ::= ( Expr boolop Expr ) | boolval`
pub fn parse_boolean_expr(
    parser: &mut Parser,
    ctx: BuildContext,
    variable: Option<NodeId>,
) -> Result<(), Error> {
    parser.info("  Parsing boolean expression...");

    let boolean = parser.open_production(ctx, "BooleanExpr");

    if parser.match_any(&[TokenKind::OpenParen]) {
        parser.match_expect(TokenKind::OpenParen, Targets::cst(boolean.cst), FailPolicy::Raise)?;
        parse_expr(parser, boolean, variable)?;
        parser.match_expect(TokenKind::BoolOp, Targets::both(boolean), FailPolicy::Raise)?;
        parse_expr(parser, boolean, variable)?;
        parser.match_expect(TokenKind::CloseParen, Targets::cst(boolean.cst), FailPolicy::Raise)?;
    } else {
        parser.match_expect(
            TokenKind::BoolVal,
            Targets::both(boolean).bind(variable),
            FailPolicy::Raise,
        )?;
    }

    Ok(())
}

/// `Id ::= char`
pub fn parse_id(
    parser: &mut Parser,
    ctx: BuildContext,
    variable: Option<NodeId>,
) -> Result<(), Error> {
    parser.info("  Parsing identifier...");

    parser.match_expect(TokenKind::Char, Targets::both(ctx).bind(variable), FailPolicy::Raise)?;

    Ok(())
}
