use crate::{
    errors::{
        errors::{Error, Expected},
        warnings::Warning,
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_boolean_expr, parse_expr, parse_id},
    lookups::{STATEMENT_KINDS, STMT_LOOKUP},
    parser::{BuildContext, FailPolicy, Parser, Targets},
};

/// `Program ::= Block $`
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.info("  Parsing program...");

    let program = parser.set_roots();

    parse_block(parser, program)?;
    parser.match_expect(TokenKind::ProgramEnd, Targets::both(program), FailPolicy::Raise)?;

    Ok(())
}

/// `Block ::= { StatementList }`
///
/// Opens a new scope; the braces only appear in the CST.
pub fn parse_block(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing block...");

    let block = parser.open_scope(ctx, "Block");

    parser.match_expect(TokenKind::BlockBegin, Targets::cst(block.cst), FailPolicy::Raise)?;
    parse_statement_list(parser, block)?;
    parser.match_expect(TokenKind::BlockEnd, Targets::cst(block.cst), FailPolicy::Raise)?;

    Ok(())
}

/// `StatementList ::= Statement StatementList | ε`
///
/// Each non-empty list gets a CST node nested under the previous one; the
/// AST sees the statements directly. The tail is walked iteratively so long
/// blocks do not grow the call stack.
pub fn parse_statement_list(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    let mut list = ctx;

    loop {
        parser.info("  Parsing statement list...");

        if parser.match_any(&STATEMENT_KINDS) {
            list = parser.open_cst_production(list, "StatementList");
            parse_statement(parser, list)?;
        } else if parser.match_any(&[TokenKind::BlockEnd]) {
            return Ok(());
        } else {
            let mut expected = STATEMENT_KINDS.to_vec();
            expected.push(TokenKind::BlockEnd);
            return Err(parser.unexpected(Expected::OneOf(expected)));
        }
    }
}

/// Picks the statement production from the current token alone.
pub fn parse_statement(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing statement...");

    match parser.current_token_kind().and_then(|kind| STMT_LOOKUP.get(&kind)) {
        Some(handler) => handler(parser, ctx),
        None => Err(parser.unexpected(Expected::from(&STATEMENT_KINDS[..]))),
    }
}

/// `PrintStmt ::= print ( Expr )`
pub fn parse_print_stmt(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing print statement...");

    let print = parser.open_production(ctx, "Print");

    parser.match_expect(TokenKind::Print, Targets::cst(print.cst), FailPolicy::Raise)?;
    parser.match_expect(TokenKind::OpenParen, Targets::cst(print.cst), FailPolicy::Raise)?;
    parse_expr(parser, print, None)?;
    parser.match_expect(TokenKind::CloseParen, Targets::cst(print.cst), FailPolicy::Raise)?;

    Ok(())
}

/// `AssignStmt ::= Id = Expr`
///
/// The target is resolved through the scope chain before anything is
/// consumed. An unknown target is only a warning; the statement is still
/// parsed, just without recording anything on a variable.
pub fn parse_assignment_stmt(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing assignment statement...");

    let assignment = parser.open_production(ctx, "Assignment");

    let target = parser.current_token().cloned();
    let variable = target
        .as_ref()
        .and_then(|target| parser.symbol_table().resolve(ctx.scope, &target.lexeme));

    if let (Some(target), None) = (&target, variable) {
        parser.warn(Warning::UninitializedIdentifier {
            name: target.lexeme.clone(),
            position: target.position,
        });
    }

    parse_id(parser, assignment, None)?;
    parser.match_expect(TokenKind::Assignment, Targets::cst(assignment.cst), FailPolicy::Raise)?;
    parse_expr(parser, assignment, variable)
}

/// `VarDecl ::= Type Id`
///
/// Only the current scope is searched for an earlier declaration of the same
/// name, so a declaration in a nested block shadows the outer one.
pub fn parse_var_decl(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing variable declaration...");

    let declaration = parser.open_production(ctx, "VariableDeclaration");

    let existing = parser
        .peek(1)
        .map(|name| name.lexeme.clone())
        .and_then(|name| parser.symbol_table().find_in_scope(ctx.scope, &name));
    let variable = match existing {
        Some(variable) => variable,
        None => parser.symbol_table_mut().declare(ctx.scope),
    };

    parser.match_expect(
        TokenKind::Type,
        Targets::both(declaration).bind(Some(variable)),
        FailPolicy::Raise,
    )?;
    parse_id(parser, declaration, Some(variable))
}

/// `WhileStmt ::= while BooleanExpr Block`
pub fn parse_while_stmt(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing while statement...");

    let while_stmt = parser.open_production(ctx, "WhileStatement");

    parser.match_expect(TokenKind::While, Targets::cst(while_stmt.cst), FailPolicy::Raise)?;
    parse_boolean_expr(parser, while_stmt, None)?;
    parse_block(parser, while_stmt)
}

/// `IfStmt ::= if BooleanExpr Block`
pub fn parse_if_stmt(parser: &mut Parser, ctx: BuildContext) -> Result<(), Error> {
    parser.info("  Parsing if statement...");

    let if_stmt = parser.open_production(ctx, "IfStatement");

    parser.match_expect(TokenKind::If, Targets::cst(if_stmt.cst), FailPolicy::Raise)?;
    parse_boolean_expr(parser, if_stmt, None)?;
    parse_block(parser, if_stmt)
}
