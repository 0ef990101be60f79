//! Unit tests for the lexer module.
//!
//! Covers keywords, identifiers, literals, operators, position tracking,
//! grammar priority and the handling of unrecognised characters.

use std::sync::Arc;

use crate::config::{config::Configuration, logger::RecordingLogger};
use crate::Position;

use super::{
    grammar::{Grammar, GRAMMAR},
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).iter().map(|token| token.kind).collect()
}

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source, &Configuration::default()).unwrap()
}

#[test]
fn test_tokenize_braces_and_end_marker() {
    assert_eq!(
        kinds("{ } $"),
        vec![TokenKind::BlockBegin, TokenKind::BlockEnd, TokenKind::ProgramEnd]
    );
}

#[test]
fn test_tokenize_parentheses() {
    assert_eq!(kinds("( )"), vec![TokenKind::OpenParen, TokenKind::CloseParen]);
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("print while if int string boolean"),
        vec![
            TokenKind::Print,
            TokenKind::While,
            TokenKind::If,
            TokenKind::Type,
            TokenKind::Type,
            TokenKind::Type,
        ]
    );
}

#[test]
fn test_tokenize_literals() {
    let tokens = tokens(r#"7 "hello world" true false"#);

    assert_eq!(tokens[0].kind, TokenKind::Digit);
    assert_eq!(tokens[0].lexeme, "7");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "\"hello world\"");
    assert_eq!(tokens[2].kind, TokenKind::BoolVal);
    assert_eq!(tokens[2].lexeme, "true");
    assert_eq!(tokens[3].kind, TokenKind::BoolVal);
    assert_eq!(tokens[3].lexeme, "false");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_digits_one_at_a_time() {
    let tokens = tokens("42");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "4");
    assert_eq!(tokens[1].lexeme, "2");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokens("a = b");

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Char);
    assert_eq!(tokens[2].lexeme, "b");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokens("+ == != =");

    assert_eq!(tokens[0].kind, TokenKind::IntOp);
    assert_eq!(tokens[1].kind, TokenKind::BoolOp);
    assert_eq!(tokens[1].lexeme, "==");
    assert_eq!(tokens[2].kind, TokenKind::BoolOp);
    assert_eq!(tokens[2].lexeme, "!=");
    assert_eq!(tokens[3].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].lexeme, "=");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_assignment_without_spaces() {
    assert_eq!(
        kinds("a=1"),
        vec![TokenKind::Char, TokenKind::Assignment, TokenKind::Digit]
    );
    assert_eq!(
        kinds("(a==b)"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Char,
            TokenKind::BoolOp,
            TokenKind::Char,
            TokenKind::CloseParen,
        ]
    );
}

#[test]
fn test_run_on_words_are_not_keywords() {
    // `int` runs into `a`, so only the final letter before `=` is a token.
    assert_eq!(
        kinds("{inta=1}$"),
        vec![
            TokenKind::BlockBegin,
            TokenKind::Char,
            TokenKind::Assignment,
            TokenKind::Digit,
            TokenKind::BlockEnd,
            TokenKind::ProgramEnd,
        ]
    );
}

#[test]
fn test_tokenize_whitespace_only() {
    assert!(tokens(" \n\t  \r\n").is_empty());
    assert!(tokens("").is_empty());
}

#[test]
fn test_unrecognised_characters_are_dropped() {
    assert_eq!(
        kinds("{ @ # }"),
        vec![TokenKind::BlockBegin, TokenKind::BlockEnd]
    );
    assert_eq!(kinds("{ é }"), vec![TokenKind::BlockBegin, TokenKind::BlockEnd]);
}

#[test]
fn test_strict_mode_reports_unrecognised_character() {
    let config = Configuration::default().strict(true);
    let error = tokenize("{\n  @ }", &config).unwrap_err();

    assert_eq!(error.get_error_name(), "LexerError");
    assert_eq!(*error.get_position(), Position::new(2, 3));
}

#[test]
fn test_positions_single_line() {
    let tokens = tokens("{ int a }");
    let columns = tokens.iter().map(|t| t.column()).collect::<Vec<_>>();

    assert!(tokens.iter().all(|t| t.line() == 1));
    assert_eq!(columns, vec![0, 2, 6, 8]);
}

#[test]
fn test_positions_across_lines() {
    let tokens = tokens("a\nb");

    assert_eq!(tokens[0].position, Position::new(1, 0));
    assert_eq!(tokens[1].position, Position::new(2, 1));
}

#[test]
fn test_positions_after_indentation() {
    let tokens = tokens("{\n  print(\"hi\")\n}$");

    assert_eq!(tokens[1].kind, TokenKind::Print);
    assert_eq!(tokens[1].position, Position::new(2, 3));
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].position, Position::new(2, 9));
    assert_eq!(tokens[5].position, Position::new(3, 1));
}

#[test]
fn test_default_grammar_order() {
    let order = GRAMMAR.rules().iter().map(|rule| rule.kind()).collect::<Vec<_>>();

    assert_eq!(
        order,
        vec![
            TokenKind::BlockBegin,
            TokenKind::BlockEnd,
            TokenKind::ProgramEnd,
            TokenKind::Print,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Assignment,
            TokenKind::Type,
            TokenKind::Char,
            TokenKind::Digit,
            TokenKind::String,
            TokenKind::BoolVal,
            TokenKind::While,
            TokenKind::If,
            TokenKind::IntOp,
            TokenKind::BoolOp,
        ]
    );
}

#[test]
fn test_first_match_beats_longest_match() {
    let grammar = Grammar::new(&[(TokenKind::Char, "a"), (TokenKind::Type, "ab")]).unwrap();
    let config = Configuration::default();
    let tokens = Lexer::with_grammar("ab", &grammar, &config).lex().unwrap();

    // `b` matches nothing and is dropped.
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].lexeme, "a");
}

#[test]
fn test_first_match_prefers_earlier_rule() {
    let grammar = Grammar::new(&[(TokenKind::Type, "ab"), (TokenKind::Char, "a")]).unwrap();
    let config = Configuration::default();
    let tokens = Lexer::with_grammar("ab a", &grammar, &config).lex().unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[0].lexeme, "ab");
    assert_eq!(tokens[1].kind, TokenKind::Char);
}

#[test]
fn test_invalid_grammar_pattern() {
    assert!(Grammar::new(&[(TokenKind::Digit, "[0-9")]).is_err());
}

#[test]
fn test_lexer_logs_progress() {
    let logger = Arc::new(RecordingLogger::new());
    let config = Configuration::default().with_logger(logger.clone());

    tokenize("{ }", &config).unwrap();

    assert_eq!(
        logger.infos(),
        vec!["Tokenizing...".to_string(), "Found 2 tokens.".to_string()]
    );
}
