//! The grammar table: an ordered list of token patterns.
//!
//! The declaration order is the lexical priority. At any scan position the
//! first rule that matches wins, even when a later rule would match a longer
//! lexeme.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

/// Default table, in priority order.
///
/// Word patterns end on `\b` so that `w` in `while` is never taken as an
/// identifier. A rule may name a `lexeme` group; only that group is consumed
/// and the rest of the match is trailing context (so `=` leaves `==` alone).
pub const DEFAULT_RULES: [(TokenKind, &str); 16] = [
    (TokenKind::BlockBegin, r"\{"),
    (TokenKind::BlockEnd, r"\}"),
    (TokenKind::ProgramEnd, r"\$"),
    (TokenKind::Print, r"print\b"),
    (TokenKind::OpenParen, r"\("),
    (TokenKind::CloseParen, r"\)"),
    (TokenKind::Assignment, r"(?P<lexeme>=)(?:[^=]|$)"),
    (TokenKind::Type, r"(?:int|string|boolean)\b"),
    (TokenKind::Char, r"[a-z]\b"),
    (TokenKind::Digit, r"[0-9]"),
    (TokenKind::String, r#""[a-z ]*""#),
    (TokenKind::BoolVal, r"(?:true|false)\b"),
    (TokenKind::While, r"while\b"),
    (TokenKind::If, r"if\b"),
    (TokenKind::IntOp, r"\+"),
    (TokenKind::BoolOp, r"==|!="),
];

lazy_static! {
    pub static ref GRAMMAR: Grammar =
        Grammar::new(&DEFAULT_RULES).expect("default grammar patterns are valid");
}

#[derive(Debug, Clone)]
pub struct GrammarRule {
    kind: TokenKind,
    regex: Regex,
}

impl GrammarRule {
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(GrammarRule {
            kind,
            regex: Regex::new(&format!("^(?:{})", pattern))?,
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the lexeme this rule matches at the very start of `input`.
    pub fn matches<'a>(&self, input: &'a str) -> Option<&'a str> {
        let captures = self.regex.captures(input)?;
        let lexeme = captures.name("lexeme").or_else(|| captures.get(0))?;

        if lexeme.start() == 0 && !lexeme.as_str().is_empty() {
            Some(lexeme.as_str())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<GrammarRule>,
}

impl Grammar {
    pub fn new(rules: &[(TokenKind, &str)]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|(kind, pattern)| GrammarRule::new(*kind, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grammar { rules })
    }

    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// First rule, in declaration order, matching at the start of `input`.
    pub fn first_match<'a>(&self, input: &'a str) -> Option<(TokenKind, &'a str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.matches(input).map(|lexeme| (rule.kind, lexeme)))
    }
}
