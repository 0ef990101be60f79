use std::fmt::Display;

use crate::Position;

/// The token alphabet, listed in lexical priority order.
///
/// The order here matches the order of the default grammar table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    BlockBegin, // {
    BlockEnd,   // }
    ProgramEnd, // $
    Print,
    OpenParen,  // (
    CloseParen, // )
    Assignment, // =
    Type,
    Char, // single-letter identifier
    Digit,
    String,
    BoolVal,
    While,
    If,
    IntOp,  // +
    BoolOp, // == !=
}

impl TokenKind {
    /// Name used when the kind is reported in a diagnostic.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::BlockBegin => "BLOCK_BEGIN",
            TokenKind::BlockEnd => "BLOCK_END",
            TokenKind::ProgramEnd => "PROGRAM_END",
            TokenKind::Print => "PRINT",
            TokenKind::OpenParen => "OPEN_PARENTHESIS",
            TokenKind::CloseParen => "CLOSE_PARENTHESIS",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Type => "TYPE",
            TokenKind::Char => "CHAR",
            TokenKind::Digit => "DIGIT",
            TokenKind::String => "STRING",
            TokenKind::BoolVal => "BOOLVAL",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF_STATEMENT",
            TokenKind::IntOp => "INTOP",
            TokenKind::BoolOp => "BOOLOP",
        }
    }

    /// Literal kinds that give a variable its value.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Digit | TokenKind::String | TokenKind::BoolVal)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [ {} ] on {}", self.kind, self.lexeme, self.position)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
