//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PRODUCTION!` - Creates a production payload for a tree node
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched text
/// * `$position` - The source position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Digit, String::from("4"), Position::new(1, 3));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates a `Payload::Production` labelled with a grammar rule name.
///
/// # Example
///
/// ```ignore
/// let id = tree.append_child(parent, MK_PRODUCTION!("Block"));
/// ```
#[macro_export]
macro_rules! MK_PRODUCTION {
    ($label:expr) => {
        $crate::tree::node::Payload::Production($crate::tree::node::Production::new($label))
    };
}
