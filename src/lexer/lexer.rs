use crate::{
    config::config::Configuration,
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    grammar::{Grammar, GRAMMAR},
    tokens::Token,
};

/// Single pass scanner over one source text.
pub struct Lexer<'a> {
    grammar: &'a Grammar,
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    config: Configuration,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: &Configuration) -> Lexer<'a> {
        Lexer::with_grammar(source, &GRAMMAR, config)
    }

    pub fn with_grammar(source: &'a str, grammar: &'a Grammar, config: &Configuration) -> Lexer<'a> {
        Lexer {
            grammar,
            tokens: vec![],
            source,
            pos: 0,
            config: config.clone(),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position::from_offset(self.source, self.pos)
    }

    /// Runs the scan to the end of the source.
    ///
    /// Characters no rule matches are dropped, unless the configuration asks
    /// for strict scanning, in which case the first one is reported.
    pub fn lex(mut self) -> Result<Vec<Token>, Error> {
        self.config.logger().info("Tokenizing...");

        while let Some(current) = self.at() {
            if current.is_whitespace() {
                self.advance_n(current.len_utf8());
                continue;
            }

            match self.grammar.first_match(self.remainder()) {
                Some((kind, lexeme)) => {
                    let token = MK_TOKEN!(kind, lexeme.to_string(), self.position());
                    self.advance_n(lexeme.len());
                    self.push(token);
                }
                None if self.config.strict => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token: current.to_string() },
                        self.position(),
                    ));
                }
                None => self.advance_n(current.len_utf8()),
            }
        }

        self.config
            .logger()
            .info(&format!("Found {} tokens.", self.tokens.len()));

        Ok(self.tokens)
    }
}

pub fn tokenize(source: &str, config: &Configuration) -> Result<Vec<Token>, Error> {
    Lexer::new(source, config).lex()
}
