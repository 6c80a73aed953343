// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::FoamError;

mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    Ident(String),
    /// Surrounding quotes already stripped.
    String(String),

    // --- structure ---
    DictStart,
    DictEnd,
    ListStart,
    ListEnd,
    /// The `;` entry terminator.
    End,

    // --- layout ---
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(text) | Token::String(text) => write!(f, "{}", text),
            Token::DictStart => write!(f, "{{"),
            Token::DictEnd => write!(f, "}}"),
            Token::ListStart => write!(f, "("),
            Token::ListEnd => write!(f, ")"),
            Token::End => write!(f, ";"),
            Token::Eof => write!(f, "<eof>"),
        }
    }
}

/// A forward-only cursor over the source text. Not restartable: a fresh
/// scan needs a fresh `Lexer`.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Absolute character offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.input[..self.pos].chars().count()
    }

    pub fn next_token(&mut self) -> Result<Token, FoamError> {
        tokenizer::next_token(self)
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }
}
