//! Tokenizer for rule definition lines
//!
//! Whitespace separates tokens and is otherwise ignored. The characters
//! `( ) | ÷ × → *` are reserved; any maximal run of other non-whitespace
//! characters is a name.

use std::fmt;
use std::iter::FusedIterator;

/// Lexical token of the rule language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `|`
    Or,
    /// `÷`
    Break,
    /// `×`
    NoBreak,
    /// `→`
    Transform,
    /// Reserved character with no meaning in the grammar
    Reserved(char),
    /// Rule or class name, as written
    Name(&'a str),
}

impl Token<'_> {
    fn from_reserved(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            '|' => Some(Token::Or),
            '÷' => Some(Token::Break),
            '×' => Some(Token::NoBreak),
            '→' => Some(Token::Transform),
            '*' => Some(Token::Reserved(ch)),
            _ => None,
        }
    }

    /// Whether the token is one of the three boundary operators
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Break | Token::NoBreak | Token::Transform)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Or => f.write_str("|"),
            Token::Break => f.write_str("÷"),
            Token::NoBreak => f.write_str("×"),
            Token::Transform => f.write_str("→"),
            Token::Reserved(ch) => write!(f, "{ch}"),
            Token::Name(name) => f.write_str(name),
        }
    }
}

#[inline]
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || Token::from_reserved(ch).is_some()
}

/// Iterator over the tokens of one line
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start();
        let ch = self.rest.chars().next()?;

        if let Some(token) = Token::from_reserved(ch) {
            self.rest = &self.rest[ch.len_utf8()..];
            return Some(token);
        }

        let end = self.rest.find(is_delimiter).unwrap_or(self.rest.len());
        let (name, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Name(name))
    }
}

impl FusedIterator for Tokenizer<'_> {}
