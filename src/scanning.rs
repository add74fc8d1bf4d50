use crate::error_handling::*;
use log::trace;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    number, plus, minus, multiply, divide, end_of_input
}

impl TokenKind {
    pub fn from_symbol(character: char) -> Option<Self> {
        use TokenKind::*;
        match character {
            '+' => Some(plus),
            '-' => Some(minus),
            '*' => Some(multiply),
            '/' => Some(divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        use TokenKind::*;
        match self {
            plus => Some('+'),
            minus => Some('-'),
            multiply => Some('*'),
            divide => Some('/'),
            number | end_of_input => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (_, Some(symbol)) => write!(f, "'{symbol}'"),
            (TokenKind::number, None) => write!(f, "number"),
            (_, None) => write!(f, "end of input"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: String, kind: TokenKind) -> Self {
        Self{content, kind}
    }

    pub fn number(digits: impl Into<String>) -> Self {
        Self::new(digits.into(), TokenKind::number)
    }

    pub fn operator(symbol: char) -> Option<Self> {
        TokenKind::from_symbol(symbol).map(|kind| Self::new(symbol.into(), kind))
    }

    pub fn end_of_input() -> Self {
        Self::new(String::new(), TokenKind::end_of_input)
    }
}

pub trait Scanner {
    fn next_token(&mut self) -> Result<Token>;
}

pub struct SimpleScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl SimpleScanner {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self{tokens, index: 0}
    }
}

impl Scanner for SimpleScanner {
    fn next_token(&mut self) -> Result<Token> {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                Ok(token.clone())
            },
            None => Ok(Token::end_of_input()),
        }
    }
}

pub struct StringScanner {
    string: String,
    index: usize,
}

fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

fn is_space(character: char) -> bool {
    character == ' '
}

impl StringScanner {
    pub fn new(string: impl Into<String>) -> Self {
        Self{string: string.into(), index: 0}
    }

    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|c| predicate(*c))
            .map(char::len_utf8)
            .sum()
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    fn skip_spaces(&mut self) {
        let count = self.count(is_space);
        self.index += count;
    }

    fn get_number(&self) -> Token {
        let count = self.count(is_digit);
        Token::number(&self.string[self.index..(self.index + count)])
    }

    fn get_token(&self) -> Result<Token> {
        match self.view().chars().next() {
            None => Ok(Token::end_of_input()),
            Some(character) if is_digit(character) => Ok(self.get_number()),
            Some(character) => Token::operator(character)
                .ok_or(CalcError::undefined_token(character)),
        }
    }
}

impl Scanner for StringScanner {
    fn next_token(&mut self) -> Result<Token> {
        self.skip_spaces();
        let token = self.get_token()?;
        self.index += token.content.len();
        trace!("scanned {} {:?} at {}", token.kind, token.content, self.index);
        Ok(token)
    }
}
