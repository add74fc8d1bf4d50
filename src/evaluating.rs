use crate::error_handling::*;
use crate::scanning::*;
use log::debug;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub fn call(&self, left: i64, right: i64) -> Result<i64> {
        use BinaryOperator::*;

        match self {
            addition => Ok(left.wrapping_add(right)),
            subtraction => Ok(left.wrapping_sub(right)),
            multiplication => Ok(left.wrapping_mul(right)),
            division if right == 0 => Err(CalcError::division_by_zero),
            division => Ok(left.wrapping_div(right)),
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;

        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = InvalidOperator;

    fn try_from(kind: TokenKind) -> std::result::Result<Self, Self::Error> {
        use BinaryOperator::*;
        match kind {
            TokenKind::plus => Ok(addition),
            TokenKind::minus => Ok(subtraction),
            TokenKind::multiply => Ok(multiplication),
            TokenKind::divide => Ok(division),
            TokenKind::number | TokenKind::end_of_input => Err(InvalidOperator),
        }
    }
}

/// What the grammar wanted at the position where a mismatch happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    kind(TokenKind),
    operator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::kind(kind) => write!(f, "{kind}"),
            Self::operator => write!(f, "an operator"),
        }
    }
}

/// Folds `number (operator number)*` from left to right.
pub struct Evaluator<S: Scanner> {
    scanner: S,
    current: Token,
}

impl<S: Scanner> Evaluator<S> {
    pub fn new(mut scanner: S) -> Result<Self> {
        let current = scanner.next_token()?;
        Ok(Self{scanner, current})
    }

    fn mismatch(&self, expected: Expected) -> CalcError {
        CalcError::token_mismatch{expected, found: self.current.kind}
    }

    pub fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind != kind {
            return Err(self.mismatch(Expected::kind(kind)));
        }
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn number(&mut self) -> Result<i64> {
        let token = self.eat(TokenKind::number)?;
        token.content.parse().map_err(|_| CalcError::invalid_number(token.content))
    }

    fn operator(&mut self) -> Result<BinaryOperator> {
        let kind = self.current.kind;
        let operator = BinaryOperator::try_from(kind)
            .map_err(|_| self.mismatch(Expected::operator))?;
        self.eat(kind)?;
        Ok(operator)
    }

    pub fn run(mut self) -> Result<i64> {
        let mut accumulator = self.number()?;
        while self.current.kind != TokenKind::end_of_input {
            let operator = self.operator()?;
            let operand = self.number()?;
            let result = operator.call(accumulator, operand)?;
            debug!("{accumulator} {operator} {operand} = {result}");
            accumulator = result;
        }
        debug!("evaluated to {accumulator}");
        Ok(accumulator)
    }
}

pub fn evaluate(text: &str) -> Result<String> {
    let value = Evaluator::new(StringScanner::new(text))?.run()?;
    Ok(value.to_string())
}
