//! Evaluates flat arithmetic expressions such as `5+5-1*2/3` over
//! non-negative integer literals, folding strictly from left to right.

#![allow(nonstandard_style)]

pub mod error_handling;
pub mod evaluating;
pub mod scanning;

pub use error_handling::{CalcError, Result};
pub use evaluating::{evaluate, BinaryOperator, Evaluator, Expected};
pub use scanning::{Scanner, SimpleScanner, StringScanner, Token, TokenKind};
