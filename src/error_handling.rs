use crate::evaluating::Expected;
use crate::scanning::TokenKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("undefined token, '{0}', encountered")]
    undefined_token(char),

    #[error("expected {expected}, found {found}")]
    token_mismatch { expected: Expected, found: TokenKind },

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("division by zero")]
    division_by_zero,

    #[error("could not read input: {0}")]
    input(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
