//! The error enum shared by every fallible operation in the core.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A debit would leave the account below zero
    #[error("Dinero insuficiente")]
    InsufficientFunds,
    /// No registered account lives at the given position in the bank
    #[error("no account registered at position {0}")]
    AccountNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
