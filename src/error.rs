use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Login key and PIN did not match an account.
    /// Unknown keys and wrong PINs both map here.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Action requires a logged in account.
    #[error("no account is logged in")]
    NotAuthenticated,

    /// Session deadline has passed.
    #[error("session expired")]
    SessionExpired,

    /// Login key does not belong to any open account.
    #[error("account `{0}` not found")]
    AccountNotFound(String),

    /// Another open account already derives the same login key.
    #[error("login key `{0}` is already in use")]
    DuplicateLoginKey(String),

    /// Amounts must be strictly positive and finite.
    #[error("invalid amount {0}")]
    InvalidAmount(f64),

    /// Transfer source and destination are the same account.
    #[error("cannot transfer to the same account")]
    SelfTransfer,

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// No movement reaches 10% of the requested loan.
    #[error("loan of {0} denied")]
    LoanDenied(f64),

    /// Input record is missing a field its action requires.
    #[error("malformed {0} record")]
    Malformed(&'static str),
}
