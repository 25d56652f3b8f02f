use thiserror::Error;

/// Errors produced while validating or parsing coin change inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coin set is empty")]
    EmptyCoins,
    #[error("coin at position {index} must be positive (found {value})")]
    NonPositiveCoin { index: usize, value: i64 },
    #[error("amount must not be negative (found {0})")]
    NegativeAmount(i64),
    #[error("coin at position {index} does not fit this platform's word size (found {value})")]
    CoinTooLarge { index: usize, value: i64 },
    #[error("amount does not fit this platform's word size (found {0})")]
    AmountTooLarge(i64),
    #[error("table of {rows} x {columns} cells cannot be addressed")]
    TableTooLarge { rows: usize, columns: usize },
    #[error("missing {0}")]
    MissingInput(&'static str),
    #[error("amount {0:?} is not an integer")]
    ParseAmount(String),
}

impl Error {
    /// True for the errors raised by solver precondition checks.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyCoins
                | Error::NonPositiveCoin { .. }
                | Error::NegativeAmount(_)
                | Error::CoinTooLarge { .. }
                | Error::AmountTooLarge(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
