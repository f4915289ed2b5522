use thiserror::Error;

/// Errors reported by the change maker.
///
/// An amount that simply cannot be made from the available coins is not an
/// error; the façade reports that as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    #[error("amount must not be negative, got {amount}")]
    NegativeAmount { amount: i64 },

    #[error("denominations must be positive, got {value}")]
    InvalidDenomination { value: i64 },

    #[error("no denominations available to make change for {amount}")]
    EmptyDenominations { amount: usize },

    #[error("amount {amount} exceeds the configured limit of {limit}")]
    AmountTooLarge { amount: usize, limit: usize },

    #[error("amount 0 is rejected by the configured zero-amount policy")]
    ZeroAmount,

    #[error("number of combinations for {amount} does not fit in 64 bits")]
    CountOverflow { amount: usize },

    #[error("could not parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl ChangeError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChangeError>;
