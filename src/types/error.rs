//! Error types for rule-checked accounts
//!
//! This module defines the errors an account operation can return.
//! Every error is returned before the balance is touched, so a failed
//! operation never leaves a partially applied mutation behind.
//!
//! # Error Categories
//!
//! - **Invalid arguments**: absent or non-positive amounts, missing rule
//! - **Illegal balances**: the rule rejected the resulting balance, or the
//!   resulting balance cannot be represented

use super::amount::{display_amount, display_decimal};
use rust_decimal::Decimal;
use thiserror::Error;

/// Name of the amount argument of a deposit, as reported in error messages
pub const ADDED_AMOUNT: &str = "addedAmount";

/// Name of the amount argument of a withdrawal, as reported in error messages
pub const WITHDRAWN_AMOUNT: &str = "withdrawnAmount";

/// Broad classification of an [`AccountError`]
///
/// Callers that only care whether they passed bad input or hit a policy
/// limit can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot accept
    InvalidArgument,
    /// The operation would leave the account in a balance it may not hold
    IllegalBalance,
}

/// Main error type for account operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Amount is absent, zero or negative
    ///
    /// `amount` is `None` when the caller supplied no amount at all, which
    /// renders as `null` rather than as a number.
    #[error("Illegal {argument} argument: {}", display_amount(amount))]
    InvalidAmount {
        /// Name of the rejected argument
        argument: &'static str,
        /// The rejected value
        amount: Option<Decimal>,
    },

    /// No rule was supplied to a withdrawal
    #[error("Account rule argument must be not null")]
    MissingRule,

    /// The rule rejected the balance a withdrawal would produce
    #[error("Illegal account balance: {}", display_decimal(balance))]
    IllegalBalance {
        /// The rejected candidate balance
        balance: Decimal,
    },

    /// The resulting balance does not fit in a `Decimal`
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl AccountError {
    /// Create an InvalidAmount error for a deposit
    pub fn invalid_added_amount(amount: Option<Decimal>) -> Self {
        AccountError::InvalidAmount {
            argument: ADDED_AMOUNT,
            amount,
        }
    }

    /// Create an InvalidAmount error for a withdrawal
    pub fn invalid_withdrawn_amount(amount: Option<Decimal>) -> Self {
        AccountError::InvalidAmount {
            argument: WITHDRAWN_AMOUNT,
            amount,
        }
    }

    /// Create a MissingRule error
    pub fn missing_rule() -> Self {
        AccountError::MissingRule
    }

    /// Create an IllegalBalance error
    pub fn illegal_balance(balance: Decimal) -> Self {
        AccountError::IllegalBalance { balance }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Classify this error
    ///
    /// Overflow counts as an illegal balance: the arguments were well formed,
    /// but the balance they lead to cannot be held.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidAmount { .. } | AccountError::MissingRule => {
                ErrorKind::InvalidArgument
            }
            AccountError::IllegalBalance { .. } | AccountError::ArithmeticOverflow { .. } => {
                ErrorKind::IllegalBalance
            }
        }
    }

    /// Whether this error was caused by a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Whether this error was caused by a rejected balance
    pub fn is_illegal_balance(&self) -> bool {
        self.kind() == ErrorKind::IllegalBalance
    }
}
