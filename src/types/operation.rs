//! Operation types for account replay
//!
//! This module defines the records read from a replay input file.

use rust_decimal::Decimal;

/// Operations that can be replayed against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Credit funds to the account
    Deposit,

    /// Debit funds from the account, subject to the configured rule
    Withdrawal,
}

/// Input operation record
///
/// The amount is optional: an empty amount column is handed to the account
/// as an absent amount, which the account rejects as an invalid argument.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The type of operation
    pub op_type: OperationType,

    /// The amount to deposit or withdraw, if one was given
    pub amount: Option<Decimal>,
}
