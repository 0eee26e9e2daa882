//! Core traits for accounts and withdrawal rules
//!
//! This module defines the contracts that concrete accounts and balance
//! policies implement, so a caller can swap either side independently.

use crate::types::AccountError;
use rust_decimal::Decimal;

/// Trait for an account holding a single-currency balance
///
/// Mutation only happens through [`Account::add`] and
/// [`Account::withdraw_and_report_balance`]. A failed call leaves the
/// balance exactly as it was.
pub trait Account {
    /// Add money to the account
    ///
    /// `amount` must be present and strictly positive.
    fn add(&mut self, amount: Option<Decimal>) -> Result<(), AccountError>;

    /// Withdraw money and return the remaining balance
    ///
    /// `amount` must be present and strictly positive and `rule` must be
    /// present. The rule is asked whether the balance after the withdrawal
    /// is allowed before anything is committed.
    fn withdraw_and_report_balance(
        &mut self,
        amount: Option<Decimal>,
        rule: Option<&dyn AccountRule>,
    ) -> Result<Decimal, AccountError>;

    /// Get the current balance
    fn balance(&self) -> Decimal;
}

/// Trait for deciding which balances a withdrawal may leave behind
///
/// Implementations must be pure functions of the candidate balance.
/// Any `Fn(Decimal) -> bool` closure is a rule.
pub trait AccountRule {
    /// Whether a withdrawal resulting in `resulting_balance` is allowed
    fn withdraw_permitted(&self, resulting_balance: Decimal) -> bool;
}

impl<F> AccountRule for F
where
    F: Fn(Decimal) -> bool,
{
    fn withdraw_permitted(&self, resulting_balance: Decimal) -> bool {
        self(resulting_balance)
    }
}
