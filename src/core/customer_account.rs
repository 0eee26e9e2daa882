//! Customer account module
//!
//! This module provides the `CustomerAccount` struct, the single account
//! implementation of the crate. It is responsible for:
//! - Validating deposit and withdrawal arguments
//! - Asking the caller's rule whether a withdrawal may proceed
//! - Committing balance changes only once every check has passed

use crate::core::traits::{Account, AccountRule};
use crate::types::AccountError;
use rust_decimal::Decimal;
use tracing::debug;

/// A customer account holding a single balance
///
/// Created with a zero balance. The balance is only changed through the
/// [`Account`] operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerAccount {
    balance: Decimal,
}

impl CustomerAccount {
    /// Create a new account with a zero balance
    pub fn new() -> Self {
        CustomerAccount {
            balance: Decimal::ZERO,
        }
    }
}

/// Extract an amount that is present and strictly positive
fn positive_amount(amount: Option<Decimal>) -> Option<Decimal> {
    amount.filter(|value| *value > Decimal::ZERO)
}

impl Account for CustomerAccount {
    /// Add money to the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is absent, zero or negative
    /// - Adding the amount would overflow the balance
    fn add(&mut self, amount: Option<Decimal>) -> Result<(), AccountError> {
        let amount =
            positive_amount(amount).ok_or_else(|| AccountError::invalid_added_amount(amount))?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        self.balance = new_balance;
        debug!(%amount, balance = %self.balance, "deposit committed");

        Ok(())
    }

    /// Withdraw money from the account and report the new balance
    ///
    /// Arguments are checked in order: amount first, then rule. The candidate
    /// balance is only committed once the rule has accepted it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is absent, zero or negative
    /// - No rule was supplied
    /// - Subtracting the amount would overflow the balance
    /// - The rule rejects the candidate balance
    fn withdraw_and_report_balance(
        &mut self,
        amount: Option<Decimal>,
        rule: Option<&dyn AccountRule>,
    ) -> Result<Decimal, AccountError> {
        let amount = positive_amount(amount)
            .ok_or_else(|| AccountError::invalid_withdrawn_amount(amount))?;
        let rule = rule.ok_or_else(AccountError::missing_rule)?;

        let candidate = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal"))?;

        if !rule.withdraw_permitted(candidate) {
            debug!(%amount, %candidate, "withdrawal rejected by rule");
            return Err(AccountError::illegal_balance(candidate));
        }

        self.balance = candidate;
        debug!(%amount, balance = %self.balance, "withdrawal committed");

        Ok(self.balance)
    }

    fn balance(&self) -> Decimal {
        self.balance
    }
}
