//! Withdrawal rules
//!
//! Provides the balance policies shipped with the crate and a factory that
//! selects one at runtime:
//! - [`CustomerAccountRule`] forbids any negative balance
//! - [`OverdraftAccountRule`] allows the balance to go negative down to a limit

use crate::cli::RuleType;
use crate::core::traits::AccountRule;
use rust_decimal::Decimal;

/// Default policy for customer accounts
///
/// Permits a withdrawal if and only if the resulting balance is not negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerAccountRule;

impl AccountRule for CustomerAccountRule {
    fn withdraw_permitted(&self, resulting_balance: Decimal) -> bool {
        resulting_balance >= Decimal::ZERO
    }
}

/// Policy for accounts with an authorised overdraft
///
/// Permits a withdrawal if the resulting balance is no lower than minus the
/// overdraft limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverdraftAccountRule {
    limit: Decimal,
}

impl OverdraftAccountRule {
    /// Create a rule allowing an overdraft of `limit`
    ///
    /// The sign of `limit` is ignored: `-50` and `50` both allow the balance
    /// to go down to `-50`.
    pub fn new(limit: Decimal) -> Self {
        OverdraftAccountRule { limit: limit.abs() }
    }

    /// The authorised overdraft, always non-negative
    pub fn limit(&self) -> Decimal {
        self.limit
    }
}

impl AccountRule for OverdraftAccountRule {
    fn withdraw_permitted(&self, resulting_balance: Decimal) -> bool {
        resulting_balance >= -self.limit
    }
}

/// Create a withdrawal rule based on the specified rule type
///
/// # Arguments
///
/// * `rule_type` - The policy to create
/// * `overdraft_limit` - Limit for the overdraft policy (ignored otherwise,
///   zero when absent)
///
/// # Returns
///
/// A boxed trait object implementing the AccountRule trait
pub fn create_rule(rule_type: RuleType, overdraft_limit: Option<Decimal>) -> Box<dyn AccountRule> {
    match rule_type {
        RuleType::Customer => Box::new(CustomerAccountRule),
        RuleType::Overdraft => Box::new(OverdraftAccountRule::new(
            overdraft_limit.unwrap_or_default(),
        )),
    }
}
