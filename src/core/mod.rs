//! Core business logic module
//!
//! This module contains the account components:
//! - `traits` - The account and withdrawal rule contracts
//! - `customer_account` - The rule-checked account implementation
//! - `rules` - Shipped withdrawal rules and the rule factory

pub mod customer_account;
pub mod rules;
pub mod traits;

pub use customer_account::CustomerAccount;
pub use rules::{create_rule, CustomerAccountRule, OverdraftAccountRule};
pub use traits::{Account, AccountRule};
