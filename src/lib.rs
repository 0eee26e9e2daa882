//! Rule-Checked Account Library
//! # Overview
//!
//! This library provides a single-currency account whose withdrawals are
//! checked against a caller-supplied balance policy.
//!
//! # Architecture
//!
//! - [`types`] - Error taxonomy, amount rendering and operation records
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `Account` and `AccountRule` contracts
//!   - [`core::customer_account`] - Argument validation and rule-checked withdrawal
//!   - [`core::rules`] - Shipped withdrawal rules and the rule factory
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - CSV reading of operations and balance output
//! - [`replay`] - Applying a CSV of operations to an account
//!
//! # Withdrawals
//!
//! A withdrawal validates its amount, then its rule, then asks the rule
//! whether the candidate balance (`balance - amount`) is acceptable. The
//! balance is only written once the rule has agreed.
//!
//! ```
//! use rule_checked_account::{Account, CustomerAccount, CustomerAccountRule};
//! use rust_decimal::Decimal;
//!
//! let mut account = CustomerAccount::new();
//! account.add(Some(Decimal::new(100, 0))).unwrap();
//!
//! let balance = account
//!     .withdraw_and_report_balance(Some(Decimal::new(20, 0)), Some(&CustomerAccountRule))
//!     .unwrap();
//! assert_eq!(balance, Decimal::new(80, 0));
//!
//! let error = account
//!     .withdraw_and_report_balance(Some(Decimal::new(100, 0)), Some(&CustomerAccountRule))
//!     .unwrap_err();
//! assert_eq!(error.to_string(), "Illegal account balance: -20.0");
//! assert_eq!(account.balance(), Decimal::new(80, 0));
//! ```
//!
//! # Errors
//!
//! - **Invalid argument**: absent or non-positive amount, missing rule
//! - **Illegal balance**: the rule rejected the candidate balance

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use core::{
    create_rule, Account, AccountRule, CustomerAccount, CustomerAccountRule, OverdraftAccountRule,
};
pub use replay::{replay, ReplaySummary};
pub use types::{AccountError, ErrorKind, OperationRecord, OperationType};
