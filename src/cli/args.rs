use crate::core::{create_rule, AccountRule};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay deposits and withdrawals against a rule-checked account
#[derive(Parser, Debug)]
#[command(name = "account-replay")]
#[command(about = "Replay deposits and withdrawals against a rule-checked account", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Withdrawal rule applied to every withdrawal
    #[arg(
        long = "rule",
        value_name = "RULE",
        default_value = "customer",
        help = "Withdrawal rule: 'customer' forbids negative balances, 'overdraft' allows them down to the limit"
    )]
    pub rule: RuleType,

    /// Authorised overdraft (overdraft rule only)
    #[arg(
        long = "overdraft-limit",
        value_name = "AMOUNT",
        help = "Authorised overdraft for the overdraft rule (default: 0)"
    )]
    pub overdraft_limit: Option<Decimal>,
}

/// Available withdrawal rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleType {
    Customer,
    Overdraft,
}

impl CliArgs {
    /// Create the withdrawal rule selected by the CLI arguments
    ///
    /// The overdraft limit is ignored unless the overdraft rule is selected.
    pub fn to_rule(&self) -> Box<dyn AccountRule> {
        create_rule(self.rule, self.overdraft_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_rule(&["program", "input.csv"], RuleType::Customer)]
    #[case::explicit_customer(&["program", "--rule", "customer", "input.csv"], RuleType::Customer)]
    #[case::explicit_overdraft(&["program", "--rule", "overdraft", "input.csv"], RuleType::Overdraft)]
    fn test_rule_parsing(#[case] args: &[&str], #[case] expected: RuleType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.rule, expected);
    }

    #[rstest]
    #[case::no_limit(&["program", "input.csv"], None)]
    #[case::integer_limit(&["program", "--overdraft-limit", "50", "input.csv"], Some(Decimal::new(50, 0)))]
    #[case::fractional_limit(
        &["program", "--rule", "overdraft", "--overdraft-limit", "12.5", "input.csv"],
        Some(Decimal::new(125, 1))
    )]
    fn test_overdraft_limit_parsing(#[case] args: &[&str], #[case] expected: Option<Decimal>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.overdraft_limit, expected);
    }

    #[rstest]
    #[case::customer_ignores_limit(
        &["program", "--overdraft-limit", "50", "input.csv"],
        Decimal::new(-10, 0),
        false
    )]
    #[case::overdraft_within_limit(
        &["program", "--rule", "overdraft", "--overdraft-limit", "50", "input.csv"],
        Decimal::new(-10, 0),
        true
    )]
    #[case::overdraft_without_limit(
        &["program", "--rule", "overdraft", "input.csv"],
        Decimal::new(-10, 0),
        false
    )]
    fn test_to_rule(#[case] args: &[&str], #[case] balance: Decimal, #[case] expected: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_rule().withdraw_permitted(balance), expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_rule(&["program", "--rule", "invalid", "input.csv"])]
    #[case::invalid_limit(&["program", "--overdraft-limit", "lots", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
