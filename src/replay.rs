//! Operation replay
//!
//! Applies a CSV file of deposits and withdrawals to a single account and
//! writes the final balance. This is the pipeline behind the
//! `account-replay` binary:
//! - CSV parsing is delegated to `OperationReader`
//! - Validation and rule checks are delegated to the `Account`
//! - Output is delegated to `csv_format::write_balance_csv`
//!
//! Rows that fail (malformed rows, invalid arguments, rule rejections) are
//! logged and skipped; only fatal I/O errors stop the replay.

use crate::core::{Account, AccountRule, CustomerAccount};
use crate::io::csv_format::write_balance_csv;
use crate::io::reader::OperationReader;
use crate::types::{AccountError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Outcome counts of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Operations committed to the account
    pub applied: usize,
    /// Operations the account refused (invalid argument or illegal balance)
    pub rejected: usize,
    /// Rows that could not be parsed into an operation
    pub skipped: usize,
}

/// Apply a single operation record to an account
///
/// Returns the balance after the operation.
pub fn apply<A: Account + ?Sized>(
    account: &mut A,
    record: &OperationRecord,
    rule: &dyn AccountRule,
) -> Result<Decimal, AccountError> {
    match record.op_type {
        OperationType::Deposit => {
            account.add(record.amount)?;
            Ok(account.balance())
        }
        OperationType::Withdrawal => account.withdraw_and_report_balance(record.amount, Some(rule)),
    }
}

/// Replay every operation from `input_path` against `account`
///
/// # Errors
///
/// Returns an error if the input file cannot be opened. Per-row failures are
/// logged and counted in the summary instead.
pub fn replay_into<A: Account + ?Sized>(
    account: &mut A,
    input_path: &Path,
    rule: &dyn AccountRule,
) -> Result<ReplaySummary, String> {
    let reader = OperationReader::new(input_path)?;
    let mut summary = ReplaySummary::default();

    for result in reader {
        match result {
            Ok(record) => match apply(account, &record, rule) {
                Ok(_) => summary.applied += 1,
                Err(e) => {
                    warn!(operation = ?record.op_type, kind = ?e.kind(), "Operation rejected: {}", e);
                    summary.rejected += 1;
                }
            },
            Err(e) => {
                warn!("CSV parsing error: {}", e);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Replay operations into a fresh customer account and write its final balance
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or the output cannot
/// be written.
pub fn replay(
    input_path: &Path,
    rule: &dyn AccountRule,
    output: &mut dyn Write,
) -> Result<ReplaySummary, String> {
    let mut account = CustomerAccount::new();

    let summary = replay_into(&mut account, input_path, rule)?;
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        skipped = summary.skipped,
        balance = %account.balance(),
        "Replay finished"
    );

    write_balance_csv(account.balance(), output)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CustomerAccountRule, OverdraftAccountRule};
    use rstest::rstest;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[rstest]
    #[case::deposit(OperationType::Deposit, Some(Decimal::TEN), Ok(Decimal::new(110, 0)))]
    #[case::withdrawal(OperationType::Withdrawal, Some(Decimal::TEN), Ok(Decimal::new(90, 0)))]
    #[case::overdrawn(
        OperationType::Withdrawal,
        Some(Decimal::new(101, 0)),
        Err(AccountError::illegal_balance(Decimal::NEGATIVE_ONE))
    )]
    #[case::missing_amount(
        OperationType::Deposit,
        None,
        Err(AccountError::invalid_added_amount(None))
    )]
    fn test_apply(
        #[case] op_type: OperationType,
        #[case] amount: Option<Decimal>,
        #[case] expected: Result<Decimal, AccountError>,
    ) {
        let mut account = CustomerAccount::new();
        account.add(Some(Decimal::ONE_HUNDRED)).unwrap();

        let result = apply(
            &mut account,
            &OperationRecord { op_type, amount },
            &CustomerAccountRule,
        );

        assert_eq!(result, expected);
    }

    #[test]
    fn test_replay_writes_final_balance() {
        let file = create_temp_csv("type,amount\ndeposit,100.0\nwithdrawal,20.0\n");
        let mut output = Vec::new();

        let summary = replay(file.path(), &CustomerAccountRule, &mut output).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 2,
                rejected: 0,
                skipped: 0,
            }
        );
        assert_eq!(String::from_utf8(output).unwrap(), "balance\n80.0000\n");
    }

    #[test]
    fn test_replay_continues_after_rejections() {
        let file = create_temp_csv(
            "type,amount\n\
             withdrawal,20.0\n\
             deposit,-5\n\
             deposit,\n\
             deposit,invalid\n\
             deposit,50\n\
             withdrawal,10\n",
        );
        let mut output = Vec::new();

        let summary = replay(file.path(), &CustomerAccountRule, &mut output).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 2,
                rejected: 3,
                skipped: 1,
            }
        );
        assert_eq!(String::from_utf8(output).unwrap(), "balance\n40.0000\n");
    }

    #[test]
    fn test_replay_skips_amounts_beyond_output_precision() {
        let file = create_temp_csv(
            "type,amount\n\
             deposit,0.00004\n\
             withdrawal,0.00004\n\
             deposit,1.00006\n\
             deposit,1.5\n",
        );
        let mut output = Vec::new();

        let summary = replay(file.path(), &CustomerAccountRule, &mut output).unwrap();

        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.applied, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "balance\n1.5000\n");
    }

    #[test]
    fn test_replay_with_overdraft_rule() {
        let file = create_temp_csv("type,amount\nwithdrawal,30\nwithdrawal,30\n");
        let mut output = Vec::new();
        let rule = OverdraftAccountRule::new(Decimal::new(50, 0));

        let summary = replay(file.path(), &rule, &mut output).unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "balance\n-30.0000\n");
    }

    #[test]
    fn test_replay_into_existing_account() {
        let file = create_temp_csv("type,amount\nwithdrawal,25\n");
        let mut account = CustomerAccount::new();
        account.add(Some(Decimal::new(25, 0))).unwrap();

        let summary = replay_into(&mut account, file.path(), &CustomerAccountRule).unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_replay_handles_missing_file() {
        let mut output = Vec::new();

        let result = replay(Path::new("nonexistent.csv"), &CustomerAccountRule, &mut output);

        assert!(result.unwrap_err().contains("Failed to open file"));
        assert!(output.is_empty());
    }
}
