//! CSV format handling for operation records and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Balance output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Maximum number of decimal places accepted for an amount
///
/// Balances are written with exactly this many places, so every balance
/// reachable from accepted amounts is written without loss.
pub const AMOUNT_SCALE: u32 = 4;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, amount.
/// The amount is optional so that a missing amount reaches the account,
/// which reports it as an invalid argument.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation type string into an OperationType enum
/// - Parses the amount string into a Decimal (if present and not blank)
/// - Rejects amounts with more than four significant decimal places
///
/// Missing amounts are not an error here; they are validated by the account.
///
/// # Returns
///
/// * `Ok(OperationRecord)` - Successfully converted record
/// * `Err(String)` - Unknown operation type, unparsable amount or too many
///   decimal places
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let op_type = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => OperationType::Deposit,
        "withdrawal" => OperationType::Withdrawal,
        _ => return Err(format!("Invalid operation type: '{}'", csv_record.op_type)),
    };

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            let amount = Decimal::from_str(amount_str.trim())
                .map_err(|_| format!("Invalid amount '{}'", amount_str))?;
            // Trailing zeros do not count: 1.50000 is accepted as 1.5
            if amount.normalize().scale() > AMOUNT_SCALE {
                return Err(format!(
                    "Invalid amount '{}': more than {} decimal places",
                    amount_str, AMOUNT_SCALE
                ));
            }
            Some(amount)
        }
        _ => None,
    };

    Ok(OperationRecord { op_type, amount })
}

/// Write the final balance in CSV format
///
/// Writes a `balance` header followed by the balance with [`AMOUNT_SCALE`]
/// decimal places.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_balance_csv(balance: Decimal, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record([format!("{:.*}", AMOUNT_SCALE as usize, balance)])
        .map_err(|e| format!("Failed to write balance record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
