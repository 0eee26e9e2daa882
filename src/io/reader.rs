//! Streaming CSV reader for operation records
//!
//! Provides an iterator over operation records from a CSV file, delegating
//! format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator,
//!   prefixed with the line number they came from
//!
//! ```no_run
//! use rule_checked_account::io::reader::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::OperationRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over operation records
///
/// Reads one row at a time; the whole file is never held in memory.
/// Error messages carry the physical line a row starts on, so rows with
/// quoted multi-line fields do not shift the numbering of later rows.
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl OperationReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and accepts rows
    /// without the trailing amount column.
    ///
    /// # Returns
    ///
    /// * `Ok(OperationReader)` if the file opened and its header was read
    /// * `Err(String)` if the file could not be opened or the header is unreadable
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| format!("Failed to read CSV header of '{}': {}", path.display(), e))?
            .clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                Some(
                    self.record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(|e| format!("Line {}: CSV parse error: {}", line, e))
                        .and_then(|csv_record| {
                            convert_csv_record(csv_record)
                                .map_err(|e| format!("Line {}: {}", line, e))
                        }),
                )
            }
            Err(e) => {
                let line = e.position().map_or(0, |pos| pos.line());
                Some(Err(format!("Line {}: CSV parse error: {}", line, e)))
            }
        }
    }
}
