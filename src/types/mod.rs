//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `amount`: Rendering of amounts and balances in messages
//! - `error`: Error types for account operations
//! - `operation`: Operation records read during replay

pub mod amount;
pub mod error;
pub mod operation;

pub use error::{AccountError, ErrorKind};
pub use operation::{OperationRecord, OperationType};
