//! Bulk import of records from pasted delimited text.
//!
//! - parser.rs: text -> validated preview rows
//! - submission.rs: sequential create requests as a stream of per-row events
//! - summary.rs: aggregation of events into notices and the leave decision

pub mod parser;
pub mod submission;
pub mod summary;

pub use parser::{parse_bulk_text, BulkColumn, BulkPreview, BulkRow};
pub use submission::{submit_sequentially, AbortSignal, Progress, RowOutcome, SubmissionEvent};
pub use summary::{run_to_completion, BulkImportSummary};

use super::form_model::FormModel;

/// A form that can be created from one bulk-import row
pub trait BulkImportable: FormModel {
    /// Fixed column order of a pasted line; the first column is the
    /// name/title that decides validity.
    const BULK_COLUMNS: &'static [BulkColumn];

    /// Build a create form from a parsed row
    fn from_bulk_row(row: &BulkRow) -> Self;
}
