//! Ledger: the versioned, persisted summary of one run.

pub mod builder;
pub mod types;
pub mod writer;

pub use builder::LedgerBuilder;
pub use types::{Ledger, LedgerSection, LedgerSummary};
pub use writer::write_ledger;
