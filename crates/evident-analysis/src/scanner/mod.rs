//! Corpus index: discovers candidate source files under the configured
//! roots and serves their contents from a per-run cache.
//!
//! - `walker`: recursive discovery with directory exclusions
//! - `cache`: `moka`-backed, fill-once content cache
//! - `corpus`: file classification and scoped lookups

pub mod cache;
pub mod corpus;
pub mod types;
pub mod walker;

pub use cache::ContentCache;
pub use corpus::{Corpus, FileScope};
pub use types::{CorpusFile, CorpusOptions, ScanStats};
pub use walker::discover;
