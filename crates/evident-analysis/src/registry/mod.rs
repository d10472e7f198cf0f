//! Registry loader: tolerant extraction of sections and requirements from
//! a semi-structured registry document.
//!
//! - `types`: Severity, Requirement, Section, Registry
//! - `literal`: recursive-descent scanner for list and string literals
//! - `loader`: marker location, requirement windows, field extraction

pub mod literal;
pub mod loader;
pub mod types;

pub use loader::RegistryLoader;
pub use types::*;
