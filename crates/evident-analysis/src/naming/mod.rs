//! Naming normalizer: canonical identifiers to the surface spellings a
//! text search should look for.

pub mod matcher;
pub mod variants;

pub use matcher::VariantMatcher;
pub use variants::{entity_variants, operation_variants, to_camel_case, to_kebab_case, to_snake_case};
