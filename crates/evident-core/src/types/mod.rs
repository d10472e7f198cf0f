//! Shared type re-exports.

pub mod collections;
