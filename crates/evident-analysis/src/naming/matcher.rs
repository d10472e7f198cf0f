//! Multi-variant substring matching.

use aho_corasick::AhoCorasick;

use super::variants::{entity_variants, operation_variants};

/// All spellings of one identifier, compiled into a single automaton so a
/// file body is scanned once per identifier instead of once per variant.
#[derive(Debug, Clone)]
pub struct VariantMatcher {
    name: String,
    variants: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl VariantMatcher {
    /// Build from an explicit variant list. Empty variants are dropped so an
    /// empty identifier never matches.
    pub fn new(name: &str, variants: Vec<String>) -> Self {
        let variants: Vec<String> = variants.into_iter().filter(|v| !v.is_empty()).collect();
        let automaton = if variants.is_empty() {
            None
        } else {
            match AhoCorasick::new(&variants) {
                Ok(ac) => Some(ac),
                Err(e) => {
                    tracing::debug!(name, error = %e, "variant automaton build failed, falling back to substring scan");
                    None
                }
            }
        };
        Self {
            name: name.to_string(),
            variants,
            automaton,
        }
    }

    /// Entity-style spellings of `name`.
    pub fn entity(name: &str) -> Self {
        Self::new(name, entity_variants(name))
    }

    /// Dotted-operation spellings of `name`.
    pub fn operation(name: &str) -> Self {
        Self::new(name, operation_variants(name))
    }

    /// The exact spelling only.
    pub fn literal(name: &str) -> Self {
        Self::new(name, vec![name.to_string()])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// True if any variant occurs in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.automaton {
            Some(ac) => ac.is_match(haystack),
            None => self.variants.iter().any(|v| haystack.contains(v.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_matcher_finds_snake_spelling() {
        let m = VariantMatcher::entity("InvoiceLine");
        assert!(m.is_match("const row = invoice_line[0];"));
        assert!(m.is_match("<invoice-line-table>"));
        assert!(!m.is_match("invoice row"));
    }

    #[test]
    fn test_entity_matcher_finds_readable_words_in_prose() {
        let m = VariantMatcher::entity("Audit Log");
        assert!(m.is_match("// write the audit log entry"));
        assert!(m.is_match("fn append_audit_log() {}"));
        assert!(!m.is_match("// audit the log"));
    }

    #[test]
    fn test_operation_matcher_finds_camel_spelling() {
        let m = VariantMatcher::operation("billing.invoice.create");
        assert!(m.is_match("export async function billingInvoiceCreate() {}"));
        assert!(!m.is_match("createInvoice()"));
    }

    #[test]
    fn test_empty_name_never_matches() {
        let m = VariantMatcher::entity("");
        assert!(m.variants().is_empty());
        assert!(!m.is_match("anything at all"));
    }
}
