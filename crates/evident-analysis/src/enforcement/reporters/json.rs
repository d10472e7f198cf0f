//! JSON reporter: gate results for CI consumption.

use serde_json::json;

use crate::enforcement::gates::GateReport;
use crate::ledger::Ledger;

use super::Reporter;

/// JSON reporter for machine-readable gate output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, ledger: &Ledger, gates: Option<&GateReport>) -> Result<String, String> {
        let results = gates.map(|g| g.results.as_slice()).unwrap_or_default();
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                json!({
                    "gate_id": r.gate_id.as_str(),
                    "name": r.name,
                    "status": r.status,
                    "passed": r.passed,
                    "summary": r.summary,
                    "violation_count": r.violations.len(),
                    "violations": r.violations,
                })
            })
            .collect();

        let output = json!({
            "format_version": ledger.format_version,
            "generated_at": ledger.generated_at,
            "gates_run": gates.is_some(),
            "failures": gates.map_or(0, GateReport::failures),
            "warnings": gates.map_or(0, GateReport::warnings),
            "summary": ledger.summary,
            "gates": entries,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
