//! ID-to-export traceability: does an ID sit in a comment next to an
//! exported declaration?

use evident_core::config::TraceConfig;

/// Line window searched around each ID occurrence.
#[derive(Debug, Clone)]
pub struct TraceWindow {
    pub lookahead: usize,
    pub lookbehind: usize,
    pub export_keywords: Vec<String>,
}

impl From<&TraceConfig> for TraceWindow {
    fn from(config: &TraceConfig) -> Self {
        Self {
            lookahead: config.effective_lookahead(),
            lookbehind: config.effective_lookbehind(),
            export_keywords: config.effective_export_keywords(),
        }
    }
}

impl Default for TraceWindow {
    fn default() -> Self {
        Self::from(&TraceConfig::default())
    }
}

impl TraceWindow {
    /// True if `line` opens an exported declaration (`export const`,
    /// `pub fn`, `pub(crate) struct`, ...).
    pub fn is_export_line(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        self.export_keywords.iter().any(|kw| {
            trimmed
                .strip_prefix(kw.as_str())
                .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace() || c == '('))
        })
    }

    /// 1-based line of the first `id` occurrence that has an exported
    /// declaration within the window.
    pub fn find_traced_line(&self, content: &str, id: &str) -> Option<usize> {
        if !content.contains(id) {
            return None;
        }
        let lines: Vec<&str> = content.lines().collect();
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(id))
            .find(|(idx, _)| {
                let from = idx.saturating_sub(self.lookbehind);
                let to = (idx + self.lookahead).min(lines.len().saturating_sub(1));
                lines[from..=to].iter().any(|l| self.is_export_line(l))
            })
            .map(|(idx, _)| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_line_detection() {
        let w = TraceWindow::default();
        assert!(w.is_export_line("export function issueInvoice() {"));
        assert!(w.is_export_line("    pub fn issue_invoice() {"));
        assert!(w.is_export_line("pub(crate) struct Invoice;"));
        assert!(!w.is_export_line("exported = true;"));
        assert!(!w.is_export_line("// export later"));
    }

    #[test]
    fn test_id_followed_by_export() {
        let w = TraceWindow::default();
        let src = "import x from 'y';\n\n// REQ-BIL-001: issue invoices\nexport function issueInvoice() {}\n";
        assert_eq!(w.find_traced_line(src, "REQ-BIL-001"), Some(3));
    }

    #[test]
    fn test_export_before_id_within_lookbehind() {
        let w = TraceWindow::default();
        let src = "export class InvoiceService {\n  // REQ-BIL-002\n  run() {}\n}\n";
        assert_eq!(w.find_traced_line(src, "REQ-BIL-002"), Some(2));
    }

    #[test]
    fn test_passing_mention_is_not_traced() {
        let w = TraceWindow::default();
        let mut src = String::from("// see REQ-BIL-003 for background\n");
        for _ in 0..10 {
            src.push_str("const filler = 1;\n");
        }
        src.push_str("export const late = 2;\n");
        assert_eq!(w.find_traced_line(&src, "REQ-BIL-003"), None);
    }
}
