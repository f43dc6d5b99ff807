use crate::convert::OutputFormat;
use crate::tokenizer::TokenCounter;

/// Preview truncation differs between the two tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStyle {
    /// 120 characters, newlines collapsed to spaces when truncation happens.
    Flattened,
    /// 100 characters, text kept verbatim.
    Optimized,
}

impl PreviewStyle {
    fn cutoff(self) -> usize {
        match self {
            PreviewStyle::Flattened => 120,
            PreviewStyle::Optimized => 100,
        }
    }

    /// Console preview of `text`: unchanged when it fits, otherwise cut at
    /// the style's length with a `...` marker.
    pub fn preview(self, text: &str) -> String {
        let cutoff = self.cutoff();
        if text.chars().count() <= cutoff {
            return text.to_string();
        }
        let head: String = text.chars().take(cutoff).collect();
        let head = match self {
            PreviewStyle::Flattened => head.replace('\n', " "),
            PreviewStyle::Optimized => head,
        };
        format!("{head}...")
    }
}

/// Token accounting for one conversion.
///
/// `tokens_saved` is signed: a conversion that inflates the text produces a
/// negative saving and a negative percentage. `percent_saved` is zero when
/// the input counted zero tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsReport {
    pub tokens_before: usize,
    pub tokens_after: usize,
    pub tokens_saved: i64,
    pub percent_saved: f64,
    pub preview: String,
}

/// Counts `original` and `transformed` and assembles the report.
pub fn compare(
    counter: &TokenCounter,
    original: &str,
    transformed: &str,
    style: PreviewStyle,
) -> SavingsReport {
    let tokens_before = counter.count(original);
    let tokens_after = counter.count(transformed);
    let tokens_saved = tokens_before as i64 - tokens_after as i64;
    let percent_saved = if tokens_before == 0 {
        0.0
    } else {
        tokens_saved as f64 / tokens_before as f64 * 100.0
    };
    SavingsReport {
        tokens_before,
        tokens_after,
        tokens_saved,
        percent_saved,
        preview: style.preview(transformed),
    }
}

/// Which console block a report renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Flattening,
    Optimization(OutputFormat),
}

impl ReportKind {
    fn label_width(self) -> usize {
        match self {
            ReportKind::Flattening => 16,
            ReportKind::Optimization(_) => 14,
        }
    }

    /// Confirmation line printed after a successful write.
    pub fn saved_line(self, path: &str) -> String {
        let width = self.label_width();
        match self {
            ReportKind::Flattening => format!("{:<width$}: {path}", "Output file"),
            ReportKind::Optimization(_) => format!("{:<width$}: {path}", "Saved to"),
        }
    }
}

impl SavingsReport {
    /// Renders the console block for this report. `decorated` adds the
    /// 40-column rule under the header; plain output keeps only the labeled
    /// lines so piped consumers see one record per line.
    pub fn render(&self, kind: ReportKind, file_name: &str, decorated: bool) -> String {
        let width = kind.label_width();
        let mut lines: Vec<String> = Vec::new();
        match kind {
            ReportKind::Flattening => {
                lines.push(format!("Flattening: {file_name}"));
                if decorated {
                    lines.push("=".repeat(40));
                }
                lines.push(format!("{:<width$}: {}", "Original tokens", self.tokens_before));
                lines.push(format!("{:<width$}: {}", "Compact tokens", self.tokens_after));
                lines.push(format!(
                    "{:<width$}: {} ({:.1}%)",
                    "Net gain", self.tokens_saved, self.percent_saved
                ));
                lines.push(format!("{:<width$}: {}", "Result preview", self.preview));
            }
            ReportKind::Optimization(format) => {
                lines.push(format!("Processing: {file_name}"));
                if decorated {
                    lines.push("-".repeat(40));
                }
                lines.push(format!("{:<width$}: {}", "Target format", format.label()));
                lines.push(format!("{:<width$}: {}", "Tokens before", self.tokens_before));
                lines.push(format!("{:<width$}: {}", "Tokens after", self.tokens_after));
                lines.push(format!(
                    "{:<width$}: {} tokens ({:.2}%)",
                    "Savings", self.tokens_saved, self.percent_saved
                ));
                lines.push(format!("{:<width$}: {}", "Preview", self.preview));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the heuristic counter makes token arithmetic exact: 4 chars per token
    fn counter() -> TokenCounter {
        TokenCounter::approximate()
    }

    #[test]
    fn savings_are_computed_from_both_texts() {
        let original = "x".repeat(400);
        let transformed = "y".repeat(240);
        let report = compare(&counter(), &original, &transformed, PreviewStyle::Optimized);
        assert_eq!(report.tokens_before, 100);
        assert_eq!(report.tokens_after, 60);
        assert_eq!(report.tokens_saved, 40);
        assert!((report.percent_saved - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zero_token_input_reports_zero_percent() {
        let report = compare(&counter(), "", "", PreviewStyle::Flattened);
        assert_eq!(report.tokens_before, 0);
        assert_eq!(report.tokens_saved, 0);
        assert_eq!(report.percent_saved, 0.0);
    }

    #[test]
    fn inflation_reports_negative_savings() {
        let original = "x".repeat(40);
        let transformed = "y".repeat(80);
        let report = compare(&counter(), &original, &transformed, PreviewStyle::Optimized);
        assert_eq!(report.tokens_saved, -10);
        assert!(report.percent_saved < 0.0);
    }

    #[test]
    fn short_previews_pass_through() {
        let text = "a:1, b:[2, 3]";
        assert_eq!(PreviewStyle::Flattened.preview(text), text);
        assert_eq!(PreviewStyle::Optimized.preview(text), text);
    }

    #[test]
    fn preview_at_exact_cutoff_is_untouched() {
        let text = "x".repeat(120);
        assert_eq!(PreviewStyle::Flattened.preview(&text), text);
        let text = "y".repeat(100);
        assert_eq!(PreviewStyle::Optimized.preview(&text), text);
    }

    #[test]
    fn flattened_preview_collapses_newlines_only_when_truncating() {
        let mut long = "a\nb".to_string();
        long.push_str(&"x".repeat(130));
        let preview = PreviewStyle::Flattened.preview(&long);
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.starts_with("a b"));
        assert!(preview.ends_with("..."));

        let short = "a\nb";
        assert_eq!(PreviewStyle::Flattened.preview(short), "a\nb");
    }

    #[test]
    fn optimized_preview_keeps_newlines() {
        let mut long = "a\nb".to_string();
        long.push_str(&"x".repeat(110));
        let preview = PreviewStyle::Optimized.preview(&long);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.starts_with("a\nb"));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(101);
        let preview = PreviewStyle::Optimized.preview(&text);
        assert_eq!(preview.chars().count(), 103);
    }

    #[test]
    fn flattening_block_layout() {
        let original = "x".repeat(400);
        let transformed = "y".repeat(240);
        let report = compare(&counter(), &original, &transformed, PreviewStyle::Flattened);
        let block = report.render(ReportKind::Flattening, "data.json", true);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "Flattening: data.json");
        assert_eq!(lines[1], "=".repeat(40));
        assert_eq!(lines[2], "Original tokens : 100");
        assert_eq!(lines[3], "Compact tokens  : 60");
        assert_eq!(lines[4], "Net gain        : 40 (40.0%)");
        assert!(lines[5].starts_with("Result preview  : "));
    }

    #[test]
    fn optimization_block_layout() {
        let original = "x".repeat(400);
        let transformed = "y".repeat(240);
        let report = compare(&counter(), &original, &transformed, PreviewStyle::Optimized);
        let block = report.render(
            ReportKind::Optimization(OutputFormat::FlowYaml),
            "data.json",
            true,
        );
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "Processing: data.json");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "Target format : YAML");
        assert_eq!(lines[3], "Tokens before : 100");
        assert_eq!(lines[4], "Tokens after  : 60");
        assert_eq!(lines[5], "Savings       : 40 tokens (40.00%)");
        assert!(lines[6].starts_with("Preview       : "));
    }

    #[test]
    fn plain_rendering_drops_the_rule() {
        let report = compare(&counter(), "abcd", "ab", PreviewStyle::Flattened);
        let block = report.render(ReportKind::Flattening, "data.json", false);
        assert!(!block.contains("===="));
        assert!(block.lines().count() == 5);
    }

    #[test]
    fn saved_line_matches_block_alignment() {
        assert_eq!(
            ReportKind::Flattening.saved_line("out_flat.txt"),
            "Output file     : out_flat.txt"
        );
        assert_eq!(
            ReportKind::Optimization(OutputFormat::MinifiedJson).saved_line("out_opt.min.json"),
            "Saved to      : out_opt.min.json"
        );
    }
}
