use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::convert::{self, OutputFormat};
use crate::error::{LeanJsonError, Result};
use crate::flatten;
use crate::report::{self, PreviewStyle, ReportKind};
use crate::tokenizer::TokenCounter;

/// The two conversions the tools perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Minimal-punctuation text, saved as `{stem}_flat.txt`.
    Flatten,
    /// Syntax-preserving re-encoding, saved as `{stem}_opt{ext}`.
    Optimize(OutputFormat),
}

impl Conversion {
    fn apply(self, value: &Value) -> Result<String> {
        match self {
            Conversion::Flatten => flatten::flatten(value),
            Conversion::Optimize(format) => convert::convert(value, format),
        }
    }

    fn preview_style(self) -> PreviewStyle {
        match self {
            Conversion::Flatten => PreviewStyle::Flattened,
            Conversion::Optimize(_) => PreviewStyle::Optimized,
        }
    }

    fn report_kind(self) -> ReportKind {
        match self {
            Conversion::Flatten => ReportKind::Flattening,
            Conversion::Optimize(format) => ReportKind::Optimization(format),
        }
    }

    /// Derives the output name by replacing the input's final extension
    /// with the conversion's suffix: `data.json` becomes `data_flat.txt`,
    /// `data_opt.min.json` or `data_opt.yaml`.
    pub fn output_path(self, input: &Path) -> PathBuf {
        let name = match input.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => String::new(),
        };
        let name = match self {
            Conversion::Flatten => format!("{name}_flat.txt"),
            Conversion::Optimize(format) => format!("{name}_opt{}", format.extension()),
        };
        input.with_file_name(name)
    }
}

/// Terminal state of one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Converted and reported; output written when requested.
    Success,
    /// Invalid JSON: announced and left alone.
    Skipped,
    /// Read, conversion or write failure.
    Failed,
}

/// Outcome tally for a run. The exit code of both tools derives from it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Success => self.succeeded += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }

    /// True when every selected file converted cleanly.
    pub fn all_clean(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }
}

/// Runs one conversion over one file: read, parse, transform, report on
/// stdout, and persist next to the input when `save` is set.
///
/// Errors never propagate. Invalid JSON is announced on stderr and skipped;
/// any other failure is announced with the file name and recorded as
/// [`FileOutcome::Failed`], so batch runs continue regardless.
pub fn process_file(
    counter: &TokenCounter,
    path: &Path,
    conversion: Conversion,
    save: bool,
    decorated: bool,
) -> FileOutcome {
    match try_process(counter, path, conversion, save, decorated) {
        Ok(()) => FileOutcome::Success,
        Err(err @ LeanJsonError::Syntax { .. }) => {
            eprintln!("{err}");
            FileOutcome::Skipped
        }
        Err(err) => {
            match &err {
                LeanJsonError::Read { .. } | LeanJsonError::Write { .. } => eprintln!("{err}"),
                _ => eprintln!("unexpected error on '{}': {err}", path.display()),
            }
            FileOutcome::Failed
        }
    }
}

fn try_process(
    counter: &TokenCounter,
    path: &Path,
    conversion: Conversion,
    save: bool,
    decorated: bool,
) -> Result<()> {
    let original = fs::read_to_string(path).map_err(|e| LeanJsonError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value: Value = serde_json::from_str(&original).map_err(|e| LeanJsonError::Syntax {
        path: path.to_path_buf(),
        source: e,
    })?;

    let transformed = conversion.apply(&value)?;
    let report = report::compare(counter, &original, &transformed, conversion.preview_style());
    debug!(
        path = %path.display(),
        before = report.tokens_before,
        after = report.tokens_after,
        "converted"
    );

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };
    if decorated {
        println!();
    }
    println!("{}", report.render(conversion.report_kind(), &name, decorated));

    if save {
        let out_path = conversion.output_path(path);
        fs::write(&out_path, &transformed).map_err(|e| LeanJsonError::Write {
            path: out_path.clone(),
            source: e,
        })?;
        println!(
            "{}",
            conversion
                .report_kind()
                .saved_line(&out_path.display().to_string())
        );
    }

    Ok(())
}

/// Runs one conversion over every `*.json` file directly inside `dir`
/// (case-insensitive match, no recursion). Files are processed
/// independently; one bad file never stops the rest.
pub fn process_directory(
    counter: &TokenCounter,
    dir: &Path,
    conversion: Conversion,
    save: bool,
    decorated: bool,
) -> Result<BatchSummary> {
    println!("Scanning directory: {}", dir.display());
    let entries = fs::read_dir(dir).map_err(|e| LeanJsonError::Read {
        path: dir.to_path_buf(),
        source: e,
    })?;

    // Saved outputs land in the scanned directory; the listing is
    // snapshotted before any are written so they are never treated as input.
    let targets: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| has_json_extension(path))
        .collect();

    let mut summary = BatchSummary::default();
    for path in &targets {
        summary.record(process_file(counter, path, conversion, save, decorated));
    }
    Ok(summary)
}

fn has_json_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.to_lowercase().ends_with(".json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_replace_the_final_extension() {
        let flat = Conversion::Flatten;
        assert_eq!(
            flat.output_path(Path::new("data.json")),
            Path::new("data_flat.txt")
        );
        assert_eq!(
            flat.output_path(Path::new("/tmp/a.b.json")),
            Path::new("/tmp/a.b_flat.txt")
        );
        assert_eq!(
            flat.output_path(Path::new("noext")),
            Path::new("noext_flat.txt")
        );
    }

    #[test]
    fn optimizer_output_names_carry_the_format_suffix() {
        let json = Conversion::Optimize(OutputFormat::MinifiedJson);
        let yaml = Conversion::Optimize(OutputFormat::FlowYaml);
        assert_eq!(
            json.output_path(Path::new("config.json")),
            Path::new("config_opt.min.json")
        );
        assert_eq!(
            yaml.output_path(Path::new("config.json")),
            Path::new("config_opt.yaml")
        );
    }

    #[test]
    fn json_extension_match_is_case_insensitive() {
        assert!(has_json_extension(Path::new("a.json")));
        assert!(has_json_extension(Path::new("A.JSON")));
        assert!(has_json_extension(Path::new("weird.JsOn")));
        assert!(!has_json_extension(Path::new("a.jsonl")));
        assert!(!has_json_extension(Path::new("json")));
        assert!(!has_json_extension(Path::new("a.yaml")));
    }

    #[test]
    fn summary_tracks_outcomes() {
        let mut summary = BatchSummary::default();
        summary.record(FileOutcome::Success);
        summary.record(FileOutcome::Success);
        summary.record(FileOutcome::Skipped);
        summary.record(FileOutcome::Failed);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_clean());
        assert!(BatchSummary::default().all_clean());
    }
}
