//! Validation diagnostic with structured error information.
//!
//! `ValidationDiagnostic` keeps the validation-specific structure (both paths
//! and the source range) for machine-readable JSON output, and renders a
//! source snippet with ariadne when the document text is available.

use crate::error::{DocumentPath, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use yavl_yaml::SourceInfo;

/// A validation diagnostic with structured error information.
///
/// # Example
///
/// ```ignore
/// let diag = ValidationDiagnostic::from_validation_error(&error);
///
/// // Machine-readable JSON
/// println!("{}", serde_json::to_string_pretty(&diag.to_json())?);
///
/// // Human-readable text with a source snippet
/// eprintln!("{}", diag.to_text(Some(&source)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDiagnostic {
    /// Structured error kind
    pub kind: ValidationErrorKind,

    /// The validation error code (Y-1-xx)
    pub code: String,

    /// Human-readable reason
    pub message: String,

    /// Path through the document, e.g. `[{"type":"Key","value":"servers"},{"type":"Index","value":0}]`
    pub document_path: DocumentPath,

    /// Path through the grammar, e.g. `["map", "servers", "list"]`
    pub grammar_path: Vec<String>,

    pub source_range: Option<SourceRange>,
}

/// Source range with filename and both offset and line/column positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    /// Filename, when the document was read from a file
    pub filename: Option<String>,

    /// Start byte offset in the file
    pub start_offset: usize,

    /// End byte offset in the file
    pub end_offset: usize,

    /// Start line number (1-indexed)
    pub start_line: usize,

    /// Start column number (1-indexed)
    pub start_column: usize,
}

impl From<&SourceInfo> for SourceRange {
    fn from(info: &SourceInfo) -> Self {
        Self {
            filename: info.file.clone(),
            start_offset: info.offset,
            end_offset: info.end_offset(),
            start_line: info.line,
            start_column: info.col,
        }
    }
}

impl ValidationDiagnostic {
    /// Create a new ValidationDiagnostic from a ValidationError
    pub fn from_validation_error(error: &ValidationError) -> Self {
        Self {
            kind: error.kind.clone(),
            code: error.error_code().to_string(),
            message: error.reason(),
            document_path: error.document_path.clone(),
            grammar_path: error.grammar_path.segments().to_vec(),
            source_range: Some(SourceRange::from(&error.location)),
        }
    }

    /// Convert to JSON for machine-readable output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error_kind": &self.kind,
            "code": &self.code,
            "message": &self.message,
            "document_path": &self.document_path,
            "grammar_path": &self.grammar_path,
            "source_range": &self.source_range,
        })
    }

    /// Render for a terminal.
    ///
    /// With `source` the report includes an annotated snippet; without it a
    /// single `file:line:col` line is produced.
    pub fn to_text(&self, source: Option<&str>) -> String {
        if let (Some(source), Some(range)) = (source, &self.source_range)
            && let Some(report) = self.render_ariadne(source, range)
        {
            return report;
        }

        let location = match &self.source_range {
            Some(SourceRange {
                filename: Some(file),
                start_line,
                start_column,
                ..
            }) => format!("{}:{}:{}: ", file, start_line, start_column),
            Some(range) => format!("{}:{}: ", range.start_line, range.start_column),
            None => String::new(),
        };
        format!("{}[{}] {}{}", location, self.code, self.message, self.path_suffix())
    }

    fn path_suffix(&self) -> String {
        if self.document_path.is_empty() {
            return String::new();
        }
        format!(" (at {})", self.document_path)
    }

    fn render_ariadne(&self, source: &str, range: &SourceRange) -> Option<String> {
        use ariadne::{Color, Config, Label, Report, ReportKind, Source};

        let file = range
            .filename
            .clone()
            .unwrap_or_else(|| "<input>".to_string());
        let end = range.end_offset.max(range.start_offset + 1).min(source.len());
        let start = range.start_offset.min(end);

        let report = Report::build(ReportKind::Error, file.clone(), start)
            .with_config(Config::default().with_color(false))
            .with_code(&self.code)
            .with_message(format!("{}{}", self.message, self.path_suffix()))
            .with_label(
                Label::new((file.clone(), start..end))
                    .with_message(format!("grammar: {}", self.grammar_path.join(".")))
                    .with_color(Color::Red),
            )
            .finish();

        let mut output = Vec::new();
        report
            .write((file, Source::from(source)), &mut output)
            .ok()?;
        String::from_utf8(output).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrammarPath;

    fn sample_error() -> ValidationError {
        let mut document_path = DocumentPath::new();
        document_path.push_key("servers");
        document_path.push_index(1);
        let mut grammar_path = GrammarPath::new();
        grammar_path.push("map");
        grammar_path.push("servers");
        grammar_path.push("list");
        ValidationError::new(
            ValidationErrorKind::InvalidEnumValue {
                value: "D".into(),
                allowed: vec!["A".into(), "B".into()],
            },
            grammar_path,
            document_path,
            SourceInfo::new(Some("doc.yaml".into()), 14, 3, 5, 1),
        )
    }

    #[test]
    fn test_json_fields() {
        let diag = ValidationDiagnostic::from_validation_error(&sample_error());
        let json = diag.to_json();
        assert_eq!(json["code"], "Y-1-12");
        assert_eq!(json["error_kind"]["type"], "InvalidEnumValue");
        assert_eq!(json["document_path"][1]["type"], "Index");
        assert_eq!(json["document_path"][1]["value"], 1);
        assert_eq!(json["grammar_path"][2], "list");
        assert_eq!(json["source_range"]["start_line"], 3);
        assert_eq!(json["source_range"]["filename"], "doc.yaml");
    }

    #[test]
    fn test_plain_text() {
        let diag = ValidationDiagnostic::from_validation_error(&sample_error());
        assert_eq!(
            diag.to_text(None),
            "doc.yaml:3:5: [Y-1-12] Value must be one of: A, B, got 'D' (at servers[1])"
        );
    }

    #[test]
    fn test_text_path_matches_document_path_display() {
        let error = sample_error();
        let diag = ValidationDiagnostic::from_validation_error(&error);
        assert_eq!(diag.document_path, error.document_path);
        assert!(diag.to_text(None).ends_with(&format!("(at {})", error.document_path)));

        let mut root_error = error.clone();
        root_error.document_path = DocumentPath::new();
        let diag = ValidationDiagnostic::from_validation_error(&root_error);
        assert!(!diag.to_text(None).contains("(at"));
    }

    #[test]
    fn test_ariadne_text_mentions_code_and_message() {
        let source = "servers:\n  - A\n  - D\n";
        let mut error = sample_error();
        error.location = SourceInfo::new(Some("doc.yaml".into()), 19, 3, 5, 1);
        let diag = ValidationDiagnostic::from_validation_error(&error);
        let text = diag.to_text(Some(source));
        assert!(text.contains("Y-1-12"));
        assert!(text.contains("got 'D'"));
        assert!(text.contains("doc.yaml"));
    }
}
