use serde::Serialize;

use super::elements::ElementKind;

/// A single formatting problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatIssue {
    /// 1-based source line the issue refers to.
    pub line: usize,
    /// Kind of the element the line belongs to, when known.
    pub kind: Option<ElementKind>,
    pub message: String,
}

/// How much checking actually produced a [`FormatReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckCoverage {
    /// No checks exist yet; `valid` carries no information.
    NotImplemented,
}

/// Outcome of [`validate_format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub valid: bool,
    pub issues: Vec<FormatIssue>,
    pub coverage: CheckCoverage,
}

/// Reserved extension point for format validation.
///
/// No checks are implemented: the report is always `valid` with no issues,
/// and `coverage` is [`CheckCoverage::NotImplemented`] so callers can tell an
/// unchecked document from a clean one.
pub fn validate_format(text: &str) -> FormatReport {
    log::debug!("validate_format: no checks implemented ({} bytes)", text.len());
    FormatReport {
        valid: true,
        issues: Vec::new(),
        coverage: CheckCoverage::NotImplemented,
    }
}

/// Reserved extension point for repairing reported issues.
///
/// Returns `text` unchanged.
pub fn fix_format_issues(text: &str, issues: &[FormatIssue]) -> String {
    if !issues.is_empty() {
        log::debug!("fix_format_issues: ignoring {} issue(s)", issues.len());
    }
    text.to_string()
}
