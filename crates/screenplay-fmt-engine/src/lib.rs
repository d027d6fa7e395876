pub mod formatting;

// Re-export key types for easier usage
pub use formatting::{
    FormattedPair, classify_document,
    elements::{Block, ElementKind, Segment},
    format_document, format_document_with,
    options::FormatOptions,
    validate::{CheckCoverage, FormatIssue, FormatReport, fix_format_issues, validate_format},
};
