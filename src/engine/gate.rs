#![forbid(unsafe_code)]

//! Failure gate: turns unsuccessful reports into errors

use crate::engine::document::LintedDocument;
use crate::error::LintError;

/// Passes successful documents through; fails with the relative path otherwise
///
/// # Errors
///
/// Returns `LintError::LintFailed` if the document's report is unsuccessful.
pub fn fail_on_errors(linted: LintedDocument) -> Result<LintedDocument, LintError> {
    if linted.passed() {
        Ok(linted)
    } else {
        Err(LintError::LintFailed {
            path: linted.document.relative_path(),
        })
    }
}

/// Checks a batch, failing on the first unsuccessful document
///
/// # Errors
///
/// Returns `LintError::LintFailed` for the first failing document in order.
pub fn first_failure(documents: &[LintedDocument]) -> Result<(), LintError> {
    match documents.iter().find(|d| !d.passed()) {
        Some(failed) => Err(LintError::LintFailed {
            path: failed.document.relative_path(),
        }),
        None => Ok(()),
    }
}
