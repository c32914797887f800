//! Document storage path rules for PER documents.

use crate::error::CoreError;
use crate::types::DbId;

/// Key prefix under which PER documents are stored.
pub const PER_DOCUMENT_PREFIX: &str = "perdocs";

/// Maximum accepted upload size for a PER document (25 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 25 * 1024 * 1024;

/// Storage key of a PER document: `perdocs/{country_id}/{filename}`.
pub fn nice_document_path(country_id: DbId, filename: &str) -> String {
    format!("{PER_DOCUMENT_PREFIX}/{country_id}/{filename}")
}

/// Reduce an uploaded file name to a safe basename.
///
/// Strips any directory components (both `/` and `\` separators) and
/// rejects names that are empty or consist only of dots.
pub fn sanitize_filename(raw: &str) -> Result<String, CoreError> {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();

    if base.is_empty() || base.chars().all(|c| c == '.') {
        return Err(CoreError::Validation(format!(
            "Invalid document file name '{raw}'"
        )));
    }

    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_path_is_grouped_by_country() {
        assert_eq!(nice_document_path(12, "plan.pdf"), "perdocs/12/plan.pdf");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_filename("C:\\docs\\report.docx").unwrap(), "report.docx");
        assert_eq!(sanitize_filename(" summary.pdf ").unwrap(), "summary.pdf");
    }

    #[test]
    fn sanitize_rejects_empty_and_dot_names() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("uploads/").is_err());
        assert!(sanitize_filename("..").is_err());
    }
}
