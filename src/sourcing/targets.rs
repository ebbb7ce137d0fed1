// src/sourcing/targets.rs
use std::path::Path;
use tracing::debug;

use crate::error::{JobHuntError, JobHuntResult};
use super::model::TargetBook;

/// Load the hand-maintained target list.
///
/// The document maps category names to arrays of target tables:
///
/// ```toml
/// [[enterprise]]
/// name = "ServiceNow"
///
/// [[startup]]
/// name = "Acme Inc"
/// provider = "greenhouse"
/// handle = "acme"
/// ```
///
/// A document that does not match this shape is a caller contract violation
/// and fails fast here; per-item resolution failures are the resolver's
/// concern and never surface as errors.
pub fn load_targets(path: &Path) -> JobHuntResult<TargetBook> {
    let raw = std::fs::read_to_string(path).map_err(|e| JobHuntError::TargetsError {
        path: path.to_path_buf(),
        message: format!("failed to read: {}", e),
    })?;

    let book: TargetBook = toml::from_str(&raw).map_err(|e| JobHuntError::TargetsError {
        path: path.to_path_buf(),
        message: format!("failed to parse: {}", e),
    })?;

    debug!("Loaded {} target categories from {}", book.len(), path.display());
    Ok(book)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::sourcing::Provider;

    fn write_doc(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_categories_and_optional_fields() {
        let file = write_doc(
            r#"
            [[enterprise]]
            name = "ServiceNow"

            [[startup]]
            name = "Acme Inc"
            provider = "greenhouse"
            handle = "acme"
            "#,
        );

        let book = load_targets(file.path()).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book["enterprise"][0].name, "ServiceNow");
        assert!(book["enterprise"][0].provider.is_none());
        assert_eq!(book["startup"][0].provider, Some(Provider::Greenhouse));
        assert_eq!(book["startup"][0].handle.as_deref(), Some("acme"));
    }

    #[test]
    fn rejects_unknown_providers() {
        let file = write_doc(
            r#"
            [[startup]]
            name = "Acme"
            provider = "workday"
            "#,
        );

        assert!(load_targets(file.path()).is_err());
    }

    #[test]
    fn rejects_entries_without_a_name() {
        let file = write_doc(
            r#"
            [[startup]]
            handle = "acme"
            "#,
        );

        assert!(load_targets(file.path()).is_err());
    }

    #[test]
    fn rejects_structurally_malformed_documents() {
        let file = write_doc("startup = \"not a list\"\n");
        assert!(load_targets(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_targets(Path::new("/nonexistent/targets.toml"));
        assert!(matches!(result, Err(JobHuntError::TargetsError { .. })));
    }
}
