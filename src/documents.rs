use crate::errors::ServiceError;

/// Abstracts document attachment. The core only ever holds filenames;
/// whatever stores the bytes lives behind this seam.
pub trait DocumentStore: Send + Sync {
    /// Registers a file and returns the filename to record on the export.
    fn attach(&self, file_name: &str) -> Result<String, ServiceError>;
}

/// Filename-only registrar: normalizes the name and keeps nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilenameStore;

impl DocumentStore for FilenameStore {
    fn attach(&self, file_name: &str) -> Result<String, ServiceError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::DocumentError(
                "document name is empty".to_string(),
            ));
        }
        // uploads may arrive with a path prefix; keep the basename only
        let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn attach_strips_path_prefixes() {
        let store = FilenameStore;
        assert_eq!(
            store.attach("uploads/2023/invoice_C1001.pdf").unwrap(),
            "invoice_C1001.pdf"
        );
    }

    #[test]
    fn attach_rejects_empty_names() {
        let store = FilenameStore;
        assert_matches!(store.attach("   "), Err(ServiceError::DocumentError(_)));
    }
}
