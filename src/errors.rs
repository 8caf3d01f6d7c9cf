use serde::Serialize;

/// A single failed form-field rule.
///
/// Validation reports one message per invalid field; submissions are
/// all-or-nothing, so callers always receive the complete set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn summarize_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every failure in this system is recoverable: validation blocks the
/// submission, lookups fall back to a not-found view, and unknown routes
/// resolve to the 404 screen. There are no fatal variants.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", summarize_fields(.0))]
    ValidationError(Vec<FieldError>),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Document error: {0}")]
    DocumentError(String),
}

impl ServiceError {
    /// Convenience constructor for entity lookups.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{} {} not found", kind, id))
    }

    /// Field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ServiceError::ValidationError(errors) => errors,
            _ => &[],
        }
    }
}

/// Flattens `validator` output into per-field messages.
pub fn field_errors_from(err: validator::ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = err
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed rule '{}'", e.code));
                FieldError::new(field, message)
            })
        })
        .collect();
    // field_errors() iterates a HashMap; keep the report deterministic
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(field_errors_from(err))
    }
}
