//! Typed error handling for resource operations
//!
//! Handlers return these errors directly; each one knows its HTTP status
//! and a stable error code so clients can match on specific cases.
//!
//! # Error Categories
//!
//! - [`ResourceError`]: outcome of a resource manager operation
//! - [`ValidationError`]: caller-correctable input problems
//! - [`StorageError`]: failures reported by a storage backend
//! - [`RequestError`]: malformed requests rejected before the manager runs
//! - [`ConfigError`]: configuration loading problems
//!
//! # Example
//!
//! ```rust,ignore
//! match manager.update(customer).await {
//!     Ok(stored) => println!("updated {:?}", stored.id()),
//!     Err(ResourceError::NotFound { id, .. }) => println!("{} is gone", id),
//!     Err(ResourceError::Validation(e)) => println!("rejected: {}", e),
//!     Err(e) => eprintln!("storage failure: {}", e),
//! }
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error response body for HTTP responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// =============================================================================
// Resource Errors
// =============================================================================

/// Outcome of a failed resource manager operation
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No stored record has this identifier
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend failed
    #[error(transparent)]
    Storage(StorageError),
}

impl ResourceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ResourceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ResourceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::NotFound { .. } => "RESOURCE_NOT_FOUND",
            ResourceError::Validation(e) => e.error_code(),
            ResourceError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Check whether this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, ResourceError::Validation(_))
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ResourceError::Validation(ValidationError::Fields { fields, .. }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            ResourceError::Validation(ValidationError::Unique {
                field: Some(field), ..
            })
            | ResourceError::Validation(ValidationError::Immutable { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            _ => None,
        }
    }
}

impl From<StorageError> for ResourceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UniqueViolation { resource, field } => {
                ResourceError::Validation(ValidationError::Unique { resource, field })
            }
            other => ResourceError::Storage(other),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // absence is reported by status alone
            ResourceError::NotFound { .. } => status.into_response(),
            other => (status, Json(other.to_response())).into_response(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their declared rules
    #[error("{resource} failed validation on {} field(s)", .fields.len())]
    Fields {
        resource: &'static str,
        fields: Vec<FieldError>,
    },

    /// A unique field collides with a stored record
    #[error("{resource} with the same {} already exists", .field.as_deref().unwrap_or("unique value"))]
    Unique {
        resource: &'static str,
        field: Option<String>,
    },

    /// A natural identifier was changed on update
    #[error("field '{field}' of {resource} cannot be changed after creation")]
    Immutable {
        resource: &'static str,
        field: String,
    },

    /// Update payload carries no identifier
    #[error("{resource} update requires an id")]
    MissingId { resource: &'static str },

    /// A reference points at a record that is not stored
    #[error("{resource} references unknown {target}{}", .id.map(|id| format!(" with id '{}'", id)).unwrap_or_default())]
    UnknownReference {
        resource: &'static str,
        target: &'static str,
        id: Option<i64>,
    },
}

impl ValidationError {
    /// Build a field error report from `validator` output
    pub fn from_report(resource: &'static str, report: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = report
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Validation failed for field '{}'", field)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        ValidationError::Fields { resource, fields }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Fields { .. } => "VALIDATION_FAILED",
            ValidationError::Unique { .. } => "UNIQUE_VIOLATION",
            ValidationError::Immutable { .. } => "IMMUTABLE_FIELD",
            ValidationError::MissingId { .. } => "MISSING_ID",
            ValidationError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
        }
    }

    /// Names of the offending fields, when known
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::Fields { fields, .. } => {
                fields.iter().map(|f| f.field.as_str()).collect()
            }
            ValidationError::Unique { field, .. } => field.as_deref().into_iter().collect(),
            ValidationError::Immutable { field, .. } => vec![field.as_str()],
            ValidationError::MissingId { .. } => vec!["id"],
            ValidationError::UnknownReference { .. } => vec![],
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected a write because of a unique constraint
    #[error("unique constraint violated for {resource}")]
    UniqueViolation {
        resource: &'static str,
        field: Option<String>,
    },

    /// Connection, query or lock failure
    #[error("{backend} error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    /// A stored record could not be encoded or decoded
    #[error("failed to serialize {resource}: {message}")]
    Serialization {
        resource: &'static str,
        message: String,
    },
}

impl StorageError {
    pub fn backend(backend: &'static str, message: impl ToString) -> Self {
        StorageError::Backend {
            backend,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Requests rejected at the transport boundary
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not valid JSON for the target type, or has the wrong content type
    #[error("invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_REQUEST_BODY",
        }
    }
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        RequestError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: None,
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },
}
