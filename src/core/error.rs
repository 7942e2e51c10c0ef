//! Typed error handling for the fleet service
//!
//! Every operation of the record service fails with a [`FleetError`]. The
//! hierarchy is fine-grained so callers can match on specific cases, while
//! [`FleetError::kind`] collapses it into the two terminal outcomes the
//! transport cares about: a bad request or a missing record.
//!
//! # Error Categories
//!
//! - [`ShipError`]: Errors about a specific ship record
//! - [`ValidationError`]: A candidate record or request body was rejected
//! - [`RequestError`]: Malformed identifiers or query parameters
//! - [`StorageError`]: Errors raised by the record store
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get("42").await {
//!     Ok(ship) => println!("Found: {}", ship.name),
//!     Err(FleetError::Ship(ShipError::NotFound { id })) => {
//!         println!("Ship {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the fleet service
#[derive(Debug)]
pub enum FleetError {
    /// Errors about a specific ship record
    Ship(ShipError),

    /// Validation errors
    Validation(ValidationError),

    /// Malformed request input (ids, query parameters, bodies)
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

/// Coarse classification of a [`FleetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed id, invalid or unparsable parameter, failed field validation
    BadRequest,
    /// Valid id, but no such record
    NotFound,
    /// Store, configuration or other server-side failure
    Internal,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Ship(e) => write!(f, "{}", e),
            FleetError::Validation(e) => write!(f, "{}", e),
            FleetError::Request(e) => write!(f, "{}", e),
            FleetError::Storage(e) => write!(f, "{}", e),
            FleetError::Config(e) => write!(f, "{}", e),
            FleetError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FleetError::Ship(e) => Some(e),
            FleetError::Validation(e) => Some(e),
            FleetError::Request(e) => Some(e),
            FleetError::Storage(e) => Some(e),
            FleetError::Config(e) => Some(e),
            FleetError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl FleetError {
    /// Classify this error as bad request, not found or internal
    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::Ship(ShipError::NotFound { .. }) => ErrorKind::NotFound,
            FleetError::Validation(_) | FleetError::Request(_) => ErrorKind::BadRequest,
            FleetError::Storage(_) | FleetError::Config(_) | FleetError::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FleetError::Ship(e) => e.error_code(),
            FleetError::Validation(e) => e.error_code(),
            FleetError::Request(e) => e.error_code(),
            FleetError::Storage(_) => "STORAGE_ERROR",
            FleetError::Config(_) => "CONFIG_ERROR",
            FleetError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            FleetError::Ship(ShipError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            FleetError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            FleetError::Request(RequestError::InvalidParameter { name, value, .. }) => {
                Some(serde_json::json!({
                    "parameter": name,
                    "value": value
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for FleetError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Ship Errors
// =============================================================================

/// Errors about a specific ship record
#[derive(Debug)]
pub enum ShipError {
    /// No ship is stored under this id
    NotFound { id: i64 },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::NotFound { id } => write!(f, "Ship with id '{}' not found", id),
        }
    }
}

impl std::error::Error for ShipError {}

impl ShipError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ShipError::NotFound { .. } => "SHIP_NOT_FOUND",
        }
    }
}

impl From<ShipError> for FleetError {
    fn from(err: ShipError) -> Self {
        FleetError::Ship(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more field rules were violated, in rule order
    FieldErrors(Vec<FieldValidationError>),

    /// Request body is not a valid ship payload
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// Names of the rejected fields, in rule order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
            ValidationError::InvalidJson { .. } => Vec::new(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FleetError {
    fn from(err: ValidationError) -> Self {
        FleetError::Validation(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to request input
#[derive(Debug)]
pub enum RequestError {
    /// Path id is not a positive integer
    InvalidShipId { id: String },

    /// Query parameter could not be parsed or has an unsupported value
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    /// Invalid request body
    InvalidBody { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidShipId { id } => {
                write!(f, "Invalid ship id: '{}'", id)
            }
            RequestError::InvalidParameter {
                name,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for parameter '{}': {}",
                    value, name, message
                )
            }
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    /// Shorthand for [`RequestError::InvalidParameter`]
    pub fn invalid_parameter(name: &str, value: &str, message: impl Into<String>) -> Self {
        RequestError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidShipId { .. } => "INVALID_SHIP_ID",
            RequestError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<RequestError> for FleetError {
    fn from(err: RequestError) -> Self {
        FleetError::Request(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the record store
#[derive(Debug)]
pub enum StorageError {
    /// Lock guarding the store is poisoned
    LockPoisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { message } => {
                write!(f, "Store lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for FleetError {
    fn from(err: StorageError) -> Self {
        FleetError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for FleetError {
    fn from(err: ConfigError) -> Self {
        FleetError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for FleetError {
    fn from(err: std::io::Error) -> Self {
        FleetError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for FleetError {
    fn from(err: serde_yaml::Error) -> Self {
        FleetError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Store implementations report failures through `anyhow`
impl From<anyhow::Error> for FleetError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => FleetError::Storage(storage),
            Err(other) => FleetError::Internal(other.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for fleet operations
pub type FleetResult<T> = Result<T, FleetError>;
