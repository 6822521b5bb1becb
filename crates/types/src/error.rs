//! Error types for the relay kit

use thiserror::Error;

/// Main error type for the relay kit
#[derive(Error, Debug)]
pub enum RelayKitError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fee projection and bundle pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Relay communication errors
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Auth signer failures; the request is never sent unsigned
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for relay kit operations
pub type Result<T> = std::result::Result<T, RelayKitError>;

/// Fee projection and aggregation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Arithmetic step exceeded the 256-bit range
    #[error("Pricing calculation overflow")]
    CalculationOverflow,

    /// Inputs that cannot produce a meaningful result
    #[error("Invalid pricing parameters: {0}")]
    InvalidParameters(String),
}

/// Relay communication specific errors
#[derive(Error, Debug)]
pub enum RelayError {
    /// Connection timeout
    #[error("Connection timeout to relay: {relay}")]
    ConnectionTimeout { relay: String },

    /// HTTP error
    #[error("HTTP error from relay {relay}: {status}")]
    HttpError { relay: String, status: u16 },

    /// Transport level failure (DNS, TLS, connection reset)
    #[error("Transport error talking to {relay}: {message}")]
    Transport { relay: String, message: String },

    /// Invalid response format
    #[error("Invalid response format from relay {relay}: {message}")]
    InvalidResponse { relay: String, message: String },

    /// JSON-RPC error object returned by the relay
    #[error("Relay {relay} returned error {code}: {message}")]
    Rpc {
        relay: String,
        code: i64,
        message: String,
    },
}

/// Auth signer errors
#[derive(Error, Debug)]
pub enum SigningError {
    /// The signer refused or failed to sign
    #[error("Failed to sign message: {0}")]
    Message(String),
}

/// Configuration specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Validation error
    #[error("Configuration validation error: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// Missing required field
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid value
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl From<ConfigError> for RelayKitError {
    fn from(err: ConfigError) -> Self {
        RelayKitError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RelayKitError {
    fn from(err: serde_json::Error) -> Self {
        RelayKitError::Serialization(err.to_string())
    }
}
