// ABOUTME: Defines all error types for the console library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under ConsoleError.

use crate::model::Vendor;

/// Top-level error type for the console library.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Converse error: {0}")]
    Converse(#[from] ConverseError),
}

/// Errors from model registry and cost operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid model spec: {0}")]
    InvalidSpec(String),

    #[error("Model '{0}' not found")]
    NotFound(String),

    #[error("Model '{model}' not available from requested vendor (available: {})", format_vendors(.available))]
    VendorNotAvailable {
        model: String,
        vendor: Option<Vendor>,
        available: Vec<Vendor>,
    },

    #[error("Token counts cannot be negative (got {0})")]
    InvalidTokenCount(i64),

    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),
}

impl ModelError {
    /// Build a `VendorNotAvailable` error carrying the vendors that do offer
    /// the model, so a caller can retry with a valid one.
    pub fn vendor_not_available(
        model: impl Into<String>,
        vendor: Option<Vendor>,
        available: Vec<Vendor>,
    ) -> Self {
        Self::VendorNotAvailable {
            model: model.into(),
            vendor,
            available,
        }
    }
}

fn format_vendors(vendors: &[Vendor]) -> String {
    let names: Vec<_> = vendors.iter().map(Vendor::to_string).collect();
    names.join(", ")
}

/// Errors from conversation request validation.
#[derive(Debug, thiserror::Error)]
pub enum ConverseError {
    #[error("Temperature must be between 0 and 1 (got {0})")]
    InvalidTemperature(f32),

    #[error("Top P must be between 0 and 1 (got {0})")]
    InvalidTopP(f32),

    #[error("Max tokens must be between 1 and {max} (got {got})")]
    InvalidMaxTokens { got: u32, max: u32 },

    #[error("Model ID is required")]
    MissingModelId,

    #[error("At least one message is required")]
    EmptyMessages,

    #[error("Each message must have content")]
    EmptyContent,
}
