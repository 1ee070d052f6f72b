//! Codec errors.

use rustack_lightsail_model::operations::LightsailOperation;

/// Errors raised while encoding requests or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum JsonCodecError {
    /// A request shape could not be serialized.
    #[error("failed to serialize {operation} request: {source}")]
    Serialize {
        /// The operation being encoded.
        operation: LightsailOperation,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A response body is not valid JSON for the expected shape.
    #[error("failed to deserialize {shape}: {source}")]
    Deserialize {
        /// Type name of the expected shape.
        shape: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A configured header value contains characters not allowed in HTTP headers.
    #[error("invalid value for header {name}: {source}")]
    InvalidHeader {
        /// The header name.
        name: &'static str,
        /// The underlying header error.
        source: http::header::InvalidHeaderValue,
    },

    /// The HTTP request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),
}
