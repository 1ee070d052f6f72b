//! Lightsail error types.
//!
//! Two families live here:
//!
//! - [`ModelError`]: the few failures intrinsic to the model layer itself
//!   (enumeration lookup and duplicate map keys).
//! - [`LightsailError`] / [`LightsailErrorCode`]: service errors returned by the
//!   Lightsail `awsJson1_1` endpoint, decoded by the wire codec.

use std::fmt;

/// Errors raised by the model layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Enumeration lookup with an empty string.
    #[error("{enum_name} value cannot be null or empty")]
    EmptyEnumValue {
        /// The enumeration being parsed.
        enum_name: &'static str,
    },

    /// Enumeration lookup with a string that is not a canonical value.
    #[error("cannot create {enum_name} from unrecognized value {value:?}")]
    UnknownEnumValue {
        /// The enumeration being parsed.
        enum_name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A map entry was added under a key that is already present.
    #[error("duplicated key ({key}) provided for {field}")]
    DuplicateKey {
        /// The wire name of the map field.
        field: &'static str,
        /// The duplicated key.
        key: String,
    },
}

/// Well-known Lightsail service error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LightsailErrorCode {
    /// The caller lacks permission for the operation.
    AccessDeniedException,
    /// The account is still being set up.
    AccountSetupInProgressException,
    /// A request parameter is invalid.
    InvalidInputException,
    /// The requested resource does not exist.
    NotFoundException,
    /// The operation failed on the service side.
    OperationFailureException,
    /// Generic service failure.
    #[default]
    ServiceException,
    /// The request was not authenticated.
    UnauthenticatedException,
    /// A code this crate does not know yet.
    Unknown(String),
}

impl LightsailErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::AccountSetupInProgressException => "AccountSetupInProgressException",
            Self::InvalidInputException => "InvalidInputException",
            Self::NotFoundException => "NotFoundException",
            Self::OperationFailureException => "OperationFailureException",
            Self::ServiceException => "ServiceException",
            Self::UnauthenticatedException => "UnauthenticatedException",
            Self::Unknown(code) => code.as_str(),
        }
    }

    /// Parse a short error code, keeping unrecognized codes verbatim.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "AccessDeniedException" => Self::AccessDeniedException,
            "AccountSetupInProgressException" => Self::AccountSetupInProgressException,
            "InvalidInputException" => Self::InvalidInputException,
            "NotFoundException" => Self::NotFoundException,
            "OperationFailureException" => Self::OperationFailureException,
            "ServiceException" => Self::ServiceException,
            "UnauthenticatedException" => Self::UnauthenticatedException,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::AccessDeniedException | Self::UnauthenticatedException => {
                http::StatusCode::FORBIDDEN
            }
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ServiceException | Self::Unknown(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for LightsailErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Lightsail service error.
#[derive(Debug)]
pub struct LightsailError {
    /// The error code.
    pub code: LightsailErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The service-specific `code` detail (e.g. `ResourceNotFound`), if any.
    pub service_code: Option<String>,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for LightsailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightsailError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for LightsailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl LightsailError {
    /// Create a new `LightsailError` from an error code.
    #[must_use]
    pub fn new(code: LightsailErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            service_code: None,
            source: None,
        }
    }

    /// Create a new `LightsailError` with a custom message.
    #[must_use]
    pub fn with_message(code: LightsailErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            service_code: None,
            source: None,
        }
    }

    /// Override the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Attach the service-specific `code` detail.
    #[must_use]
    pub fn with_service_code(mut self, service_code: impl Into<String>) -> Self {
        self.service_code = Some(service_code.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid request parameter.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::InvalidInputException, message)
    }

    /// Resource not found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::NotFoundException, message)
    }

    /// Generic service failure.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::ServiceException, message)
    }

    /// Missing `X-Amz-Target` header.
    #[must_use]
    pub fn missing_action() -> Self {
        Self::with_message(
            LightsailErrorCode::InvalidInputException,
            "Missing required header: X-Amz-Target",
        )
    }

    /// Unknown operation.
    #[must_use]
    pub fn unknown_operation(target: &str) -> Self {
        Self::with_message(
            LightsailErrorCode::InvalidInputException,
            format!("Unrecognized operation: {target}"),
        )
    }
}

/// Create a `LightsailError` from an error code.
///
/// # Examples
///
/// ```
/// use rustack_lightsail_model::lightsail_error;
/// use rustack_lightsail_model::error::LightsailErrorCode;
///
/// let err = lightsail_error!(ServiceException);
/// assert_eq!(err.code, LightsailErrorCode::ServiceException);
///
/// let err = lightsail_error!(NotFoundException, "Alarm not found");
/// assert_eq!(err.message, "Alarm not found");
/// ```
#[macro_export]
macro_rules! lightsail_error {
    ($code:ident) => {
        $crate::error::LightsailError::new($crate::error::LightsailErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::LightsailError::with_message(
            $crate::error::LightsailErrorCode::$code,
            $msg,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_known_error_codes() {
        let codes = [
            LightsailErrorCode::AccessDeniedException,
            LightsailErrorCode::AccountSetupInProgressException,
            LightsailErrorCode::InvalidInputException,
            LightsailErrorCode::NotFoundException,
            LightsailErrorCode::OperationFailureException,
            LightsailErrorCode::ServiceException,
            LightsailErrorCode::UnauthenticatedException,
        ];
        for code in codes {
            assert_eq!(LightsailErrorCode::from_code(code.as_str()), code);
        }
    }

    #[test]
    fn test_should_keep_unknown_error_code_verbatim() {
        let code = LightsailErrorCode::from_code("RegionSetupInProgressException");
        assert_eq!(
            code,
            LightsailErrorCode::Unknown("RegionSetupInProgressException".to_owned())
        );
        assert_eq!(code.as_str(), "RegionSetupInProgressException");
        assert_eq!(
            code.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_should_map_status_codes() {
        assert_eq!(
            LightsailErrorCode::NotFoundException.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            LightsailErrorCode::InvalidInputException.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LightsailErrorCode::UnauthenticatedException.default_status_code(),
            http::StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_should_build_error_with_macro() {
        let err = lightsail_error!(InvalidInputException, "bad alarm name");
        assert_eq!(err.code, LightsailErrorCode::InvalidInputException);
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "LightsailError(InvalidInputException): bad alarm name"
        );
    }

    #[test]
    fn test_should_format_model_errors() {
        let err = ModelError::UnknownEnumValue {
            enum_name: "MetricName",
            value: "cpu".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            r#"cannot create MetricName from unrecognized value "cpu""#
        );

        let err = ModelError::DuplicateKey {
            field: "attachedDiskMapping",
            key: "/dev/xvdf".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "duplicated key (/dev/xvdf) provided for attachedDiskMapping"
        );
    }
}
