//! Lightsail target resolution.
//!
//! Lightsail uses the `awsJson1_1` protocol where all requests are `POST /`
//! with the operation specified in the `X-Amz-Target` header:
//!
//! ```text
//! X-Amz-Target: Lightsail_20161128.PutAlarm
//! ```

use rustack_lightsail_model::error::LightsailError;
use rustack_lightsail_model::operations::{LightsailOperation, TARGET_PREFIX};

use crate::config::JsonCodecConfig;
use crate::request::TARGET_HEADER;

/// Resolve a Lightsail operation from request headers using the default
/// `Lightsail_20161128` prefix.
pub fn resolve_operation(headers: &http::HeaderMap) -> Result<LightsailOperation, LightsailError> {
    resolve_with_prefix(headers, TARGET_PREFIX)
}

/// Resolve a Lightsail operation using the prefix of `config`.
pub fn resolve_operation_with(
    config: &JsonCodecConfig,
    headers: &http::HeaderMap,
) -> Result<LightsailOperation, LightsailError> {
    resolve_with_prefix(headers, &config.target_prefix)
}

fn resolve_with_prefix(
    headers: &http::HeaderMap,
    prefix: &str,
) -> Result<LightsailOperation, LightsailError> {
    let target = headers
        .get(TARGET_HEADER)
        .ok_or_else(LightsailError::missing_action)?;

    let target_str = target
        .to_str()
        .map_err(|_| LightsailError::missing_action())?;

    let operation_name = target_str
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('.'))
        .ok_or_else(|| LightsailError::unknown_operation(target_str))?;

    LightsailOperation::from_name(operation_name)
        .ok_or_else(|| LightsailError::unknown_operation(target_str))
}

#[cfg(test)]
mod tests {
    use rustack_lightsail_model::error::LightsailErrorCode;

    use super::*;

    fn headers_with_target(target: &str) -> http::HeaderMap {
        let mut map = http::HeaderMap::new();
        map.insert(TARGET_HEADER, http::HeaderValue::from_str(target).unwrap());
        map
    }

    #[test]
    fn test_should_resolve_all_operations() {
        for op in LightsailOperation::ALL {
            let headers = headers_with_target(&op.target());
            assert_eq!(resolve_operation(&headers).unwrap(), *op, "failed for {op}");
        }
    }

    #[test]
    fn test_should_error_on_missing_target() {
        let err = resolve_operation(&http::HeaderMap::new()).unwrap_err();
        assert_eq!(err.code, LightsailErrorCode::InvalidInputException);
        assert!(err.message.contains("X-Amz-Target"));
    }

    #[test]
    fn test_should_error_on_wrong_prefix() {
        let err =
            resolve_operation(&headers_with_target("DynamoDB_20120810.PutAlarm")).unwrap_err();
        assert_eq!(err.code, LightsailErrorCode::InvalidInputException);
        assert_eq!(err.message, "Unrecognized operation: DynamoDB_20120810.PutAlarm");
    }

    #[test]
    fn test_should_error_on_prefix_without_separator() {
        let err =
            resolve_operation(&headers_with_target("Lightsail_20161128PutAlarm")).unwrap_err();
        assert_eq!(err.code, LightsailErrorCode::InvalidInputException);
    }

    #[test]
    fn test_should_error_on_unmodeled_operation() {
        let err =
            resolve_operation(&headers_with_target("Lightsail_20161128.GetAlarms")).unwrap_err();
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_should_resolve_with_configured_prefix() {
        let config = JsonCodecConfig::builder()
            .target_prefix("LightsailMock_20161128".into())
            .build();
        let headers = headers_with_target("LightsailMock_20161128.CreateRelationalDatabase");
        assert_eq!(
            resolve_operation_with(&config, &headers).unwrap(),
            LightsailOperation::CreateRelationalDatabase
        );
        assert!(resolve_operation(&headers).is_err());
    }
}
