//! Lightsail response decoding and error formatting.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use rustack_lightsail_model::error::{LightsailError, LightsailErrorCode};

use crate::config::JsonCodecConfig;
use crate::error::JsonCodecError;

/// Content type of Lightsail JSON bodies.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Deserialize a success body into an output or resource shape.
///
/// Unknown keys are ignored and enum-constrained fields keep whatever string
/// the service sent. An empty body decodes as `{}`. The body itself is never
/// logged; use [`decode_output_with`] to opt in.
///
/// # Errors
///
/// Returns [`JsonCodecError::Deserialize`] if the body is not valid JSON for `T`.
pub fn decode_output<T: DeserializeOwned>(body: &[u8]) -> Result<T, JsonCodecError> {
    decode(body, false)
}

/// Like [`decode_output`], logging the body at `trace` level when
/// `config.log_payloads` is set.
///
/// # Errors
///
/// Returns [`JsonCodecError::Deserialize`] if the body is not valid JSON for `T`.
pub fn decode_output_with<T: DeserializeOwned>(
    config: &JsonCodecConfig,
    body: &[u8],
) -> Result<T, JsonCodecError> {
    decode(body, config.log_payloads)
}

fn decode<T: DeserializeOwned>(body: &[u8], log_payloads: bool) -> Result<T, JsonCodecError> {
    let shape = std::any::type_name::<T>();
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    tracing::debug!(shape, bytes = body.len(), "decoding Lightsail response");
    if log_payloads {
        tracing::trace!(
            shape,
            body = %String::from_utf8_lossy(body),
            "Lightsail response payload"
        );
    }

    serde_json::from_slice(body).map_err(|source| JsonCodecError::Deserialize { shape, source })
}

/// Wire form of a service error.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
    code: Option<String>,
}

/// Decode an error response into a [`LightsailError`].
///
/// The error code comes from `__type`, either bare (`NotFoundException`) or
/// namespaced (`com.amazonaws.lightsail#NotFoundException`). A body that
/// cannot be parsed yields a `ServiceException` carrying the parse error as
/// its source. The returned error always carries `status`.
#[must_use]
pub fn decode_error(status: http::StatusCode, body: &[u8]) -> LightsailError {
    let parsed: ErrorBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(status = %status, error = %e, "unparseable Lightsail error response");
            return LightsailError::with_message(
                LightsailErrorCode::ServiceException,
                format!("unparseable error response with status {status}"),
            )
            .with_status(status)
            .with_source(e);
        }
    };

    let code = parsed
        .error_type
        .as_deref()
        .map_or(LightsailErrorCode::ServiceException, |raw| {
            LightsailErrorCode::from_code(short_code(raw))
        });
    tracing::debug!(status = %status, code = %code, "decoded Lightsail error");

    let message = parsed.message.unwrap_or_else(|| code.as_str().to_owned());
    let mut error = LightsailError::with_message(code, message).with_status(status);
    if let Some(service_code) = parsed.code {
        error = error.with_service_code(service_code);
    }
    error
}

/// Strip the namespace and any trailing `:` detail from an `__type` value.
fn short_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code)
}

/// Serialize a [`LightsailError`] into an error body.
///
/// ```json
/// {
///   "__type": "NotFoundException",
///   "message": "The Alarm does not exist: cpu-alarm",
///   "code": "DoesNotExist"
/// }
/// ```
#[must_use]
pub fn error_to_json(error: &LightsailError) -> Vec<u8> {
    let mut body = serde_json::json!({
        "__type": error.code.as_str(),
        "message": error.message,
    });
    if let Some(service_code) = &error.service_code {
        body["code"] = serde_json::Value::String(service_code.clone());
    }
    body.to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use rustack_lightsail_model::output::{
        GetRelationalDatabaseMetricDataOutput, PutAlarmOutput,
    };
    use rustack_lightsail_model::resources::Alarm;

    use super::*;
    use crate::test_support::{capture_logs, init_tracing};

    #[test]
    fn test_should_decode_put_alarm_output() {
        init_tracing();
        let body = serde_json::json!({
            "operations": [{
                "id": "a1",
                "resourceName": "cpu-alarm",
                "resourceType": "Alarm",
                "isTerminal": true,
                "status": "Succeeded",
                "createdAt": 1_700_000_000.25
            }]
        })
        .to_string();
        let output: PutAlarmOutput = decode_output(body.as_bytes()).expect("decode output");
        let op = &output.operations().expect("operations")[0];
        assert_eq!(op.resource_type(), Some("Alarm"));
        assert_eq!(op.is_terminal(), Some(true));
        assert_eq!(
            op.created_at().map(|t| t.timestamp_millis()),
            Some(1_700_000_000_250)
        );
    }

    #[test]
    fn test_should_keep_unknown_values_and_ignore_unknown_keys() {
        init_tracing();
        let body = br#"{"name":"a","state":"SILENCED","brandNewField":[1,2,3]}"#;
        let alarm: Alarm = decode_output(body).expect("decode alarm");
        assert_eq!(alarm.state(), Some("SILENCED"));
        assert_eq!(alarm.to_string(), "{name: a, state: SILENCED}");
    }

    #[test]
    fn test_should_decode_empty_body_as_empty_shape() {
        init_tracing();
        let output: GetRelationalDatabaseMetricDataOutput =
            decode_output(b"  ").expect("decode empty body");
        assert_eq!(output, GetRelationalDatabaseMetricDataOutput::default());
    }

    #[test]
    fn test_should_not_log_response_body_by_default() {
        let body = br#"{"name":"secret-alarm-name"}"#;
        let (alarm, logs) = capture_logs(|| decode_output::<Alarm>(body));
        assert_eq!(alarm.expect("decode alarm").name(), Some("secret-alarm-name"));
        assert!(logs.contains("decoding Lightsail response"));
        assert!(!logs.contains("secret-alarm-name"));

        let (alarm, logs) =
            capture_logs(|| decode_output_with::<Alarm>(&JsonCodecConfig::default(), body));
        assert!(alarm.is_ok());
        assert!(!logs.contains("secret-alarm-name"));
    }

    #[test]
    fn test_should_log_response_body_when_enabled() {
        let config = JsonCodecConfig::builder().log_payloads(true).build();
        let body = br#"{"name":"secret-alarm-name"}"#;
        let (alarm, logs) = capture_logs(|| decode_output_with::<Alarm>(&config, body));
        assert!(alarm.is_ok());
        assert!(logs.contains("Lightsail response payload"));
        assert!(logs.contains("secret-alarm-name"));
    }

    #[test]
    fn test_should_fail_on_malformed_body() {
        init_tracing();
        let err = decode_output::<PutAlarmOutput>(br#"{"operations":"nope"}"#)
            .expect_err("operations must be a list");
        assert!(matches!(err, JsonCodecError::Deserialize { .. }));
        assert!(err.to_string().contains("PutAlarmOutput"));
    }

    #[test]
    fn test_should_decode_namespaced_error() {
        init_tracing();
        let body = serde_json::json!({
            "__type": "com.amazonaws.lightsail#NotFoundException",
            "message": "The Alarm does not exist: cpu-alarm",
            "code": "DoesNotExist"
        })
        .to_string();
        let err = decode_error(http::StatusCode::BAD_REQUEST, body.as_bytes());
        assert_eq!(err.code, LightsailErrorCode::NotFoundException);
        assert_eq!(err.message, "The Alarm does not exist: cpu-alarm");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(err.service_code.as_deref(), Some("DoesNotExist"));
    }

    #[test]
    fn test_should_decode_bare_error_code_with_capitalized_message() {
        init_tracing();
        let body =
            br#"{"__type":"AccessDeniedException:http://internal.amazon.com/","Message":"denied"}"#;
        let err = decode_error(http::StatusCode::FORBIDDEN, body);
        assert_eq!(err.code, LightsailErrorCode::AccessDeniedException);
        assert_eq!(err.message, "denied");
        assert_eq!(err.service_code, None);
    }

    #[test]
    fn test_should_keep_unknown_error_code() {
        init_tracing();
        let body = br#"{"__type":"RegionSetupInProgressException"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, body);
        assert_eq!(
            err.code,
            LightsailErrorCode::Unknown("RegionSetupInProgressException".to_owned())
        );
        assert_eq!(err.message, "RegionSetupInProgressException");
    }

    #[test]
    fn test_should_wrap_unparseable_error_body() {
        init_tracing();
        let err = decode_error(http::StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.code, LightsailErrorCode::ServiceException);
        assert_eq!(err.status_code, http::StatusCode::BAD_GATEWAY);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_should_roundtrip_error_json() {
        init_tracing();
        let original = LightsailError::not_found("The Alarm does not exist: cpu-alarm")
            .with_service_code("DoesNotExist");
        let json = error_to_json(&original);
        let decoded = decode_error(original.status_code, &json);
        assert_eq!(decoded.code, original.code);
        assert_eq!(decoded.message, original.message);
        assert_eq!(decoded.service_code, original.service_code);
    }

    #[test]
    fn test_should_strip_error_namespace() {
        assert_eq!(
            short_code("com.amazonaws.lightsail#InvalidInputException"),
            "InvalidInputException"
        );
        assert_eq!(short_code("ServiceException"), "ServiceException");
        assert_eq!(short_code("a#b:c"), "b");
    }
}
