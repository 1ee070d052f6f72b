//! Lightsail request encoding.
//!
//! Every Lightsail call is a `POST /` whose operation is named by the
//! `X-Amz-Target` header and whose input is a JSON document:
//!
//! ```text
//! POST / HTTP/1.1
//! X-Amz-Target: Lightsail_20161128.PutAlarm
//! Content-Type: application/x-amz-json-1.1
//!
//! {"alarmName":"cpu-alarm","metricName":"CPUUtilization", ...}
//! ```
//!
//! Unset fields are absent keys. Signing and sending belong to the transport.

use bytes::Bytes;
use http::HeaderValue;

use rustack_lightsail_model::operations::{LightsailInput, LightsailOperation};

use crate::config::JsonCodecConfig;
use crate::error::JsonCodecError;

/// Name of the header carrying the operation.
pub const TARGET_HEADER: &str = "x-amz-target";

/// A serialized request, ready to be signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// The operation the body belongs to.
    pub operation: LightsailOperation,
    /// Value of the `X-Amz-Target` header.
    pub target: String,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// The JSON body.
    pub body: Bytes,
}

/// Serialize an operation input.
///
/// # Errors
///
/// Returns [`JsonCodecError::Serialize`] if the input cannot be encoded.
pub fn encode_input<I: LightsailInput>(
    config: &JsonCodecConfig,
    input: &I,
) -> Result<EncodedRequest, JsonCodecError> {
    let operation = I::OPERATION;
    let body = serde_json::to_vec(input)
        .map_err(|source| JsonCodecError::Serialize { operation, source })?;

    tracing::debug!(operation = %operation, bytes = body.len(), "encoded Lightsail request");
    if config.log_payloads {
        tracing::trace!(
            operation = %operation,
            body = %String::from_utf8_lossy(&body),
            "Lightsail request payload"
        );
    }

    Ok(EncodedRequest {
        operation,
        target: format!("{}.{}", config.target_prefix, operation.as_str()),
        content_type: config.content_type.clone(),
        body: Bytes::from(body),
    })
}

impl EncodedRequest {
    /// Assemble a `POST` request to `uri` carrying this body.
    ///
    /// # Errors
    ///
    /// Returns [`JsonCodecError::InvalidHeader`] if the configured target or
    /// content type is not a valid header value, and [`JsonCodecError::Http`]
    /// if the request cannot be built.
    pub fn into_http_request(self, uri: http::Uri) -> Result<http::Request<Bytes>, JsonCodecError> {
        let target =
            HeaderValue::from_str(&self.target).map_err(|source| JsonCodecError::InvalidHeader {
                name: TARGET_HEADER,
                source,
            })?;
        let content_type = HeaderValue::from_str(&self.content_type).map_err(|source| {
            JsonCodecError::InvalidHeader {
                name: "content-type",
                source,
            }
        })?;

        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(uri)
            .header(TARGET_HEADER, target)
            .header(http::header::CONTENT_TYPE, content_type)
            .header(http::header::CONTENT_LENGTH, self.body.len())
            .body(self.body)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use rustack_lightsail_model::enums::{ComparisonOperator, MetricName, TreatMissingData};
    use rustack_lightsail_model::input::{
        CreateInstancesFromSnapshotInput, GetRelationalDatabaseMetricDataInput, PutAlarmInput,
    };

    use super::*;
    use crate::router::resolve_operation;
    use crate::test_support::{capture_logs, init_tracing};

    fn put_alarm() -> PutAlarmInput {
        PutAlarmInput::builder()
            .alarm_name("cpu-alarm")
            .metric_name(MetricName::CpuUtilization)
            .monitored_resource_name("web-1")
            .comparison_operator(ComparisonOperator::GreaterThanThreshold)
            .threshold(80.0)
            .evaluation_periods(3)
            .treat_missing_data(TreatMissingData::Missing)
            .build()
    }

    #[test]
    fn test_should_encode_put_alarm() {
        init_tracing();
        let encoded =
            encode_input(&JsonCodecConfig::default(), &put_alarm()).expect("encode PutAlarm");

        assert_eq!(encoded.operation, LightsailOperation::PutAlarm);
        assert_eq!(encoded.target, "Lightsail_20161128.PutAlarm");
        assert_eq!(encoded.content_type, "application/x-amz-json-1.1");

        let body: serde_json::Value =
            serde_json::from_slice(&encoded.body).expect("body is JSON");
        assert_eq!(body["alarmName"], "cpu-alarm");
        assert_eq!(body["metricName"], "CPUUtilization");
        assert_eq!(body["treatMissingData"], "missing");
        assert!(body.get("datapointsToAlarm").is_none());
    }

    #[test]
    fn test_should_encode_empty_input_as_empty_object() {
        init_tracing();
        let encoded = encode_input(
            &JsonCodecConfig::default(),
            &GetRelationalDatabaseMetricDataInput::default(),
        )
        .expect("encode empty input");
        assert_eq!(&encoded.body[..], b"{}");
    }

    #[test]
    fn test_should_use_configured_prefix() {
        init_tracing();
        let config = JsonCodecConfig::builder()
            .target_prefix("LightsailMock_20161128".into())
            .build();
        let input = CreateInstancesFromSnapshotInput::builder()
            .instance_names("web-2")
            .build();
        let encoded = encode_input(&config, &input).expect("encode input");
        assert_eq!(encoded.target, "LightsailMock_20161128.CreateInstancesFromSnapshot");
    }

    #[test]
    fn test_should_log_request_body_only_when_enabled() {
        let (encoded, logs) =
            capture_logs(|| encode_input(&JsonCodecConfig::default(), &put_alarm()));
        assert!(encoded.is_ok());
        assert!(logs.contains("encoded Lightsail request"));
        assert!(!logs.contains("cpu-alarm"));

        let config = JsonCodecConfig::builder().log_payloads(true).build();
        let (encoded, logs) = capture_logs(|| encode_input(&config, &put_alarm()));
        assert!(encoded.is_ok());
        assert!(logs.contains("Lightsail request payload"));
        assert!(logs.contains("cpu-alarm"));
    }

    #[test]
    fn test_should_build_http_request() {
        init_tracing();
        let encoded =
            encode_input(&JsonCodecConfig::default(), &put_alarm()).expect("encode PutAlarm");
        let body_len = encoded.body.len();
        let request = encoded
            .into_http_request(http::Uri::from_static(
                "https://lightsail.us-east-2.amazonaws.com/",
            ))
            .expect("build request");

        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(
            request.headers().get(http::header::CONTENT_TYPE).expect("content type"),
            "application/x-amz-json-1.1"
        );
        assert_eq!(
            request.headers().get(http::header::CONTENT_LENGTH).expect("content length"),
            body_len.to_string().as_str()
        );
        assert_eq!(
            resolve_operation(request.headers()).expect("resolve target"),
            LightsailOperation::PutAlarm
        );
    }

    #[test]
    fn test_should_reject_invalid_header_value() {
        let config = JsonCodecConfig::builder()
            .content_type("application/json\n".into())
            .build();
        let encoded = encode_input(&config, &put_alarm()).expect("encode PutAlarm");
        let err = encoded
            .into_http_request(http::Uri::from_static("http://localhost:4566/"))
            .expect_err("newline is not a valid header value");
        assert!(matches!(
            err,
            JsonCodecError::InvalidHeader {
                name: "content-type",
                ..
            }
        ));
    }
}
