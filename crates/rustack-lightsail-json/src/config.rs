//! Codec configuration.
//!
//! Provides [`JsonCodecConfig`] for the Lightsail `awsJson1_1` codec. Values
//! can be loaded from environment variables via [`JsonCodecConfig::from_env`].

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use rustack_lightsail_model::operations::TARGET_PREFIX;

use crate::response::CONTENT_TYPE;

/// Lightsail JSON codec configuration.
///
/// # Examples
///
/// ```
/// use rustack_lightsail_json::config::JsonCodecConfig;
///
/// let config = JsonCodecConfig::default();
/// assert_eq!(config.target_prefix, "Lightsail_20161128");
/// assert!(!config.log_payloads);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct JsonCodecConfig {
    /// Prefix of the `X-Amz-Target` header, without the trailing dot.
    #[builder(default = String::from(TARGET_PREFIX))]
    pub target_prefix: String,

    /// `Content-Type` of request bodies.
    #[builder(default = String::from(CONTENT_TYPE))]
    pub content_type: String,

    /// Emit request and response bodies as `trace` events.
    #[builder(default = false)]
    pub log_payloads: bool,
}

impl Default for JsonCodecConfig {
    fn default() -> Self {
        Self {
            target_prefix: String::from(TARGET_PREFIX),
            content_type: String::from(CONTENT_TYPE),
            log_payloads: false,
        }
    }
}

impl JsonCodecConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LIGHTSAIL_TARGET_PREFIX` | `Lightsail_20161128` |
    /// | `LIGHTSAIL_CONTENT_TYPE` | `application/x-amz-json-1.1` |
    /// | `LIGHTSAIL_LOG_PAYLOADS` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = var("LIGHTSAIL_TARGET_PREFIX") {
            config.target_prefix = v.trim_end_matches('.').to_owned();
        }
        if let Some(v) = var("LIGHTSAIL_CONTENT_TYPE") {
            config.content_type = v;
        }
        if let Some(v) = var("LIGHTSAIL_LOG_PAYLOADS") {
            config.log_payloads = parse_bool(&v);
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = JsonCodecConfig::default();
        assert_eq!(config.target_prefix, "Lightsail_20161128");
        assert_eq!(config.content_type, "application/x-amz-json-1.1");
        assert!(!config.log_payloads);
        assert_eq!(JsonCodecConfig::builder().build(), config);
    }

    #[test]
    fn test_should_load_from_env() {
        let config = JsonCodecConfig::from_env();
        assert!(!config.target_prefix.is_empty());
    }

    #[test]
    fn test_should_override_from_variables() {
        let vars: HashMap<&str, &str> = [
            ("LIGHTSAIL_TARGET_PREFIX", "Lightsail_20161128."),
            ("LIGHTSAIL_LOG_PAYLOADS", "TRUE"),
        ]
        .into_iter()
        .collect();
        let config = JsonCodecConfig::from_vars(|key| vars.get(key).map(|v| (*v).to_owned()));
        assert_eq!(config.target_prefix, "Lightsail_20161128");
        assert_eq!(config.content_type, CONTENT_TYPE);
        assert!(config.log_payloads);
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = JsonCodecConfig::builder()
            .target_prefix("LightsailMock_20161128".into())
            .log_payloads(true)
            .build();
        assert_eq!(config.target_prefix, "LightsailMock_20161128");
        assert_eq!(config.content_type, CONTENT_TYPE);
        assert!(config.log_payloads);
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let json = serde_json::to_string(&JsonCodecConfig::default()).expect("test serialization");
        assert!(json.contains("targetPrefix"));
        assert!(json.contains("logPayloads"));
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }
}
