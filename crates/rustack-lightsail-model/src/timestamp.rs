//! Serde adapters for Lightsail timestamps.
//!
//! The `awsJson1_1` protocol carries timestamps as epoch seconds, possibly
//! fractional (`1700000000.123`). The wire keeps millisecond precision, so
//! builders truncate every timestamp they store to whole milliseconds.

use chrono::{DateTime, SubsecRound, Utc};

/// Drop everything below the millisecond.
#[must_use]
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

/// `Option<DateTime<Utc>>` as fractional epoch seconds.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a timestamp as epoch seconds.
    ///
    /// Whole seconds are written as integers, anything else as a float with
    /// millisecond precision.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(ts) => {
                let millis = ts.timestamp_subsec_millis();
                if millis == 0 {
                    serializer.serialize_i64(ts.timestamp())
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let secs = ts.timestamp_millis() as f64 / 1000.0;
                    serializer.serialize_f64(secs)
                }
            }
        }
    }

    /// Deserialize epoch seconds (integer or float) into a timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !secs.is_finite() {
            return Err(serde::de::Error::custom(format!(
                "invalid epoch timestamp: {secs}"
            )));
        }
        #[allow(clippy::cast_possible_truncation)]
        let millis = (secs * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| {
                serde::de::Error::custom(format!("epoch timestamp out of range: {secs}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(
            default,
            with = "super::epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_should_serialize_whole_seconds_as_integer() {
        let stamp = Stamp {
            at: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        };
        let json = serde_json::to_string(&stamp).expect("serialize stamp");
        assert_eq!(json, r#"{"at":1700000000}"#);
    }

    #[test]
    fn test_should_serialize_fractional_seconds() {
        let stamp = Stamp {
            at: DateTime::from_timestamp_millis(1_700_000_000_250),
        };
        let json = serde_json::to_string(&stamp).expect("serialize stamp");
        assert_eq!(json, r#"{"at":1700000000.25}"#);
    }

    #[test]
    fn test_should_deserialize_integer_and_float() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":1700000000}"#).expect("integer");
        assert_eq!(stamp.at, Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));

        let stamp: Stamp = serde_json::from_str(r#"{"at":1700000000.5}"#).expect("float");
        assert_eq!(stamp.at, DateTime::from_timestamp_millis(1_700_000_000_500));
    }

    #[test]
    fn test_should_truncate_below_millisecond() {
        let ts = DateTime::from_timestamp(1_700_000_000, 123_456_789).expect("valid timestamp");
        let truncated = super::truncate_to_millis(ts);
        assert_eq!(truncated.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(truncated.timestamp(), 1_700_000_000);

        let whole = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(super::truncate_to_millis(whole), whole);
    }

    #[test]
    fn test_should_roundtrip_truncated_timestamp() {
        let ts = DateTime::from_timestamp(1_700_000_000, 500_000).expect("valid timestamp");
        let stamp = Stamp {
            at: Some(super::truncate_to_millis(ts)),
        };
        let json = serde_json::to_string(&stamp).expect("serialize stamp");
        assert_eq!(json, r#"{"at":1700000000}"#);
        let back: Stamp = serde_json::from_str(&json).expect("deserialize stamp");
        assert_eq!(back, stamp);
    }

    #[test]
    fn test_should_treat_missing_and_null_as_unset() {
        let stamp: Stamp = serde_json::from_str("{}").expect("missing");
        assert_eq!(stamp.at, None);
        let stamp: Stamp = serde_json::from_str(r#"{"at":null}"#).expect("null");
        assert_eq!(stamp.at, None);
        assert_eq!(serde_json::to_string(&stamp).expect("serialize"), "{}");
    }
}
