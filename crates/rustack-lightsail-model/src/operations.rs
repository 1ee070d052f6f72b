//! Lightsail operation enum.

use std::fmt;

use serde::Serialize;

/// The `X-Amz-Target` prefix of the Lightsail `2016-11-28` API.
pub const TARGET_PREFIX: &str = "Lightsail_20161128";

/// All modeled Lightsail operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightsailOperation {
    // Alarms
    /// Create or update a metric alarm.
    PutAlarm,

    // Instances
    /// Create instances from a manual or automatic snapshot.
    CreateInstancesFromSnapshot,

    // Databases
    /// Create a managed database.
    CreateRelationalDatabase,
    /// Fetch metric data points of a managed database.
    GetRelationalDatabaseMetricData,
}

impl LightsailOperation {
    /// Every modeled operation.
    pub const ALL: &'static [Self] = &[
        Self::PutAlarm,
        Self::CreateInstancesFromSnapshot,
        Self::CreateRelationalDatabase,
        Self::GetRelationalDatabaseMetricData,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PutAlarm => "PutAlarm",
            Self::CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
            Self::CreateRelationalDatabase => "CreateRelationalDatabase",
            Self::GetRelationalDatabaseMetricData => "GetRelationalDatabaseMetricData",
        }
    }

    /// Parse an operation name string into a `LightsailOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PutAlarm" => Some(Self::PutAlarm),
            "CreateInstancesFromSnapshot" => Some(Self::CreateInstancesFromSnapshot),
            "CreateRelationalDatabase" => Some(Self::CreateRelationalDatabase),
            "GetRelationalDatabaseMetricData" => Some(Self::GetRelationalDatabaseMetricData),
            _ => None,
        }
    }

    /// Returns the default `X-Amz-Target` header value, e.g.
    /// `Lightsail_20161128.PutAlarm`.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }
}

impl fmt::Display for LightsailOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request shape sent by exactly one operation.
pub trait LightsailInput: Serialize {
    /// The operation this input belongs to.
    const OPERATION: LightsailOperation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_operation_names() {
        for op in LightsailOperation::ALL {
            assert_eq!(LightsailOperation::from_name(op.as_str()), Some(*op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation_name() {
        assert_eq!(LightsailOperation::from_name("GetAlarms"), None);
        assert_eq!(LightsailOperation::from_name("putAlarm"), None);
    }

    #[test]
    fn test_should_build_target_header_value() {
        assert_eq!(
            LightsailOperation::GetRelationalDatabaseMetricData.target(),
            "Lightsail_20161128.GetRelationalDatabaseMetricData"
        );
    }
}
