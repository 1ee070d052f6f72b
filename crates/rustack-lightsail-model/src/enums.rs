//! Closed Lightsail enumerations.
//!
//! Every enumeration maps each member to exactly one canonical wire string.
//! Model fields never store these types directly: enum-constrained fields are
//! plain strings so that values newer than this crate survive a round trip.
//! Builders accept either a raw string or a member (through
//! `From<E> for String`), and both paths store the same canonical string.
//!
//! [`LightsailEnum::from_value`] is the only validating entry point in the
//! model layer.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Behavior shared by every closed Lightsail enumeration.
pub trait LightsailEnum:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ModelError>
    + Into<String>
    + 'static
{
    /// The enumeration's type name, used in error messages.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the canonical wire string of this member.
    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive lookup of a canonical wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyEnumValue`] for `""` and
    /// [`ModelError::UnknownEnumValue`] for any other unrecognized string.
    fn from_value(value: &str) -> Result<Self, ModelError>;

    /// Parse the value of an optional model field.
    ///
    /// An unset field is treated like a null input and rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyEnumValue`] when `value` is `None` or empty,
    /// and [`ModelError::UnknownEnumValue`] for unrecognized strings.
    fn from_field(value: Option<&str>) -> Result<Self, ModelError> {
        value.map_or(
            Err(ModelError::EmptyEnumValue {
                enum_name: Self::NAME,
            }),
            Self::from_value,
        )
    }
}

/// Define a closed enumeration with canonical string values.
macro_rules! lightsail_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the canonical wire string of this member.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Exact, case-sensitive lookup of a canonical wire string.
            ///
            /// # Errors
            ///
            /// Returns [`ModelError::EmptyEnumValue`] for `""` and
            /// [`ModelError::UnknownEnumValue`] for any other unrecognized string.
            pub fn from_value(value: &str) -> Result<Self, ModelError> {
                match value {
                    "" => Err(ModelError::EmptyEnumValue {
                        enum_name: stringify!($name),
                    }),
                    $($value => Ok(Self::$variant),)+
                    other => Err(ModelError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl LightsailEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn from_value(value: &str) -> Result<Self, ModelError> {
                $name::from_value(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_value(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

lightsail_enum! {
    /// The kind of a Lightsail resource.
    pub enum ResourceType {
        /// A Lightsail instance (a virtual private server).
        Instance => "Instance",
        /// A static IP address.
        StaticIp => "StaticIp",
        /// The key pair used to connect to an instance.
        KeyPair => "KeyPair",
        /// An instance snapshot.
        InstanceSnapshot => "InstanceSnapshot",
        /// A DNS zone.
        Domain => "Domain",
        /// A peered VPC.
        PeeredVpc => "PeeredVpc",
        /// A load balancer.
        LoadBalancer => "LoadBalancer",
        /// An SSL/TLS certificate attached to a load balancer.
        LoadBalancerTlsCertificate => "LoadBalancerTlsCertificate",
        /// A block storage disk.
        Disk => "Disk",
        /// A block storage disk snapshot.
        DiskSnapshot => "DiskSnapshot",
        /// A managed database.
        RelationalDatabase => "RelationalDatabase",
        /// A managed database snapshot.
        RelationalDatabaseSnapshot => "RelationalDatabaseSnapshot",
        /// A record of a snapshot exported to Amazon EC2.
        ExportSnapshotRecord => "ExportSnapshotRecord",
        /// A record of an AWS CloudFormation stack.
        CloudFormationStackRecord => "CloudFormationStackRecord",
        /// A metric alarm.
        Alarm => "Alarm",
        /// A notification contact method.
        ContactMethod => "ContactMethod",
    }
}

lightsail_enum! {
    /// AWS Regions where Lightsail is available.
    pub enum RegionName {
        /// US East (N. Virginia).
        UsEast1 => "us-east-1",
        /// US East (Ohio).
        UsEast2 => "us-east-2",
        /// US West (N. California).
        UsWest1 => "us-west-1",
        /// US West (Oregon).
        UsWest2 => "us-west-2",
        /// Europe (Ireland).
        EuWest1 => "eu-west-1",
        /// Europe (London).
        EuWest2 => "eu-west-2",
        /// Europe (Paris).
        EuWest3 => "eu-west-3",
        /// Europe (Frankfurt).
        EuCentral1 => "eu-central-1",
        /// Canada (Central).
        CaCentral1 => "ca-central-1",
        /// Asia Pacific (Mumbai).
        ApSouth1 => "ap-south-1",
        /// Asia Pacific (Singapore).
        ApSoutheast1 => "ap-southeast-1",
        /// Asia Pacific (Sydney).
        ApSoutheast2 => "ap-southeast-2",
        /// Asia Pacific (Tokyo).
        ApNortheast1 => "ap-northeast-1",
        /// Asia Pacific (Seoul).
        ApNortheast2 => "ap-northeast-2",
    }
}

lightsail_enum! {
    /// Add-ons that can be enabled on a resource.
    pub enum AddOnType {
        /// Automatic daily snapshots.
        AutoSnapshot => "AutoSnapshot",
    }
}

lightsail_enum! {
    /// Status of an asynchronous Lightsail operation.
    pub enum OperationStatus {
        /// Not started yet.
        NotStarted => "NotStarted",
        /// In progress.
        Started => "Started",
        /// Finished with an error.
        Failed => "Failed",
        /// Finished.
        Completed => "Completed",
        /// Finished successfully.
        Succeeded => "Succeeded",
    }
}

// ---------------------------------------------------------------------------
// Metrics and alarms
// ---------------------------------------------------------------------------

lightsail_enum! {
    /// Metrics that can be monitored by an alarm.
    pub enum MetricName {
        /// Percentage of allocated compute units in use.
        CpuUtilization => "CPUUtilization",
        /// Bytes received on all network interfaces.
        NetworkIn => "NetworkIn",
        /// Bytes sent on all network interfaces.
        NetworkOut => "NetworkOut",
        /// Whether either status check failed.
        StatusCheckFailed => "StatusCheckFailed",
        /// Whether the instance status check failed.
        StatusCheckFailedInstance => "StatusCheckFailed_Instance",
        /// Whether the system status check failed.
        StatusCheckFailedSystem => "StatusCheckFailed_System",
        /// TLS connections the load balancer failed to negotiate.
        ClientTlsNegotiationErrorCount => "ClientTLSNegotiationErrorCount",
        /// Healthy target instances.
        HealthyHostCount => "HealthyHostCount",
        /// Unhealthy target instances.
        UnhealthyHostCount => "UnhealthyHostCount",
        /// 4XX responses generated by the load balancer.
        HttpCodeLb4xxCount => "HTTPCode_LB_4XX_Count",
        /// 5XX responses generated by the load balancer.
        HttpCodeLb5xxCount => "HTTPCode_LB_5XX_Count",
        /// 2XX responses generated by target instances.
        HttpCodeInstance2xxCount => "HTTPCode_Instance_2XX_Count",
        /// 3XX responses generated by target instances.
        HttpCodeInstance3xxCount => "HTTPCode_Instance_3XX_Count",
        /// 4XX responses generated by target instances.
        HttpCodeInstance4xxCount => "HTTPCode_Instance_4XX_Count",
        /// 5XX responses generated by target instances.
        HttpCodeInstance5xxCount => "HTTPCode_Instance_5XX_Count",
        /// Seconds elapsed until a target instance responds.
        InstanceResponseTime => "InstanceResponseTime",
        /// Connections rejected because the load balancer was at capacity.
        RejectedConnectionCount => "RejectedConnectionCount",
        /// Requests processed over IPv4.
        RequestCount => "RequestCount",
        /// Database connections in use.
        DatabaseConnections => "DatabaseConnections",
        /// Outstanding disk I/O requests.
        DiskQueueDepth => "DiskQueueDepth",
        /// Available storage space.
        FreeStorageSpace => "FreeStorageSpace",
        /// Incoming database network traffic.
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        /// Outgoing database network traffic.
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
    }
}

lightsail_enum! {
    /// Metrics available for a managed database.
    pub enum RelationalDatabaseMetricName {
        /// Percentage of CPU in use.
        CpuUtilization => "CPUUtilization",
        /// Database connections in use.
        DatabaseConnections => "DatabaseConnections",
        /// Outstanding disk I/O requests.
        DiskQueueDepth => "DiskQueueDepth",
        /// Available storage space.
        FreeStorageSpace => "FreeStorageSpace",
        /// Incoming network traffic.
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        /// Outgoing network traffic.
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
    }
}

lightsail_enum! {
    /// Units a metric can be reported in.
    pub enum MetricUnit {
        /// Seconds.
        Seconds => "Seconds",
        /// Microseconds.
        Microseconds => "Microseconds",
        /// Milliseconds.
        Milliseconds => "Milliseconds",
        /// Bytes.
        Bytes => "Bytes",
        /// Kilobytes.
        Kilobytes => "Kilobytes",
        /// Megabytes.
        Megabytes => "Megabytes",
        /// Gigabytes.
        Gigabytes => "Gigabytes",
        /// Terabytes.
        Terabytes => "Terabytes",
        /// Bits.
        Bits => "Bits",
        /// Kilobits.
        Kilobits => "Kilobits",
        /// Megabits.
        Megabits => "Megabits",
        /// Gigabits.
        Gigabits => "Gigabits",
        /// Terabits.
        Terabits => "Terabits",
        /// Percent.
        Percent => "Percent",
        /// Count.
        Count => "Count",
        /// Bytes per second.
        BytesPerSecond => "Bytes/Second",
        /// Kilobytes per second.
        KilobytesPerSecond => "Kilobytes/Second",
        /// Megabytes per second.
        MegabytesPerSecond => "Megabytes/Second",
        /// Gigabytes per second.
        GigabytesPerSecond => "Gigabytes/Second",
        /// Terabytes per second.
        TerabytesPerSecond => "Terabytes/Second",
        /// Bits per second.
        BitsPerSecond => "Bits/Second",
        /// Kilobits per second.
        KilobitsPerSecond => "Kilobits/Second",
        /// Megabits per second.
        MegabitsPerSecond => "Megabits/Second",
        /// Gigabits per second.
        GigabitsPerSecond => "Gigabits/Second",
        /// Terabits per second.
        TerabitsPerSecond => "Terabits/Second",
        /// Count per second.
        CountPerSecond => "Count/Second",
        /// No unit.
        None => "None",
    }
}

lightsail_enum! {
    /// Statistics that can be computed over a metric.
    pub enum MetricStatistic {
        /// Lowest value observed.
        Minimum => "Minimum",
        /// Highest value observed.
        Maximum => "Maximum",
        /// Sum of all values.
        Sum => "Sum",
        /// Sum divided by sample count.
        Average => "Average",
        /// Number of data points.
        SampleCount => "SampleCount",
    }
}

lightsail_enum! {
    /// How an alarm compares a statistic with its threshold.
    pub enum ComparisonOperator {
        /// `>=`
        GreaterThanOrEqualToThreshold => "GreaterThanOrEqualToThreshold",
        /// `>`
        GreaterThanThreshold => "GreaterThanThreshold",
        /// `<`
        LessThanThreshold => "LessThanThreshold",
        /// `<=`
        LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
    }
}

lightsail_enum! {
    /// How an alarm treats missing data points.
    pub enum TreatMissingData {
        /// Missing data counts as breaching the threshold.
        Breaching => "breaching",
        /// Missing data counts as within the threshold.
        NotBreaching => "notBreaching",
        /// The current alarm state is kept.
        Ignore => "ignore",
        /// Missing data is not considered when evaluating the alarm.
        Missing => "missing",
    }
}

lightsail_enum! {
    /// State of an alarm.
    pub enum AlarmState {
        /// The metric is within the threshold.
        Ok => "OK",
        /// The metric breaches the threshold.
        Alarm => "ALARM",
        /// Not enough data to evaluate the alarm.
        InsufficientData => "INSUFFICIENT_DATA",
    }
}

// ---------------------------------------------------------------------------
// Contact methods
// ---------------------------------------------------------------------------

lightsail_enum! {
    /// Notification channels of a contact method.
    pub enum ContactProtocol {
        /// Email address.
        Email => "Email",
        /// SMS text message.
        Sms => "SMS",
    }
}

lightsail_enum! {
    /// Verification status of a contact method.
    pub enum ContactMethodStatus {
        /// Verification has not completed yet.
        PendingVerification => "PendingVerification",
        /// Verified and usable.
        Valid => "Valid",
        /// Verification failed or expired.
        Invalid => "Invalid",
    }
}

// ---------------------------------------------------------------------------
// Networking
// ---------------------------------------------------------------------------

lightsail_enum! {
    /// IP protocol of a firewall port range.
    pub enum NetworkProtocol {
        /// TCP.
        Tcp => "tcp",
        /// Every protocol.
        All => "all",
        /// UDP.
        Udp => "udp",
        /// ICMP.
        Icmp => "icmp",
    }
}

lightsail_enum! {
    /// Whether a port is reachable publicly or privately.
    pub enum PortAccessType {
        /// Reachable from the internet.
        Public => "Public",
        /// Reachable from peered networks only.
        Private => "Private",
    }
}

lightsail_enum! {
    /// Direction of traffic allowed through a port.
    pub enum AccessDirection {
        /// Incoming traffic.
        Inbound => "inbound",
        /// Outgoing traffic.
        Outbound => "outbound",
    }
}

// ---------------------------------------------------------------------------
// Load balancer TLS certificates
// ---------------------------------------------------------------------------

lightsail_enum! {
    /// Lifecycle status of a load balancer TLS certificate.
    pub enum LoadBalancerTlsCertificateStatus {
        /// Awaiting domain validation.
        PendingValidation => "PENDING_VALIDATION",
        /// Issued and usable.
        Issued => "ISSUED",
        /// Not in use.
        Inactive => "INACTIVE",
        /// Past its validity period.
        Expired => "EXPIRED",
        /// Domain validation did not complete in time.
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        /// Revoked by the issuer.
        Revoked => "REVOKED",
        /// Issuance failed.
        Failed => "FAILED",
        /// Status cannot be determined.
        Unknown => "UNKNOWN",
    }
}

lightsail_enum! {
    /// Why certificate issuance failed.
    pub enum LoadBalancerTlsCertificateFailureReason {
        /// No validation contacts were found for the domain.
        NoAvailableContacts => "NO_AVAILABLE_CONTACTS",
        /// The issuer needs more information.
        AdditionalVerificationRequired => "ADDITIONAL_VERIFICATION_REQUIRED",
        /// The domain is not allowed.
        DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
        /// The domain is not a valid public domain.
        InvalidPublicDomain => "INVALID_PUBLIC_DOMAIN",
        /// Any other failure.
        Other => "OTHER",
    }
}

lightsail_enum! {
    /// Why a certificate was revoked.
    pub enum LoadBalancerTlsCertificateRevocationReason {
        /// No reason given.
        Unspecified => "UNSPECIFIED",
        /// The private key was compromised.
        KeyCompromise => "KEY_COMPROMISE",
        /// The certificate authority was compromised.
        CaCompromise => "CA_COMPROMISE",
        /// The subject's affiliation changed.
        AffiliationChanged => "AFFILIATION_CHANGED",
        /// Replaced by a newer certificate.
        Superceded => "SUPERCEDED",
        /// The subject stopped operating.
        CessationOfOperation => "CESSATION_OF_OPERATION",
        /// Temporarily on hold.
        CertificateHold => "CERTIFICATE_HOLD",
        /// Removed from the revocation list.
        RemoveFromCrl => "REMOVE_FROM_CRL",
        /// A privilege was withdrawn.
        PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
        /// The attribute authority was compromised.
        AaCompromise => "A_A_COMPROMISE",
    }
}

lightsail_enum! {
    /// Validation status of one certificate domain.
    pub enum LoadBalancerTlsCertificateDomainStatus {
        /// Awaiting validation.
        PendingValidation => "PENDING_VALIDATION",
        /// Validation failed.
        Failed => "FAILED",
        /// Validated.
        Success => "SUCCESS",
    }
}

lightsail_enum! {
    /// Status of managed certificate renewal.
    pub enum LoadBalancerTlsCertificateRenewalStatus {
        /// Renewal will be attempted automatically.
        PendingAutoRenewal => "PENDING_AUTO_RENEWAL",
        /// Renewal awaits domain validation.
        PendingValidation => "PENDING_VALIDATION",
        /// Renewed.
        Success => "SUCCESS",
        /// Renewal failed.
        Failed => "FAILED",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_closed_set<E: LightsailEnum>() {
        let mut seen = HashSet::new();
        for member in E::VALUES {
            assert!(
                seen.insert(member.as_str()),
                "duplicate canonical value {} in {}",
                member.as_str(),
                E::NAME
            );
            assert_eq!(E::from_value(member.as_str()), Ok(*member));
            assert_eq!(member.to_string(), member.as_str());
        }
        assert!(!E::VALUES.is_empty());
    }

    #[test]
    fn test_should_roundtrip_every_member() {
        assert_closed_set::<ResourceType>();
        assert_closed_set::<RegionName>();
        assert_closed_set::<AddOnType>();
        assert_closed_set::<OperationStatus>();
        assert_closed_set::<MetricName>();
        assert_closed_set::<RelationalDatabaseMetricName>();
        assert_closed_set::<MetricUnit>();
        assert_closed_set::<MetricStatistic>();
        assert_closed_set::<ComparisonOperator>();
        assert_closed_set::<TreatMissingData>();
        assert_closed_set::<AlarmState>();
        assert_closed_set::<ContactProtocol>();
        assert_closed_set::<ContactMethodStatus>();
        assert_closed_set::<NetworkProtocol>();
        assert_closed_set::<PortAccessType>();
        assert_closed_set::<AccessDirection>();
        assert_closed_set::<LoadBalancerTlsCertificateStatus>();
        assert_closed_set::<LoadBalancerTlsCertificateFailureReason>();
        assert_closed_set::<LoadBalancerTlsCertificateRevocationReason>();
        assert_closed_set::<LoadBalancerTlsCertificateDomainStatus>();
        assert_closed_set::<LoadBalancerTlsCertificateRenewalStatus>();
    }

    #[test]
    fn test_should_reject_empty_value() {
        assert_eq!(
            MetricName::from_value(""),
            Err(ModelError::EmptyEnumValue {
                enum_name: "MetricName"
            })
        );
    }

    #[test]
    fn test_should_reject_unknown_value() {
        assert_eq!(
            ResourceType::from_value("FutureResourceKind"),
            Err(ModelError::UnknownEnumValue {
                enum_name: "ResourceType",
                value: "FutureResourceKind".to_owned(),
            })
        );
    }

    #[test]
    fn test_should_match_case_sensitively() {
        assert!(TreatMissingData::from_value("Breaching").is_err());
        assert_eq!(
            TreatMissingData::from_value("breaching"),
            Ok(TreatMissingData::Breaching)
        );
        assert!(MetricName::from_value("cpuutilization").is_err());
    }

    #[test]
    fn test_should_treat_unset_field_as_null() {
        assert_eq!(
            AlarmState::from_field(None),
            Err(ModelError::EmptyEnumValue {
                enum_name: "AlarmState"
            })
        );
        assert_eq!(
            AlarmState::from_field(Some("INSUFFICIENT_DATA")),
            Ok(AlarmState::InsufficientData)
        );
    }

    #[test]
    fn test_should_parse_with_from_str() {
        let unit: MetricUnit = "Bytes/Second".parse().expect("known unit");
        assert_eq!(unit, MetricUnit::BytesPerSecond);
        assert!("bytes/second".parse::<MetricUnit>().is_err());
    }

    #[test]
    fn test_should_convert_member_into_canonical_string() {
        let value: String = MetricName::HttpCodeLb4xxCount.into();
        assert_eq!(value, "HTTPCode_LB_4XX_Count");
        assert_eq!(ContactProtocol::Sms.as_ref(), "SMS");
    }

    #[test]
    fn test_should_serialize_as_canonical_string() {
        let json = serde_json::to_string(&AlarmState::InsufficientData).expect("serialize");
        assert_eq!(json, r#""INSUFFICIENT_DATA""#);

        let parsed: NetworkProtocol = serde_json::from_str(r#""icmp""#).expect("deserialize");
        assert_eq!(parsed, NetworkProtocol::Icmp);
    }

    #[test]
    fn test_should_fail_to_deserialize_unknown_value() {
        let err = serde_json::from_str::<PortAccessType>(r#""Protected""#)
            .expect_err("unknown access type");
        assert!(err.to_string().contains("Protected"));
    }
}
