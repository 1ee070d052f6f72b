//! Metric alarms.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::{FloatBits, ShapeFormatter};
use crate::timestamp;
use crate::types::{MonitoredResourceInfo, ResourceLocation};

/// A metric alarm.
///
/// Alarms watch a single metric of an instance, load balancer or managed
/// database and notify the configured contact protocols when their state
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitored_resource_info: Option<MonitoredResourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_periods: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    treat_missing_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_protocols: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_triggers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_enabled: Option<bool>,
}

impl Alarm {
    /// Creates a new builder-style object to manufacture [`Alarm`].
    #[must_use]
    pub fn builder() -> AlarmBuilder {
        AlarmBuilder::default()
    }

    /// The alarm name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the alarm.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// When the alarm was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Region and Availability Zone of the alarm.
    #[must_use]
    pub fn location(&self) -> Option<&ResourceLocation> {
        self.location.as_ref()
    }

    /// Always `Alarm` for alarms.
    ///
    /// Values are listed in [`ResourceType`](crate::enums::ResourceType).
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Identifier to quote when contacting AWS Support.
    #[must_use]
    pub fn support_code(&self) -> Option<&str> {
        self.support_code.as_deref()
    }

    /// The resource the alarm watches.
    #[must_use]
    pub fn monitored_resource_info(&self) -> Option<&MonitoredResourceInfo> {
        self.monitored_resource_info.as_ref()
    }

    /// Values are listed in [`ComparisonOperator`](crate::enums::ComparisonOperator).
    #[must_use]
    pub fn comparison_operator(&self) -> Option<&str> {
        self.comparison_operator.as_deref()
    }

    /// Number of most recent periods over which data is compared to the threshold.
    #[must_use]
    pub fn evaluation_periods(&self) -> Option<i32> {
        self.evaluation_periods
    }

    /// Period in seconds over which the statistic is applied.
    #[must_use]
    pub fn period(&self) -> Option<i32> {
        self.period
    }

    /// The value the statistic is compared against.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold.map(f64::from)
    }

    /// Number of breaching data points that trigger the alarm.
    #[must_use]
    pub fn datapoints_to_alarm(&self) -> Option<i32> {
        self.datapoints_to_alarm
    }

    /// How missing data points are treated.
    ///
    /// The service defaults to `missing` when unset.
    ///
    /// Values are listed in [`TreatMissingData`](crate::enums::TreatMissingData).
    #[must_use]
    pub fn treat_missing_data(&self) -> Option<&str> {
        self.treat_missing_data.as_deref()
    }

    /// Values are listed in [`MetricStatistic`](crate::enums::MetricStatistic).
    #[must_use]
    pub fn statistic(&self) -> Option<&str> {
        self.statistic.as_deref()
    }

    /// Values are listed in [`MetricName`](crate::enums::MetricName).
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Values are listed in [`AlarmState`](crate::enums::AlarmState).
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Values are listed in [`MetricUnit`](crate::enums::MetricUnit).
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Channels notified when the alarm fires.
    ///
    /// Values are listed in [`ContactProtocol`](crate::enums::ContactProtocol).
    #[must_use]
    pub fn contact_protocols(&self) -> Option<&[String]> {
        self.contact_protocols.as_deref()
    }

    /// Alarm states that trigger a notification.
    ///
    /// Values are listed in [`AlarmState`](crate::enums::AlarmState).
    #[must_use]
    pub fn notification_triggers(&self) -> Option<&[String]> {
        self.notification_triggers.as_deref()
    }

    #[must_use]
    pub fn notification_enabled(&self) -> Option<bool> {
        self.notification_enabled
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("name", self.name.as_deref())
            .field("arn", self.arn.as_deref())
            .field("createdAt", self.created_at.as_ref())
            .field("location", self.location.as_ref())
            .field("resourceType", self.resource_type.as_deref())
            .field("supportCode", self.support_code.as_deref())
            .field("monitoredResourceInfo", self.monitored_resource_info.as_ref())
            .field("comparisonOperator", self.comparison_operator.as_deref())
            .field("evaluationPeriods", self.evaluation_periods.as_ref())
            .field("period", self.period.as_ref())
            .field("threshold", self.threshold.as_ref())
            .field("datapointsToAlarm", self.datapoints_to_alarm.as_ref())
            .field("treatMissingData", self.treat_missing_data.as_deref())
            .field("statistic", self.statistic.as_deref())
            .field("metricName", self.metric_name.as_deref())
            .field("state", self.state.as_deref())
            .field("unit", self.unit.as_deref())
            .list("contactProtocols", self.contact_protocols.as_deref())
            .list("notificationTriggers", self.notification_triggers.as_deref())
            .field("notificationEnabled", self.notification_enabled.as_ref())
            .finish()
    }
}

/// A builder for [`Alarm`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlarmBuilder {
    name: Option<String>,
    arn: Option<String>,
    created_at: Option<DateTime<Utc>>,
    location: Option<ResourceLocation>,
    resource_type: Option<String>,
    support_code: Option<String>,
    monitored_resource_info: Option<MonitoredResourceInfo>,
    comparison_operator: Option<String>,
    evaluation_periods: Option<i32>,
    period: Option<i32>,
    threshold: Option<f64>,
    datapoints_to_alarm: Option<i32>,
    treat_missing_data: Option<String>,
    statistic: Option<String>,
    metric_name: Option<String>,
    state: Option<String>,
    unit: Option<String>,
    contact_protocols: Option<Vec<String>>,
    notification_triggers: Option<Vec<String>>,
    notification_enabled: Option<bool>,
}

impl AlarmBuilder {
    /// The alarm name.
    #[must_use]
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    #[must_use]
    pub fn get_name(&self) -> &Option<String> {
        &self.name
    }

    /// The Amazon Resource Name (ARN) of the alarm.
    #[must_use]
    pub fn arn(mut self, input: impl Into<String>) -> Self {
        self.arn = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_arn(mut self, input: Option<String>) -> Self {
        self.arn = input;
        self
    }

    #[must_use]
    pub fn get_arn(&self) -> &Option<String> {
        &self.arn
    }

    /// When the alarm was created.
    #[must_use]
    pub fn created_at(mut self, input: DateTime<Utc>) -> Self {
        self.created_at = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_created_at(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.created_at = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_created_at(&self) -> &Option<DateTime<Utc>> {
        &self.created_at
    }

    /// Region and Availability Zone of the alarm.
    #[must_use]
    pub fn location(mut self, input: ResourceLocation) -> Self {
        self.location = Some(input);
        self
    }

    #[must_use]
    pub fn set_location(mut self, input: Option<ResourceLocation>) -> Self {
        self.location = input;
        self
    }

    #[must_use]
    pub fn get_location(&self) -> &Option<ResourceLocation> {
        &self.location
    }

    /// Always `Alarm` for alarms.
    ///
    /// Values are listed in [`ResourceType`](crate::enums::ResourceType).
    #[must_use]
    pub fn resource_type(mut self, input: impl Into<String>) -> Self {
        self.resource_type = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_resource_type(mut self, input: Option<String>) -> Self {
        self.resource_type = input;
        self
    }

    #[must_use]
    pub fn get_resource_type(&self) -> &Option<String> {
        &self.resource_type
    }

    /// Identifier to quote when contacting AWS Support.
    #[must_use]
    pub fn support_code(mut self, input: impl Into<String>) -> Self {
        self.support_code = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_support_code(mut self, input: Option<String>) -> Self {
        self.support_code = input;
        self
    }

    #[must_use]
    pub fn get_support_code(&self) -> &Option<String> {
        &self.support_code
    }

    /// The resource the alarm watches.
    #[must_use]
    pub fn monitored_resource_info(mut self, input: MonitoredResourceInfo) -> Self {
        self.monitored_resource_info = Some(input);
        self
    }

    #[must_use]
    pub fn set_monitored_resource_info(mut self, input: Option<MonitoredResourceInfo>) -> Self {
        self.monitored_resource_info = input;
        self
    }

    #[must_use]
    pub fn get_monitored_resource_info(&self) -> &Option<MonitoredResourceInfo> {
        &self.monitored_resource_info
    }

    /// Values are listed in [`ComparisonOperator`](crate::enums::ComparisonOperator).
    #[must_use]
    pub fn comparison_operator(mut self, input: impl Into<String>) -> Self {
        self.comparison_operator = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_comparison_operator(mut self, input: Option<String>) -> Self {
        self.comparison_operator = input;
        self
    }

    #[must_use]
    pub fn get_comparison_operator(&self) -> &Option<String> {
        &self.comparison_operator
    }

    /// Number of most recent periods over which data is compared to the threshold.
    #[must_use]
    pub fn evaluation_periods(mut self, input: i32) -> Self {
        self.evaluation_periods = Some(input);
        self
    }

    #[must_use]
    pub fn set_evaluation_periods(mut self, input: Option<i32>) -> Self {
        self.evaluation_periods = input;
        self
    }

    #[must_use]
    pub fn get_evaluation_periods(&self) -> &Option<i32> {
        &self.evaluation_periods
    }

    /// Period in seconds over which the statistic is applied.
    #[must_use]
    pub fn period(mut self, input: i32) -> Self {
        self.period = Some(input);
        self
    }

    #[must_use]
    pub fn set_period(mut self, input: Option<i32>) -> Self {
        self.period = input;
        self
    }

    #[must_use]
    pub fn get_period(&self) -> &Option<i32> {
        &self.period
    }

    /// The value the statistic is compared against.
    #[must_use]
    pub fn threshold(mut self, input: f64) -> Self {
        self.threshold = Some(input);
        self
    }

    #[must_use]
    pub fn set_threshold(mut self, input: Option<f64>) -> Self {
        self.threshold = input;
        self
    }

    #[must_use]
    pub fn get_threshold(&self) -> &Option<f64> {
        &self.threshold
    }

    /// Number of breaching data points that trigger the alarm.
    #[must_use]
    pub fn datapoints_to_alarm(mut self, input: i32) -> Self {
        self.datapoints_to_alarm = Some(input);
        self
    }

    #[must_use]
    pub fn set_datapoints_to_alarm(mut self, input: Option<i32>) -> Self {
        self.datapoints_to_alarm = input;
        self
    }

    #[must_use]
    pub fn get_datapoints_to_alarm(&self) -> &Option<i32> {
        &self.datapoints_to_alarm
    }

    /// How missing data points are treated.
    ///
    /// The service defaults to `missing` when unset.
    ///
    /// Values are listed in [`TreatMissingData`](crate::enums::TreatMissingData).
    #[must_use]
    pub fn treat_missing_data(mut self, input: impl Into<String>) -> Self {
        self.treat_missing_data = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_treat_missing_data(mut self, input: Option<String>) -> Self {
        self.treat_missing_data = input;
        self
    }

    #[must_use]
    pub fn get_treat_missing_data(&self) -> &Option<String> {
        &self.treat_missing_data
    }

    /// Values are listed in [`MetricStatistic`](crate::enums::MetricStatistic).
    #[must_use]
    pub fn statistic(mut self, input: impl Into<String>) -> Self {
        self.statistic = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_statistic(mut self, input: Option<String>) -> Self {
        self.statistic = input;
        self
    }

    #[must_use]
    pub fn get_statistic(&self) -> &Option<String> {
        &self.statistic
    }

    /// Values are listed in [`MetricName`](crate::enums::MetricName).
    #[must_use]
    pub fn metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_metric_name(mut self, input: Option<String>) -> Self {
        self.metric_name = input;
        self
    }

    #[must_use]
    pub fn get_metric_name(&self) -> &Option<String> {
        &self.metric_name
    }

    /// Values are listed in [`AlarmState`](crate::enums::AlarmState).
    #[must_use]
    pub fn state(mut self, input: impl Into<String>) -> Self {
        self.state = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_state(mut self, input: Option<String>) -> Self {
        self.state = input;
        self
    }

    #[must_use]
    pub fn get_state(&self) -> &Option<String> {
        &self.state
    }

    /// Values are listed in [`MetricUnit`](crate::enums::MetricUnit).
    #[must_use]
    pub fn unit(mut self, input: impl Into<String>) -> Self {
        self.unit = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_unit(mut self, input: Option<String>) -> Self {
        self.unit = input;
        self
    }

    #[must_use]
    pub fn get_unit(&self) -> &Option<String> {
        &self.unit
    }

    /// Appends an item to `contact_protocols`.
    ///
    /// To override the contents of this collection use
    /// [`set_contact_protocols`](Self::set_contact_protocols).
    ///
    /// Values are listed in [`ContactProtocol`](crate::enums::ContactProtocol).
    #[must_use]
    pub fn contact_protocols(mut self, input: impl Into<String>) -> Self {
        self.contact_protocols.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `contact_protocols`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_contact_protocols<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.contact_protocols
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_contact_protocols(mut self, input: Option<Vec<String>>) -> Self {
        self.contact_protocols = input;
        self
    }

    #[must_use]
    pub fn get_contact_protocols(&self) -> &Option<Vec<String>> {
        &self.contact_protocols
    }

    /// Appends an item to `notification_triggers`.
    ///
    /// To override the contents of this collection use
    /// [`set_notification_triggers`](Self::set_notification_triggers).
    ///
    /// Values are listed in [`AlarmState`](crate::enums::AlarmState).
    #[must_use]
    pub fn notification_triggers(mut self, input: impl Into<String>) -> Self {
        self.notification_triggers.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `notification_triggers`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_notification_triggers<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.notification_triggers
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_notification_triggers(mut self, input: Option<Vec<String>>) -> Self {
        self.notification_triggers = input;
        self
    }

    #[must_use]
    pub fn get_notification_triggers(&self) -> &Option<Vec<String>> {
        &self.notification_triggers
    }

    #[must_use]
    pub fn notification_enabled(mut self, input: bool) -> Self {
        self.notification_enabled = Some(input);
        self
    }

    #[must_use]
    pub fn set_notification_enabled(mut self, input: Option<bool>) -> Self {
        self.notification_enabled = input;
        self
    }

    #[must_use]
    pub fn get_notification_enabled(&self) -> &Option<bool> {
        &self.notification_enabled
    }

    /// Consumes the builder and constructs a [`Alarm`].
    #[must_use]
    pub fn build(self) -> Alarm {
        Alarm {
            name: self.name,
            arn: self.arn,
            created_at: self.created_at,
            location: self.location,
            resource_type: self.resource_type,
            support_code: self.support_code,
            monitored_resource_info: self.monitored_resource_info,
            comparison_operator: self.comparison_operator,
            evaluation_periods: self.evaluation_periods,
            period: self.period,
            threshold: self.threshold.map(FloatBits),
            datapoints_to_alarm: self.datapoints_to_alarm,
            treat_missing_data: self.treat_missing_data,
            statistic: self.statistic,
            metric_name: self.metric_name,
            state: self.state,
            unit: self.unit,
            contact_protocols: self.contact_protocols,
            notification_triggers: self.notification_triggers,
            notification_enabled: self.notification_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use chrono::TimeZone;

    use super::*;
    use crate::enums::{AlarmState, LightsailEnum, MetricName, ResourceType, TreatMissingData};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    const GET_ALARMS_ENTRY: &str = r#"{
        "name": "cpu-alarm",
        "arn": "arn:aws:lightsail:us-east-2:123456789012:Alarm/3a6b",
        "createdAt": 1700000000,
        "location": {"availabilityZone": "all", "regionName": "us-east-2"},
        "resourceType": "Alarm",
        "supportCode": "123456789012/cpu-alarm",
        "monitoredResourceInfo": {
            "arn": "arn:aws:lightsail:us-east-2:123456789012:Instance/9f2c",
            "name": "web-1",
            "resourceType": "Instance"
        },
        "comparisonOperator": "GreaterThanOrEqualToThreshold",
        "evaluationPeriods": 3,
        "period": 300,
        "threshold": 80.0,
        "datapointsToAlarm": 2,
        "treatMissingData": "notBreaching",
        "statistic": "Average",
        "metricName": "CPUUtilization",
        "state": "OK",
        "unit": "Percent",
        "contactProtocols": ["Email"],
        "notificationTriggers": ["ALARM", "INSUFFICIENT_DATA"],
        "notificationEnabled": true
    }"#;

    #[test]
    fn test_should_deserialize_service_alarm() {
        let alarm: Alarm = serde_json::from_str(GET_ALARMS_ENTRY).expect("deserialize alarm");

        assert_eq!(alarm.name(), Some("cpu-alarm"));
        assert_eq!(alarm.created_at(), Utc.timestamp_opt(1_700_000_000, 0).single());
        assert_eq!(alarm.threshold(), Some(80.0));
        assert_eq!(
            MetricName::from_field(alarm.metric_name()),
            Ok(MetricName::CpuUtilization)
        );
        assert_eq!(
            TreatMissingData::from_field(alarm.treat_missing_data()),
            Ok(TreatMissingData::NotBreaching)
        );
        assert_eq!(AlarmState::from_field(alarm.state()), Ok(AlarmState::Ok));
        let monitored = alarm.monitored_resource_info().expect("monitored resource");
        assert_eq!(
            ResourceType::from_field(monitored.resource_type()),
            Ok(ResourceType::Instance)
        );
        assert_eq!(
            alarm.notification_triggers(),
            Some(&["ALARM".to_owned(), "INSUFFICIENT_DATA".to_owned()][..])
        );
    }

    #[test]
    fn test_should_reserialize_to_same_document() {
        let alarm: Alarm = serde_json::from_str(GET_ALARMS_ENTRY).expect("deserialize alarm");
        let expected: serde_json::Value =
            serde_json::from_str(GET_ALARMS_ENTRY).expect("parse document");
        assert_eq!(serde_json::to_value(&alarm).expect("serialize alarm"), expected);
    }

    #[test]
    fn test_should_hash_equal_alarms_equally() {
        let a: Alarm = serde_json::from_str(GET_ALARMS_ENTRY).expect("deserialize alarm");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Alarm::builder().name("cpu-alarm").build();
        assert_ne!(a, c);
    }

    #[test]
    fn test_should_keep_future_resource_type() {
        let alarm = Alarm::builder().resource_type("FutureResourceKind").build();
        assert_eq!(alarm.resource_type(), Some("FutureResourceKind"));
        assert_eq!(alarm.to_string(), "{resourceType: FutureResourceKind}");
    }

    #[test]
    fn test_should_render_empty_alarm() {
        assert_eq!(Alarm::default().to_string(), "{}");
        assert_eq!(Alarm::builder().build(), Alarm::default());
    }
}
