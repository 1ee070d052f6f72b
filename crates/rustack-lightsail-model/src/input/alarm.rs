//! Alarm operation inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operations::{LightsailInput, LightsailOperation};
use crate::shape::{FloatBits, ShapeFormatter};

/// Request of the `PutAlarm` operation.
///
/// Creates an alarm or replaces the settings of an existing alarm with the same
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutAlarmInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    alarm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitored_resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_periods: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    treat_missing_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_protocols: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_triggers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_enabled: Option<bool>,
}

impl PutAlarmInput {
    /// Creates a new builder-style object to manufacture [`PutAlarmInput`].
    #[must_use]
    pub fn builder() -> PutAlarmInputBuilder {
        PutAlarmInputBuilder::default()
    }

    /// The alarm name. An existing alarm with this name is updated.
    #[must_use]
    pub fn alarm_name(&self) -> Option<&str> {
        self.alarm_name.as_deref()
    }

    /// The metric to watch.
    ///
    /// Values are listed in [`MetricName`](crate::enums::MetricName).
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// The instance, load balancer or managed database to watch.
    #[must_use]
    pub fn monitored_resource_name(&self) -> Option<&str> {
        self.monitored_resource_name.as_deref()
    }

    /// Values are listed in [`ComparisonOperator`](crate::enums::ComparisonOperator).
    #[must_use]
    pub fn comparison_operator(&self) -> Option<&str> {
        self.comparison_operator.as_deref()
    }

    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold.map(f64::from)
    }

    /// Number of most recent periods over which data is compared to the threshold.
    #[must_use]
    pub fn evaluation_periods(&self) -> Option<i32> {
        self.evaluation_periods
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

    /// Values are listed in [`ContactProtocol`](crate::enums::ContactProtocol).
    #[must_use]
    pub fn contact_protocols(&self) -> Option<&[String]> {
        self.contact_protocols.as_deref()
    }

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

impl fmt::Display for PutAlarmInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("alarmName", self.alarm_name.as_deref())
            .field("metricName", self.metric_name.as_deref())
            .field("monitoredResourceName", self.monitored_resource_name.as_deref())
            .field("comparisonOperator", self.comparison_operator.as_deref())
            .field("threshold", self.threshold.as_ref())
            .field("evaluationPeriods", self.evaluation_periods.as_ref())
            .field("datapointsToAlarm", self.datapoints_to_alarm.as_ref())
            .field("treatMissingData", self.treat_missing_data.as_deref())
            .list("contactProtocols", self.contact_protocols.as_deref())
            .list("notificationTriggers", self.notification_triggers.as_deref())
            .field("notificationEnabled", self.notification_enabled.as_ref())
            .finish()
    }
}

/// A builder for [`PutAlarmInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutAlarmInputBuilder {
    alarm_name: Option<String>,
    metric_name: Option<String>,
    monitored_resource_name: Option<String>,
    comparison_operator: Option<String>,
    threshold: Option<f64>,
    evaluation_periods: Option<i32>,
    datapoints_to_alarm: Option<i32>,
    treat_missing_data: Option<String>,
    contact_protocols: Option<Vec<String>>,
    notification_triggers: Option<Vec<String>>,
    notification_enabled: Option<bool>,
}

impl PutAlarmInputBuilder {
    /// The alarm name. An existing alarm with this name is updated.
    #[must_use]
    pub fn alarm_name(mut self, input: impl Into<String>) -> Self {
        self.alarm_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_alarm_name(mut self, input: Option<String>) -> Self {
        self.alarm_name = input;
        self
    }

    #[must_use]
    pub fn get_alarm_name(&self) -> &Option<String> {
        &self.alarm_name
    }

    /// The metric to watch.
    ///
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

    /// The instance, load balancer or managed database to watch.
    #[must_use]
    pub fn monitored_resource_name(mut self, input: impl Into<String>) -> Self {
        self.monitored_resource_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_monitored_resource_name(mut self, input: Option<String>) -> Self {
        self.monitored_resource_name = input;
        self
    }

    #[must_use]
    pub fn get_monitored_resource_name(&self) -> &Option<String> {
        &self.monitored_resource_name
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

    /// Consumes the builder and constructs a [`PutAlarmInput`].
    #[must_use]
    pub fn build(self) -> PutAlarmInput {
        PutAlarmInput {
            alarm_name: self.alarm_name,
            metric_name: self.metric_name,
            monitored_resource_name: self.monitored_resource_name,
            comparison_operator: self.comparison_operator,
            threshold: self.threshold.map(FloatBits),
            evaluation_periods: self.evaluation_periods,
            datapoints_to_alarm: self.datapoints_to_alarm,
            treat_missing_data: self.treat_missing_data,
            contact_protocols: self.contact_protocols,
            notification_triggers: self.notification_triggers,
            notification_enabled: self.notification_enabled,
        }
    }
}

impl LightsailInput for PutAlarmInput {
    const OPERATION: LightsailOperation = LightsailOperation::PutAlarm;
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;
    use crate::enums::{AlarmState, ComparisonOperator, ContactProtocol, LightsailEnum, MetricName};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn cpu_alarm() -> PutAlarmInput {
        PutAlarmInput::builder()
            .alarm_name("cpu-alarm")
            .metric_name(MetricName::CpuUtilization)
            .threshold(80.0)
            .evaluation_periods(3)
            .build()
    }

    #[test]
    fn test_should_store_enum_member_as_canonical_string() {
        let input = cpu_alarm();
        assert_eq!(input.metric_name(), Some("CPUUtilization"));
        assert_eq!(input.alarm_name(), Some("cpu-alarm"));
        assert_eq!(input.threshold(), Some(80.0));
        assert_eq!(input.evaluation_periods(), Some(3));
        assert_eq!(input.datapoints_to_alarm(), None);
    }

    #[test]
    fn test_should_equal_independently_built_twin() {
        let a = cpu_alarm();
        let b = PutAlarmInput::builder()
            .evaluation_periods(3)
            .threshold(80.0)
            .metric_name("CPUUtilization")
            .alarm_name("cpu-alarm")
            .build();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_should_differ_on_single_field() {
        let a = cpu_alarm();
        let b = PutAlarmInput::builder()
            .alarm_name("cpu-alarm")
            .metric_name(MetricName::CpuUtilization)
            .threshold(80.5)
            .evaluation_periods(3)
            .build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_should_display_set_fields_only() {
        let rendered = cpu_alarm().to_string();
        assert!(rendered.contains("metricName: CPUUtilization"));
        assert!(rendered.contains("threshold: 80.0"));
        assert!(rendered.starts_with("{alarmName: cpu-alarm, "));
        assert!(!rendered.contains("datapointsToAlarm"));
        assert_eq!(PutAlarmInput::default().to_string(), "{}");
    }

    #[test]
    fn test_should_append_list_values_across_calls() {
        let input = PutAlarmInput::builder()
            .extend_notification_triggers([AlarmState::Alarm, AlarmState::Ok])
            .extend_notification_triggers([AlarmState::Alarm, AlarmState::Ok])
            .build();
        assert_eq!(
            input.notification_triggers(),
            Some(&["ALARM".to_owned(), "OK".to_owned(), "ALARM".to_owned(), "OK".to_owned()][..])
        );
    }

    #[test]
    fn test_should_allocate_list_for_empty_extend() {
        let input = PutAlarmInput::builder()
            .extend_contact_protocols(Vec::<ContactProtocol>::new())
            .build();
        assert_eq!(input.contact_protocols(), Some(&[][..]));
        assert_ne!(input, PutAlarmInput::default());
    }

    #[test]
    fn test_should_clear_list_with_set_none() {
        let input = PutAlarmInput::builder()
            .contact_protocols(ContactProtocol::Email)
            .set_contact_protocols(None)
            .build();
        assert_eq!(input.contact_protocols(), None);
    }

    #[test]
    fn test_should_replace_list_with_set() {
        let builder = PutAlarmInput::builder()
            .contact_protocols(ContactProtocol::Email)
            .set_contact_protocols(Some(vec!["SMS".to_owned()]));
        assert_eq!(builder.get_contact_protocols(), &Some(vec!["SMS".to_owned()]));
    }

    #[test]
    fn test_should_accept_unrecognized_string_verbatim() {
        let input = PutAlarmInput::builder()
            .comparison_operator("EqualToThreshold")
            .build();
        assert_eq!(input.comparison_operator(), Some("EqualToThreshold"));
        assert!(ComparisonOperator::from_field(input.comparison_operator()).is_err());
    }

    #[test]
    fn test_should_serialize_camel_case_without_unset_fields() {
        let input = PutAlarmInput::builder()
            .alarm_name("cpu-alarm")
            .metric_name(MetricName::CpuUtilization)
            .monitored_resource_name("web-1")
            .comparison_operator(ComparisonOperator::GreaterThanOrEqualToThreshold)
            .threshold(80.0)
            .evaluation_periods(3)
            .notification_enabled(true)
            .build();
        let json = serde_json::to_value(&input).expect("serialize PutAlarmInput");
        assert_eq!(
            json,
            serde_json::json!({
                "alarmName": "cpu-alarm",
                "metricName": "CPUUtilization",
                "monitoredResourceName": "web-1",
                "comparisonOperator": "GreaterThanOrEqualToThreshold",
                "threshold": 80.0,
                "evaluationPeriods": 3,
                "notificationEnabled": true
            })
        );
    }

    #[test]
    fn test_should_name_operation() {
        assert_eq!(PutAlarmInput::OPERATION, LightsailOperation::PutAlarm);
    }
}
