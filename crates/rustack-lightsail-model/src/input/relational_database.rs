//! Managed database operation inputs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operations::{LightsailInput, LightsailOperation};
use crate::shape::ShapeFormatter;
use crate::timestamp;
use crate::types::Tag;

/// Request of the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRelationalDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_blueprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateRelationalDatabaseInput {
    /// Creates a new builder-style object to manufacture [`CreateRelationalDatabaseInput`].
    #[must_use]
    pub fn builder() -> CreateRelationalDatabaseInputBuilder {
        CreateRelationalDatabaseInputBuilder::default()
    }

    #[must_use]
    pub fn relational_database_name(&self) -> Option<&str> {
        self.relational_database_name.as_deref()
    }

    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// The engine blueprint, e.g. `mysql_8_0`.
    #[must_use]
    pub fn relational_database_blueprint_id(&self) -> Option<&str> {
        self.relational_database_blueprint_id.as_deref()
    }

    /// The bundle (size) of the database.
    #[must_use]
    pub fn relational_database_bundle_id(&self) -> Option<&str> {
        self.relational_database_bundle_id.as_deref()
    }

    /// Name of the database created with the instance.
    #[must_use]
    pub fn master_database_name(&self) -> Option<&str> {
        self.master_database_name.as_deref()
    }

    #[must_use]
    pub fn master_username(&self) -> Option<&str> {
        self.master_username.as_deref()
    }

    /// Generated by the service when unset.
    #[must_use]
    pub fn master_user_password(&self) -> Option<&str> {
        self.master_user_password.as_deref()
    }

    /// Daily backup window in UTC, `hh24:mi-hh24:mi` format.
    #[must_use]
    pub fn preferred_backup_window(&self) -> Option<&str> {
        self.preferred_backup_window.as_deref()
    }

    /// Weekly maintenance window in UTC, `ddd:hh24:mi-ddd:hh24:mi` format.
    #[must_use]
    pub fn preferred_maintenance_window(&self) -> Option<&str> {
        self.preferred_maintenance_window.as_deref()
    }

    #[must_use]
    pub fn publicly_accessible(&self) -> Option<bool> {
        self.publicly_accessible
    }

    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }
}

impl fmt::Display for CreateRelationalDatabaseInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("relationalDatabaseName", self.relational_database_name.as_deref())
            .field("availabilityZone", self.availability_zone.as_deref())
            .field(
                "relationalDatabaseBlueprintId",
                self.relational_database_blueprint_id.as_deref(),
            )
            .field("relationalDatabaseBundleId", self.relational_database_bundle_id.as_deref())
            .field("masterDatabaseName", self.master_database_name.as_deref())
            .field("masterUsername", self.master_username.as_deref())
            .field("masterUserPassword", self.master_user_password.as_deref())
            .field("preferredBackupWindow", self.preferred_backup_window.as_deref())
            .field("preferredMaintenanceWindow", self.preferred_maintenance_window.as_deref())
            .field("publiclyAccessible", self.publicly_accessible.as_ref())
            .list("tags", self.tags.as_deref())
            .finish()
    }
}

/// A builder for [`CreateRelationalDatabaseInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRelationalDatabaseInputBuilder {
    relational_database_name: Option<String>,
    availability_zone: Option<String>,
    relational_database_blueprint_id: Option<String>,
    relational_database_bundle_id: Option<String>,
    master_database_name: Option<String>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    publicly_accessible: Option<bool>,
    tags: Option<Vec<Tag>>,
}

impl CreateRelationalDatabaseInputBuilder {
    #[must_use]
    pub fn relational_database_name(mut self, input: impl Into<String>) -> Self {
        self.relational_database_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_relational_database_name(mut self, input: Option<String>) -> Self {
        self.relational_database_name = input;
        self
    }

    #[must_use]
    pub fn get_relational_database_name(&self) -> &Option<String> {
        &self.relational_database_name
    }

    #[must_use]
    pub fn availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_availability_zone(mut self, input: Option<String>) -> Self {
        self.availability_zone = input;
        self
    }

    #[must_use]
    pub fn get_availability_zone(&self) -> &Option<String> {
        &self.availability_zone
    }

    /// The engine blueprint, e.g. `mysql_8_0`.
    #[must_use]
    pub fn relational_database_blueprint_id(mut self, input: impl Into<String>) -> Self {
        self.relational_database_blueprint_id = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_relational_database_blueprint_id(mut self, input: Option<String>) -> Self {
        self.relational_database_blueprint_id = input;
        self
    }

    #[must_use]
    pub fn get_relational_database_blueprint_id(&self) -> &Option<String> {
        &self.relational_database_blueprint_id
    }

    /// The bundle (size) of the database.
    #[must_use]
    pub fn relational_database_bundle_id(mut self, input: impl Into<String>) -> Self {
        self.relational_database_bundle_id = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_relational_database_bundle_id(mut self, input: Option<String>) -> Self {
        self.relational_database_bundle_id = input;
        self
    }

    #[must_use]
    pub fn get_relational_database_bundle_id(&self) -> &Option<String> {
        &self.relational_database_bundle_id
    }

    /// Name of the database created with the instance.
    #[must_use]
    pub fn master_database_name(mut self, input: impl Into<String>) -> Self {
        self.master_database_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_master_database_name(mut self, input: Option<String>) -> Self {
        self.master_database_name = input;
        self
    }

    #[must_use]
    pub fn get_master_database_name(&self) -> &Option<String> {
        &self.master_database_name
    }

    #[must_use]
    pub fn master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_master_username(mut self, input: Option<String>) -> Self {
        self.master_username = input;
        self
    }

    #[must_use]
    pub fn get_master_username(&self) -> &Option<String> {
        &self.master_username
    }

    /// Generated by the service when unset.
    #[must_use]
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    #[must_use]
    pub fn get_master_user_password(&self) -> &Option<String> {
        &self.master_user_password
    }

    /// Daily backup window in UTC, `hh24:mi-hh24:mi` format.
    #[must_use]
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    #[must_use]
    pub fn get_preferred_backup_window(&self) -> &Option<String> {
        &self.preferred_backup_window
    }

    /// Weekly maintenance window in UTC, `ddd:hh24:mi-ddd:hh24:mi` format.
    #[must_use]
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    #[must_use]
    pub fn get_preferred_maintenance_window(&self) -> &Option<String> {
        &self.preferred_maintenance_window
    }

    #[must_use]
    pub fn publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    #[must_use]
    pub fn set_publicly_accessible(mut self, input: Option<bool>) -> Self {
        self.publicly_accessible = input;
        self
    }

    #[must_use]
    pub fn get_publicly_accessible(&self) -> &Option<bool> {
        &self.publicly_accessible
    }

    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    #[must_use]
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `tags`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_tags(mut self, inputs: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    #[must_use]
    pub fn get_tags(&self) -> &Option<Vec<Tag>> {
        &self.tags
    }

    /// Consumes the builder and constructs a [`CreateRelationalDatabaseInput`].
    #[must_use]
    pub fn build(self) -> CreateRelationalDatabaseInput {
        CreateRelationalDatabaseInput {
            relational_database_name: self.relational_database_name,
            availability_zone: self.availability_zone,
            relational_database_blueprint_id: self.relational_database_blueprint_id,
            relational_database_bundle_id: self.relational_database_bundle_id,
            master_database_name: self.master_database_name,
            master_username: self.master_username,
            master_user_password: self.master_user_password,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            publicly_accessible: self.publicly_accessible,
            tags: self.tags,
        }
    }
}

impl LightsailInput for CreateRelationalDatabaseInput {
    const OPERATION: LightsailOperation = LightsailOperation::CreateRelationalDatabase;
}

/// Request of the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRelationalDatabaseMetricDataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    start_time: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<Vec<String>>,
}

impl GetRelationalDatabaseMetricDataInput {
    /// Creates a new builder-style object to manufacture [`GetRelationalDatabaseMetricDataInput`].
    #[must_use]
    pub fn builder() -> GetRelationalDatabaseMetricDataInputBuilder {
        GetRelationalDatabaseMetricDataInputBuilder::default()
    }

    #[must_use]
    pub fn relational_database_name(&self) -> Option<&str> {
        self.relational_database_name.as_deref()
    }

    /// Values are listed in
    /// [`RelationalDatabaseMetricName`](crate::enums::RelationalDatabaseMetricName).
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Granularity of the returned data points, in seconds.
    #[must_use]
    pub fn period(&self) -> Option<i32> {
        self.period
    }

    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Values are listed in [`MetricUnit`](crate::enums::MetricUnit).
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Values are listed in [`MetricStatistic`](crate::enums::MetricStatistic).
    #[must_use]
    pub fn statistics(&self) -> Option<&[String]> {
        self.statistics.as_deref()
    }
}

impl fmt::Display for GetRelationalDatabaseMetricDataInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("relationalDatabaseName", self.relational_database_name.as_deref())
            .field("metricName", self.metric_name.as_deref())
            .field("period", self.period.as_ref())
            .field("startTime", self.start_time.as_ref())
            .field("endTime", self.end_time.as_ref())
            .field("unit", self.unit.as_deref())
            .list("statistics", self.statistics.as_deref())
            .finish()
    }
}

/// A builder for [`GetRelationalDatabaseMetricDataInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRelationalDatabaseMetricDataInputBuilder {
    relational_database_name: Option<String>,
    metric_name: Option<String>,
    period: Option<i32>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    unit: Option<String>,
    statistics: Option<Vec<String>>,
}

impl GetRelationalDatabaseMetricDataInputBuilder {
    #[must_use]
    pub fn relational_database_name(mut self, input: impl Into<String>) -> Self {
        self.relational_database_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_relational_database_name(mut self, input: Option<String>) -> Self {
        self.relational_database_name = input;
        self
    }

    #[must_use]
    pub fn get_relational_database_name(&self) -> &Option<String> {
        &self.relational_database_name
    }

    /// Values are listed in
    /// [`RelationalDatabaseMetricName`](crate::enums::RelationalDatabaseMetricName).
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

    /// Granularity of the returned data points, in seconds.
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

    #[must_use]
    pub fn start_time(mut self, input: DateTime<Utc>) -> Self {
        self.start_time = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_start_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.start_time = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_start_time(&self) -> &Option<DateTime<Utc>> {
        &self.start_time
    }

    #[must_use]
    pub fn end_time(mut self, input: DateTime<Utc>) -> Self {
        self.end_time = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_end_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.end_time = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_end_time(&self) -> &Option<DateTime<Utc>> {
        &self.end_time
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

    /// Appends an item to `statistics`.
    ///
    /// To override the contents of this collection use [`set_statistics`](Self::set_statistics).
    ///
    /// Values are listed in [`MetricStatistic`](crate::enums::MetricStatistic).
    #[must_use]
    pub fn statistics(mut self, input: impl Into<String>) -> Self {
        self.statistics.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `statistics`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_statistics<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.statistics
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_statistics(mut self, input: Option<Vec<String>>) -> Self {
        self.statistics = input;
        self
    }

    #[must_use]
    pub fn get_statistics(&self) -> &Option<Vec<String>> {
        &self.statistics
    }

    /// Consumes the builder and constructs a [`GetRelationalDatabaseMetricDataInput`].
    #[must_use]
    pub fn build(self) -> GetRelationalDatabaseMetricDataInput {
        GetRelationalDatabaseMetricDataInput {
            relational_database_name: self.relational_database_name,
            metric_name: self.metric_name,
            period: self.period,
            start_time: self.start_time,
            end_time: self.end_time,
            unit: self.unit,
            statistics: self.statistics,
        }
    }
}

impl LightsailInput for GetRelationalDatabaseMetricDataInput {
    const OPERATION: LightsailOperation = LightsailOperation::GetRelationalDatabaseMetricData;
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::enums::{MetricStatistic, MetricUnit, RelationalDatabaseMetricName};

    #[test]
    fn test_should_serialize_metric_request_with_epoch_timestamps() {
        let input = GetRelationalDatabaseMetricDataInput::builder()
            .relational_database_name("orders-db")
            .metric_name(RelationalDatabaseMetricName::CpuUtilization)
            .period(300)
            .start_time(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
            .end_time(Utc.timestamp_opt(1_700_003_600, 0).unwrap())
            .unit(MetricUnit::Percent)
            .extend_statistics([MetricStatistic::Average, MetricStatistic::Maximum])
            .build();

        let json = serde_json::to_value(&input).expect("serialize metric request");
        assert_eq!(
            json,
            serde_json::json!({
                "relationalDatabaseName": "orders-db",
                "metricName": "CPUUtilization",
                "period": 300,
                "startTime": 1_700_000_000,
                "endTime": 1_700_003_600,
                "unit": "Percent",
                "statistics": ["Average", "Maximum"]
            })
        );
    }

    #[test]
    fn test_should_mix_raw_and_typed_statistics() {
        let input = GetRelationalDatabaseMetricDataInput::builder()
            .statistics(MetricStatistic::Sum)
            .statistics("p99")
            .build();
        assert_eq!(
            input.statistics(),
            Some(&["Sum".to_owned(), "p99".to_owned()][..])
        );
    }

    #[test]
    fn test_should_build_create_database_request() {
        let input = CreateRelationalDatabaseInput::builder()
            .relational_database_name("orders-db")
            .relational_database_blueprint_id("mysql_8_0")
            .relational_database_bundle_id("micro_2_0")
            .master_database_name("orders")
            .master_username("admin")
            .publicly_accessible(false)
            .tags(Tag::builder().key("team").value("billing").build())
            .build();

        assert_eq!(input.master_user_password(), None);
        assert_eq!(input.publicly_accessible(), Some(false));
        assert_eq!(
            CreateRelationalDatabaseInput::OPERATION.target(),
            "Lightsail_20161128.CreateRelationalDatabase"
        );
        let rendered = input.to_string();
        assert!(rendered.contains("publiclyAccessible: false"));
        assert!(rendered.ends_with("tags: [{key: team, value: billing}]}"));
    }

    #[test]
    fn test_should_roundtrip_through_json() {
        let input = CreateRelationalDatabaseInput::builder()
            .relational_database_name("orders-db")
            .preferred_backup_window("16:00-16:30")
            .build();
        let json = serde_json::to_string(&input).expect("serialize");
        let parsed: CreateRelationalDatabaseInput =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_should_roundtrip_sub_millisecond_timestamps() {
        let start = DateTime::from_timestamp(1_700_000_000, 500_000).expect("valid start");
        let end = DateTime::from_timestamp(1_700_003_600, 250_999_999).expect("valid end");
        let input = GetRelationalDatabaseMetricDataInput::builder()
            .relational_database_name("orders-db")
            .start_time(start)
            .set_end_time(Some(end))
            .build();
        assert_eq!(input.start_time(), DateTime::from_timestamp(1_700_000_000, 0));
        assert_eq!(input.end_time().map(|t| t.timestamp_millis()), Some(1_700_003_600_250));

        let json = serde_json::to_string(&input).expect("serialize");
        assert!(json.contains(r#""startTime":1700000000"#));
        assert!(json.contains(r#""endTime":1700003600.25"#));
        let parsed: GetRelationalDatabaseMetricDataInput =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, input);
    }
}
