//! Lightsail output types.
//!
//! Mutating operations answer with the list of asynchronous [`Operation`]
//! records they started.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::ShapeFormatter;
use crate::types::{MetricDatapoint, Operation};

/// Response of the `PutAlarm` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutAlarmOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    operations: Option<Vec<Operation>>,
}

impl PutAlarmOutput {
    /// Creates a new builder-style object to manufacture [`PutAlarmOutput`].
    #[must_use]
    pub fn builder() -> PutAlarmOutputBuilder {
        PutAlarmOutputBuilder::default()
    }

    #[must_use]
    pub fn operations(&self) -> Option<&[Operation]> {
        self.operations.as_deref()
    }
}

impl fmt::Display for PutAlarmOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("operations", self.operations.as_deref())
            .finish()
    }
}

/// A builder for [`PutAlarmOutput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutAlarmOutputBuilder {
    operations: Option<Vec<Operation>>,
}

impl PutAlarmOutputBuilder {
    /// Appends an item to `operations`.
    ///
    /// To override the contents of this collection use [`set_operations`](Self::set_operations).
    #[must_use]
    pub fn operations(mut self, input: Operation) -> Self {
        self.operations.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `operations`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_operations(mut self, inputs: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_operations(mut self, input: Option<Vec<Operation>>) -> Self {
        self.operations = input;
        self
    }

    #[must_use]
    pub fn get_operations(&self) -> &Option<Vec<Operation>> {
        &self.operations
    }

    /// Consumes the builder and constructs a [`PutAlarmOutput`].
    #[must_use]
    pub fn build(self) -> PutAlarmOutput {
        PutAlarmOutput {
            operations: self.operations,
        }
    }
}

/// Response of the `CreateInstancesFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateInstancesFromSnapshotOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    operations: Option<Vec<Operation>>,
}

impl CreateInstancesFromSnapshotOutput {
    /// Creates a new builder-style object to manufacture [`CreateInstancesFromSnapshotOutput`].
    #[must_use]
    pub fn builder() -> CreateInstancesFromSnapshotOutputBuilder {
        CreateInstancesFromSnapshotOutputBuilder::default()
    }

    /// One record per instance being created.
    #[must_use]
    pub fn operations(&self) -> Option<&[Operation]> {
        self.operations.as_deref()
    }
}

impl fmt::Display for CreateInstancesFromSnapshotOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("operations", self.operations.as_deref())
            .finish()
    }
}

/// A builder for [`CreateInstancesFromSnapshotOutput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateInstancesFromSnapshotOutputBuilder {
    operations: Option<Vec<Operation>>,
}

impl CreateInstancesFromSnapshotOutputBuilder {
    /// Appends an item to `operations`.
    ///
    /// To override the contents of this collection use [`set_operations`](Self::set_operations).
    #[must_use]
    pub fn operations(mut self, input: Operation) -> Self {
        self.operations.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `operations`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_operations(mut self, inputs: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_operations(mut self, input: Option<Vec<Operation>>) -> Self {
        self.operations = input;
        self
    }

    #[must_use]
    pub fn get_operations(&self) -> &Option<Vec<Operation>> {
        &self.operations
    }

    /// Consumes the builder and constructs a [`CreateInstancesFromSnapshotOutput`].
    #[must_use]
    pub fn build(self) -> CreateInstancesFromSnapshotOutput {
        CreateInstancesFromSnapshotOutput {
            operations: self.operations,
        }
    }
}

/// Response of the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRelationalDatabaseOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    operations: Option<Vec<Operation>>,
}

impl CreateRelationalDatabaseOutput {
    /// Creates a new builder-style object to manufacture [`CreateRelationalDatabaseOutput`].
    #[must_use]
    pub fn builder() -> CreateRelationalDatabaseOutputBuilder {
        CreateRelationalDatabaseOutputBuilder::default()
    }

    #[must_use]
    pub fn operations(&self) -> Option<&[Operation]> {
        self.operations.as_deref()
    }
}

impl fmt::Display for CreateRelationalDatabaseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("operations", self.operations.as_deref())
            .finish()
    }
}

/// A builder for [`CreateRelationalDatabaseOutput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRelationalDatabaseOutputBuilder {
    operations: Option<Vec<Operation>>,
}

impl CreateRelationalDatabaseOutputBuilder {
    /// Appends an item to `operations`.
    ///
    /// To override the contents of this collection use [`set_operations`](Self::set_operations).
    #[must_use]
    pub fn operations(mut self, input: Operation) -> Self {
        self.operations.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `operations`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_operations(mut self, inputs: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_operations(mut self, input: Option<Vec<Operation>>) -> Self {
        self.operations = input;
        self
    }

    #[must_use]
    pub fn get_operations(&self) -> &Option<Vec<Operation>> {
        &self.operations
    }

    /// Consumes the builder and constructs a [`CreateRelationalDatabaseOutput`].
    #[must_use]
    pub fn build(self) -> CreateRelationalDatabaseOutput {
        CreateRelationalDatabaseOutput {
            operations: self.operations,
        }
    }
}

/// Response of the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRelationalDatabaseMetricDataOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_data: Option<Vec<MetricDatapoint>>,
}

impl GetRelationalDatabaseMetricDataOutput {
    /// Creates a new builder-style object to manufacture [`GetRelationalDatabaseMetricDataOutput`].
    #[must_use]
    pub fn builder() -> GetRelationalDatabaseMetricDataOutputBuilder {
        GetRelationalDatabaseMetricDataOutputBuilder::default()
    }

    /// Values are listed in
    /// [`RelationalDatabaseMetricName`](crate::enums::RelationalDatabaseMetricName).
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    #[must_use]
    pub fn metric_data(&self) -> Option<&[MetricDatapoint]> {
        self.metric_data.as_deref()
    }
}

impl fmt::Display for GetRelationalDatabaseMetricDataOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("metricName", self.metric_name.as_deref())
            .list("metricData", self.metric_data.as_deref())
            .finish()
    }
}

/// A builder for [`GetRelationalDatabaseMetricDataOutput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRelationalDatabaseMetricDataOutputBuilder {
    metric_name: Option<String>,
    metric_data: Option<Vec<MetricDatapoint>>,
}

impl GetRelationalDatabaseMetricDataOutputBuilder {
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

    /// Appends an item to `metric_data`.
    ///
    /// To override the contents of this collection use [`set_metric_data`](Self::set_metric_data).
    #[must_use]
    pub fn metric_data(mut self, input: MetricDatapoint) -> Self {
        self.metric_data.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `metric_data`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_metric_data(mut self, inputs: impl IntoIterator<Item = MetricDatapoint>) -> Self {
        self.metric_data.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_metric_data(mut self, input: Option<Vec<MetricDatapoint>>) -> Self {
        self.metric_data = input;
        self
    }

    #[must_use]
    pub fn get_metric_data(&self) -> &Option<Vec<MetricDatapoint>> {
        &self.metric_data
    }

    /// Consumes the builder and constructs a [`GetRelationalDatabaseMetricDataOutput`].
    #[must_use]
    pub fn build(self) -> GetRelationalDatabaseMetricDataOutput {
        GetRelationalDatabaseMetricDataOutput {
            metric_name: self.metric_name,
            metric_data: self.metric_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{LightsailEnum, MetricUnit, RelationalDatabaseMetricName};

    #[test]
    fn test_should_deserialize_put_alarm_output() {
        let json =
            r#"{"operations":[{"id":"a1","resourceName":"cpu-alarm","status":"Succeeded"}]}"#;
        let output: PutAlarmOutput = serde_json::from_str(json).expect("deserialize output");
        let operations = output.operations().expect("operations");
        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].status(), Some("Succeeded"));
    }

    #[test]
    fn test_should_deserialize_empty_output() {
        let output: CreateRelationalDatabaseOutput =
            serde_json::from_str("{}").expect("deserialize empty output");
        assert_eq!(output.operations(), None);
        assert_eq!(output.to_string(), "{}");
    }

    #[test]
    fn test_should_deserialize_metric_data() {
        let json = r#"{
            "metricName": "FreeStorageSpace",
            "metricData": [
                {"average": 1.5e10, "timestamp": 1700000000, "unit": "Bytes"},
                {"average": 1.4e10, "timestamp": 1700000300, "unit": "Bytes"}
            ]
        }"#;
        let output: GetRelationalDatabaseMetricDataOutput =
            serde_json::from_str(json).expect("deserialize metric data");
        assert_eq!(
            RelationalDatabaseMetricName::from_field(output.metric_name()),
            Ok(RelationalDatabaseMetricName::FreeStorageSpace)
        );
        let data = output.metric_data().expect("metric data");
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].average(), Some(1.4e10));
        assert_eq!(MetricUnit::from_field(data[1].unit()), Ok(MetricUnit::Bytes));
    }

    #[test]
    fn test_should_build_output_with_operations() {
        let output = CreateInstancesFromSnapshotOutput::builder()
            .operations(Operation::builder().resource_name("web-2").build())
            .operations(Operation::builder().resource_name("web-3").build())
            .build();
        assert_eq!(
            output.to_string(),
            "{operations: [{resourceName: web-2}, {resourceName: web-3}]}"
        );
    }
}
