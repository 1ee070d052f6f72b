//! Managed databases.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeFormatter;
use crate::timestamp;
use crate::types::{
    PendingMaintenanceAction, PendingModifiedRelationalDatabaseValues, RelationalDatabaseEndpoint,
    RelationalDatabaseHardware, ResourceLocation, Tag,
};

/// A managed database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationalDatabase {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_code: Option<String>,
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
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_blueprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relational_database_bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hardware: Option<RelationalDatabaseHardware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup_retention_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_modified_values: Option<PendingModifiedRelationalDatabaseValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine_version: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    latest_restorable_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter_apply_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    master_endpoint: Option<RelationalDatabaseEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_maintenance_actions: Option<Vec<PendingMaintenanceAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ca_certificate_identifier: Option<String>,
}

impl RelationalDatabase {
    /// Creates a new builder-style object to manufacture [`RelationalDatabase`].
    #[must_use]
    pub fn builder() -> RelationalDatabaseBuilder {
        RelationalDatabaseBuilder::default()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    #[must_use]
    pub fn support_code(&self) -> Option<&str> {
        self.support_code.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub fn location(&self) -> Option<&ResourceLocation> {
        self.location.as_ref()
    }

    /// Values are listed in [`ResourceType`](crate::enums::ResourceType).
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
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

    #[must_use]
    pub fn master_database_name(&self) -> Option<&str> {
        self.master_database_name.as_deref()
    }

    #[must_use]
    pub fn hardware(&self) -> Option<&RelationalDatabaseHardware> {
        self.hardware.as_ref()
    }

    /// The lifecycle state, e.g. `available`.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    #[must_use]
    pub fn secondary_availability_zone(&self) -> Option<&str> {
        self.secondary_availability_zone.as_deref()
    }

    #[must_use]
    pub fn backup_retention_enabled(&self) -> Option<bool> {
        self.backup_retention_enabled
    }

    #[must_use]
    pub fn pending_modified_values(&self) -> Option<&PendingModifiedRelationalDatabaseValues> {
        self.pending_modified_values.as_ref()
    }

    #[must_use]
    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    #[must_use]
    pub fn engine_version(&self) -> Option<&str> {
        self.engine_version.as_deref()
    }

    /// The latest point in time the database can be restored to.
    #[must_use]
    pub fn latest_restorable_time(&self) -> Option<DateTime<Utc>> {
        self.latest_restorable_time
    }

    #[must_use]
    pub fn master_username(&self) -> Option<&str> {
        self.master_username.as_deref()
    }

    #[must_use]
    pub fn parameter_apply_status(&self) -> Option<&str> {
        self.parameter_apply_status.as_deref()
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
    pub fn master_endpoint(&self) -> Option<&RelationalDatabaseEndpoint> {
        self.master_endpoint.as_ref()
    }

    #[must_use]
    pub fn pending_maintenance_actions(&self) -> Option<&[PendingMaintenanceAction]> {
        self.pending_maintenance_actions.as_deref()
    }

    #[must_use]
    pub fn ca_certificate_identifier(&self) -> Option<&str> {
        self.ca_certificate_identifier.as_deref()
    }
}

impl fmt::Display for RelationalDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("name", self.name.as_deref())
            .field("arn", self.arn.as_deref())
            .field("supportCode", self.support_code.as_deref())
            .field("createdAt", self.created_at.as_ref())
            .field("location", self.location.as_ref())
            .field("resourceType", self.resource_type.as_deref())
            .list("tags", self.tags.as_deref())
            .field(
                "relationalDatabaseBlueprintId",
                self.relational_database_blueprint_id.as_deref(),
            )
            .field("relationalDatabaseBundleId", self.relational_database_bundle_id.as_deref())
            .field("masterDatabaseName", self.master_database_name.as_deref())
            .field("hardware", self.hardware.as_ref())
            .field("state", self.state.as_deref())
            .field("secondaryAvailabilityZone", self.secondary_availability_zone.as_deref())
            .field("backupRetentionEnabled", self.backup_retention_enabled.as_ref())
            .field("pendingModifiedValues", self.pending_modified_values.as_ref())
            .field("engine", self.engine.as_deref())
            .field("engineVersion", self.engine_version.as_deref())
            .field("latestRestorableTime", self.latest_restorable_time.as_ref())
            .field("masterUsername", self.master_username.as_deref())
            .field("parameterApplyStatus", self.parameter_apply_status.as_deref())
            .field("preferredBackupWindow", self.preferred_backup_window.as_deref())
            .field("preferredMaintenanceWindow", self.preferred_maintenance_window.as_deref())
            .field("publiclyAccessible", self.publicly_accessible.as_ref())
            .field("masterEndpoint", self.master_endpoint.as_ref())
            .list("pendingMaintenanceActions", self.pending_maintenance_actions.as_deref())
            .field("caCertificateIdentifier", self.ca_certificate_identifier.as_deref())
            .finish()
    }
}

/// A builder for [`RelationalDatabase`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationalDatabaseBuilder {
    name: Option<String>,
    arn: Option<String>,
    support_code: Option<String>,
    created_at: Option<DateTime<Utc>>,
    location: Option<ResourceLocation>,
    resource_type: Option<String>,
    tags: Option<Vec<Tag>>,
    relational_database_blueprint_id: Option<String>,
    relational_database_bundle_id: Option<String>,
    master_database_name: Option<String>,
    hardware: Option<RelationalDatabaseHardware>,
    state: Option<String>,
    secondary_availability_zone: Option<String>,
    backup_retention_enabled: Option<bool>,
    pending_modified_values: Option<PendingModifiedRelationalDatabaseValues>,
    engine: Option<String>,
    engine_version: Option<String>,
    latest_restorable_time: Option<DateTime<Utc>>,
    master_username: Option<String>,
    parameter_apply_status: Option<String>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    publicly_accessible: Option<bool>,
    master_endpoint: Option<RelationalDatabaseEndpoint>,
    pending_maintenance_actions: Option<Vec<PendingMaintenanceAction>>,
    ca_certificate_identifier: Option<String>,
}

impl RelationalDatabaseBuilder {
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
    pub fn hardware(mut self, input: RelationalDatabaseHardware) -> Self {
        self.hardware = Some(input);
        self
    }

    #[must_use]
    pub fn set_hardware(mut self, input: Option<RelationalDatabaseHardware>) -> Self {
        self.hardware = input;
        self
    }

    #[must_use]
    pub fn get_hardware(&self) -> &Option<RelationalDatabaseHardware> {
        &self.hardware
    }

    /// The lifecycle state, e.g. `available`.
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

    #[must_use]
    pub fn secondary_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.secondary_availability_zone = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_secondary_availability_zone(mut self, input: Option<String>) -> Self {
        self.secondary_availability_zone = input;
        self
    }

    #[must_use]
    pub fn get_secondary_availability_zone(&self) -> &Option<String> {
        &self.secondary_availability_zone
    }

    #[must_use]
    pub fn backup_retention_enabled(mut self, input: bool) -> Self {
        self.backup_retention_enabled = Some(input);
        self
    }

    #[must_use]
    pub fn set_backup_retention_enabled(mut self, input: Option<bool>) -> Self {
        self.backup_retention_enabled = input;
        self
    }

    #[must_use]
    pub fn get_backup_retention_enabled(&self) -> &Option<bool> {
        &self.backup_retention_enabled
    }

    #[must_use]
    pub fn pending_modified_values(
        mut self,
        input: PendingModifiedRelationalDatabaseValues,
    ) -> Self {
        self.pending_modified_values = Some(input);
        self
    }

    #[must_use]
    pub fn set_pending_modified_values(
        mut self,
        input: Option<PendingModifiedRelationalDatabaseValues>,
    ) -> Self {
        self.pending_modified_values = input;
        self
    }

    #[must_use]
    pub fn get_pending_modified_values(&self) -> &Option<PendingModifiedRelationalDatabaseValues> {
        &self.pending_modified_values
    }

    #[must_use]
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    #[must_use]
    pub fn get_engine(&self) -> &Option<String> {
        &self.engine
    }

    #[must_use]
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    #[must_use]
    pub fn get_engine_version(&self) -> &Option<String> {
        &self.engine_version
    }

    /// The latest point in time the database can be restored to.
    #[must_use]
    pub fn latest_restorable_time(mut self, input: DateTime<Utc>) -> Self {
        self.latest_restorable_time = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_latest_restorable_time(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.latest_restorable_time = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_latest_restorable_time(&self) -> &Option<DateTime<Utc>> {
        &self.latest_restorable_time
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

    #[must_use]
    pub fn parameter_apply_status(mut self, input: impl Into<String>) -> Self {
        self.parameter_apply_status = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_parameter_apply_status(mut self, input: Option<String>) -> Self {
        self.parameter_apply_status = input;
        self
    }

    #[must_use]
    pub fn get_parameter_apply_status(&self) -> &Option<String> {
        &self.parameter_apply_status
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

    #[must_use]
    pub fn master_endpoint(mut self, input: RelationalDatabaseEndpoint) -> Self {
        self.master_endpoint = Some(input);
        self
    }

    #[must_use]
    pub fn set_master_endpoint(mut self, input: Option<RelationalDatabaseEndpoint>) -> Self {
        self.master_endpoint = input;
        self
    }

    #[must_use]
    pub fn get_master_endpoint(&self) -> &Option<RelationalDatabaseEndpoint> {
        &self.master_endpoint
    }

    /// Appends an item to `pending_maintenance_actions`.
    ///
    /// To override the contents of this collection use
    /// [`set_pending_maintenance_actions`](Self::set_pending_maintenance_actions).
    #[must_use]
    pub fn pending_maintenance_actions(mut self, input: PendingMaintenanceAction) -> Self {
        self.pending_maintenance_actions.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `pending_maintenance_actions`, allocating it even when `inputs` is
    /// empty.
    #[must_use]
    pub fn extend_pending_maintenance_actions(
        mut self,
        inputs: impl IntoIterator<Item = PendingMaintenanceAction>,
    ) -> Self {
        self.pending_maintenance_actions.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_pending_maintenance_actions(
        mut self,
        input: Option<Vec<PendingMaintenanceAction>>,
    ) -> Self {
        self.pending_maintenance_actions = input;
        self
    }

    #[must_use]
    pub fn get_pending_maintenance_actions(&self) -> &Option<Vec<PendingMaintenanceAction>> {
        &self.pending_maintenance_actions
    }

    #[must_use]
    pub fn ca_certificate_identifier(mut self, input: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_ca_certificate_identifier(mut self, input: Option<String>) -> Self {
        self.ca_certificate_identifier = input;
        self
    }

    #[must_use]
    pub fn get_ca_certificate_identifier(&self) -> &Option<String> {
        &self.ca_certificate_identifier
    }

    /// Consumes the builder and constructs a [`RelationalDatabase`].
    #[must_use]
    pub fn build(self) -> RelationalDatabase {
        RelationalDatabase {
            name: self.name,
            arn: self.arn,
            support_code: self.support_code,
            created_at: self.created_at,
            location: self.location,
            resource_type: self.resource_type,
            tags: self.tags,
            relational_database_blueprint_id: self.relational_database_blueprint_id,
            relational_database_bundle_id: self.relational_database_bundle_id,
            master_database_name: self.master_database_name,
            hardware: self.hardware,
            state: self.state,
            secondary_availability_zone: self.secondary_availability_zone,
            backup_retention_enabled: self.backup_retention_enabled,
            pending_modified_values: self.pending_modified_values,
            engine: self.engine,
            engine_version: self.engine_version,
            latest_restorable_time: self.latest_restorable_time,
            master_username: self.master_username,
            parameter_apply_status: self.parameter_apply_status,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            publicly_accessible: self.publicly_accessible,
            master_endpoint: self.master_endpoint,
            pending_maintenance_actions: self.pending_maintenance_actions,
            ca_certificate_identifier: self.ca_certificate_identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn orders_db() -> RelationalDatabase {
        RelationalDatabase::builder()
            .name("orders-db")
            .engine("mysql")
            .engine_version("8.0.35")
            .hardware(
                RelationalDatabaseHardware::builder()
                    .cpu_count(2)
                    .disk_size_in_gb(80)
                    .ram_size_in_gb(2.0)
                    .build(),
            )
            .master_endpoint(
                RelationalDatabaseEndpoint::builder()
                    .address("ls-abc.us-east-2.rds.amazonaws.com")
                    .port(3306)
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_should_key_map_by_database_snapshot() {
        let mut labels = HashMap::new();
        labels.insert(orders_db(), "primary");
        assert_eq!(labels.get(&orders_db()), Some(&"primary"));
    }

    #[test]
    fn test_should_render_nested_hardware_and_endpoint() {
        assert_eq!(
            orders_db().to_string(),
            "{name: orders-db, hardware: {cpuCount: 2, diskSizeInGb: 80, ramSizeInGb: 2.0}, \
             engine: mysql, engineVersion: 8.0.35, masterEndpoint: {port: 3306, \
             address: ls-abc.us-east-2.rds.amazonaws.com}}"
        );
    }

    #[test]
    fn test_should_deserialize_pending_maintenance() {
        let json = r#"{
            "name": "orders-db",
            "state": "available",
            "backupRetentionEnabled": true,
            "pendingModifiedValues": {"engineVersion": "8.0.36"},
            "pendingMaintenanceActions": [{
                "action": "system-update",
                "description": "New operating system update is available",
                "currentApplyDate": 1700000000
            }],
            "resourceType": "RelationalDatabase"
        }"#;
        let db: RelationalDatabase = serde_json::from_str(json).expect("deserialize database");
        assert_eq!(db.state(), Some("available"));
        assert_eq!(
            db.pending_modified_values()
                .and_then(PendingModifiedRelationalDatabaseValues::engine_version),
            Some("8.0.36")
        );
        let actions = db.pending_maintenance_actions().expect("actions");
        assert_eq!(actions[0].action(), Some("system-update"));
        assert_eq!(
            actions[0].current_apply_date().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }
}
