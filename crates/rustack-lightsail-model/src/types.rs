//! Nested Lightsail shapes shared by resources, inputs and outputs.
//!
//! Every shape is an immutable value built through its companion builder.
//! Fields are optional, and enum-constrained fields hold the raw wire string.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::{FloatBits, ShapeFormatter};
use crate::timestamp;

/// A key-value pair attached to a Lightsail resource.
///
/// Tags are case sensitive. The value may be empty, the key may not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`].
    #[must_use]
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }

    /// The tag key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The tag value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("key", self.key.as_deref())
            .field("value", self.value.as_deref())
            .finish()
    }
}

/// A builder for [`Tag`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagBuilder {
    key: Option<String>,
    value: Option<String>,
}

impl TagBuilder {
    /// The tag key.
    #[must_use]
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    #[must_use]
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// The tag value.
    #[must_use]
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    #[must_use]
    pub fn get_value(&self) -> &Option<String> {
        &self.value
    }

    /// Consumes the builder and constructs a [`Tag`].
    #[must_use]
    pub fn build(self) -> Tag {
        Tag {
            key: self.key,
            value: self.value,
        }
    }
}

/// Where a resource lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_name: Option<String>,
}

impl ResourceLocation {
    /// Creates a new builder-style object to manufacture [`ResourceLocation`].
    #[must_use]
    pub fn builder() -> ResourceLocationBuilder {
        ResourceLocationBuilder::default()
    }

    /// The Availability Zone, e.g. `us-east-2a`.
    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// The AWS Region name.
    ///
    /// Values are listed in [`RegionName`](crate::enums::RegionName).
    #[must_use]
    pub fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("availabilityZone", self.availability_zone.as_deref())
            .field("regionName", self.region_name.as_deref())
            .finish()
    }
}

/// A builder for [`ResourceLocation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceLocationBuilder {
    availability_zone: Option<String>,
    region_name: Option<String>,
}

impl ResourceLocationBuilder {
    /// The Availability Zone, e.g. `us-east-2a`.
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

    /// The AWS Region name.
    ///
    /// Values are listed in [`RegionName`](crate::enums::RegionName).
    #[must_use]
    pub fn region_name(mut self, input: impl Into<String>) -> Self {
        self.region_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_region_name(mut self, input: Option<String>) -> Self {
        self.region_name = input;
        self
    }

    #[must_use]
    pub fn get_region_name(&self) -> &Option<String> {
        &self.region_name
    }

    /// Consumes the builder and constructs a [`ResourceLocation`].
    #[must_use]
    pub fn build(self) -> ResourceLocation {
        ResourceLocation {
            availability_zone: self.availability_zone,
            region_name: self.region_name,
        }
    }
}

/// The resource an alarm watches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitoredResourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
}

impl MonitoredResourceInfo {
    /// Creates a new builder-style object to manufacture [`MonitoredResourceInfo`].
    #[must_use]
    pub fn builder() -> MonitoredResourceInfoBuilder {
        MonitoredResourceInfoBuilder::default()
    }

    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Only instances, load balancers and managed databases can be monitored.
    ///
    /// Values are listed in [`ResourceType`](crate::enums::ResourceType).
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
}

impl fmt::Display for MonitoredResourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("arn", self.arn.as_deref())
            .field("name", self.name.as_deref())
            .field("resourceType", self.resource_type.as_deref())
            .finish()
    }
}

/// A builder for [`MonitoredResourceInfo`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitoredResourceInfoBuilder {
    arn: Option<String>,
    name: Option<String>,
    resource_type: Option<String>,
}

impl MonitoredResourceInfoBuilder {
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

    /// Only instances, load balancers and managed databases can be monitored.
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

    /// Consumes the builder and constructs a [`MonitoredResourceInfo`].
    #[must_use]
    pub fn build(self) -> MonitoredResourceInfo {
        MonitoredResourceInfo {
            arn: self.arn,
            name: self.name,
            resource_type: self.resource_type,
        }
    }
}

/// Maps a disk of the source snapshot to a newly created disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    original_disk_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_disk_name: Option<String>,
}

impl DiskMap {
    /// Creates a new builder-style object to manufacture [`DiskMap`].
    #[must_use]
    pub fn builder() -> DiskMapBuilder {
        DiskMapBuilder::default()
    }

    /// The original disk path exposed to the instance, e.g. `/dev/sdh`.
    #[must_use]
    pub fn original_disk_path(&self) -> Option<&str> {
        self.original_disk_path.as_deref()
    }

    /// The name of the new disk.
    #[must_use]
    pub fn new_disk_name(&self) -> Option<&str> {
        self.new_disk_name.as_deref()
    }
}

impl fmt::Display for DiskMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("originalDiskPath", self.original_disk_path.as_deref())
            .field("newDiskName", self.new_disk_name.as_deref())
            .finish()
    }
}

/// A builder for [`DiskMap`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskMapBuilder {
    original_disk_path: Option<String>,
    new_disk_name: Option<String>,
}

impl DiskMapBuilder {
    /// The original disk path exposed to the instance, e.g. `/dev/sdh`.
    #[must_use]
    pub fn original_disk_path(mut self, input: impl Into<String>) -> Self {
        self.original_disk_path = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_original_disk_path(mut self, input: Option<String>) -> Self {
        self.original_disk_path = input;
        self
    }

    #[must_use]
    pub fn get_original_disk_path(&self) -> &Option<String> {
        &self.original_disk_path
    }

    /// The name of the new disk.
    #[must_use]
    pub fn new_disk_name(mut self, input: impl Into<String>) -> Self {
        self.new_disk_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_new_disk_name(mut self, input: Option<String>) -> Self {
        self.new_disk_name = input;
        self
    }

    #[must_use]
    pub fn get_new_disk_name(&self) -> &Option<String> {
        &self.new_disk_name
    }

    /// Consumes the builder and constructs a [`DiskMap`].
    #[must_use]
    pub fn build(self) -> DiskMap {
        DiskMap {
            original_disk_path: self.original_disk_path,
            new_disk_name: self.new_disk_name,
        }
    }
}

/// An add-on to enable on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    add_on_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_snapshot_add_on_request: Option<AutoSnapshotAddOnRequest>,
}

impl AddOnRequest {
    /// Creates a new builder-style object to manufacture [`AddOnRequest`].
    #[must_use]
    pub fn builder() -> AddOnRequestBuilder {
        AddOnRequestBuilder::default()
    }

    /// Values are listed in [`AddOnType`](crate::enums::AddOnType).
    #[must_use]
    pub fn add_on_type(&self) -> Option<&str> {
        self.add_on_type.as_deref()
    }

    #[must_use]
    pub fn auto_snapshot_add_on_request(&self) -> Option<&AutoSnapshotAddOnRequest> {
        self.auto_snapshot_add_on_request.as_ref()
    }
}

impl fmt::Display for AddOnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("addOnType", self.add_on_type.as_deref())
            .field("autoSnapshotAddOnRequest", self.auto_snapshot_add_on_request.as_ref())
            .finish()
    }
}

/// A builder for [`AddOnRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddOnRequestBuilder {
    add_on_type: Option<String>,
    auto_snapshot_add_on_request: Option<AutoSnapshotAddOnRequest>,
}

impl AddOnRequestBuilder {
    /// Values are listed in [`AddOnType`](crate::enums::AddOnType).
    #[must_use]
    pub fn add_on_type(mut self, input: impl Into<String>) -> Self {
        self.add_on_type = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_add_on_type(mut self, input: Option<String>) -> Self {
        self.add_on_type = input;
        self
    }

    #[must_use]
    pub fn get_add_on_type(&self) -> &Option<String> {
        &self.add_on_type
    }

    #[must_use]
    pub fn auto_snapshot_add_on_request(mut self, input: AutoSnapshotAddOnRequest) -> Self {
        self.auto_snapshot_add_on_request = Some(input);
        self
    }

    #[must_use]
    pub fn set_auto_snapshot_add_on_request(
        mut self,
        input: Option<AutoSnapshotAddOnRequest>,
    ) -> Self {
        self.auto_snapshot_add_on_request = input;
        self
    }

    #[must_use]
    pub fn get_auto_snapshot_add_on_request(&self) -> &Option<AutoSnapshotAddOnRequest> {
        &self.auto_snapshot_add_on_request
    }

    /// Consumes the builder and constructs a [`AddOnRequest`].
    #[must_use]
    pub fn build(self) -> AddOnRequest {
        AddOnRequest {
            add_on_type: self.add_on_type,
            auto_snapshot_add_on_request: self.auto_snapshot_add_on_request,
        }
    }
}

/// Settings of the automatic snapshot add-on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoSnapshotAddOnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_time_of_day: Option<String>,
}

impl AutoSnapshotAddOnRequest {
    /// Creates a new builder-style object to manufacture [`AutoSnapshotAddOnRequest`].
    #[must_use]
    pub fn builder() -> AutoSnapshotAddOnRequestBuilder {
        AutoSnapshotAddOnRequestBuilder::default()
    }

    /// Daily snapshot time in UTC, `HH:00` format.
    ///
    /// Only whole hours are accepted by the service.
    #[must_use]
    pub fn snapshot_time_of_day(&self) -> Option<&str> {
        self.snapshot_time_of_day.as_deref()
    }
}

impl fmt::Display for AutoSnapshotAddOnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("snapshotTimeOfDay", self.snapshot_time_of_day.as_deref())
            .finish()
    }
}

/// A builder for [`AutoSnapshotAddOnRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoSnapshotAddOnRequestBuilder {
    snapshot_time_of_day: Option<String>,
}

impl AutoSnapshotAddOnRequestBuilder {
    /// Daily snapshot time in UTC, `HH:00` format.
    ///
    /// Only whole hours are accepted by the service.
    #[must_use]
    pub fn snapshot_time_of_day(mut self, input: impl Into<String>) -> Self {
        self.snapshot_time_of_day = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_snapshot_time_of_day(mut self, input: Option<String>) -> Self {
        self.snapshot_time_of_day = input;
        self
    }

    #[must_use]
    pub fn get_snapshot_time_of_day(&self) -> &Option<String> {
        &self.snapshot_time_of_day
    }

    /// Consumes the builder and constructs a [`AutoSnapshotAddOnRequest`].
    #[must_use]
    pub fn build(self) -> AutoSnapshotAddOnRequest {
        AutoSnapshotAddOnRequest {
            snapshot_time_of_day: self.snapshot_time_of_day,
        }
    }
}

/// Hardware of a managed database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationalDatabaseHardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    cpu_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disk_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ram_size_in_gb: Option<FloatBits>,
}

impl RelationalDatabaseHardware {
    /// Creates a new builder-style object to manufacture [`RelationalDatabaseHardware`].
    #[must_use]
    pub fn builder() -> RelationalDatabaseHardwareBuilder {
        RelationalDatabaseHardwareBuilder::default()
    }

    /// Number of vCPUs.
    #[must_use]
    pub fn cpu_count(&self) -> Option<i32> {
        self.cpu_count
    }

    /// Disk size in GB.
    #[must_use]
    pub fn disk_size_in_gb(&self) -> Option<i32> {
        self.disk_size_in_gb
    }

    /// Memory in GB.
    #[must_use]
    pub fn ram_size_in_gb(&self) -> Option<f64> {
        self.ram_size_in_gb.map(f64::from)
    }
}

impl fmt::Display for RelationalDatabaseHardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("cpuCount", self.cpu_count.as_ref())
            .field("diskSizeInGb", self.disk_size_in_gb.as_ref())
            .field("ramSizeInGb", self.ram_size_in_gb.as_ref())
            .finish()
    }
}

/// A builder for [`RelationalDatabaseHardware`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationalDatabaseHardwareBuilder {
    cpu_count: Option<i32>,
    disk_size_in_gb: Option<i32>,
    ram_size_in_gb: Option<f64>,
}

impl RelationalDatabaseHardwareBuilder {
    /// Number of vCPUs.
    #[must_use]
    pub fn cpu_count(mut self, input: i32) -> Self {
        self.cpu_count = Some(input);
        self
    }

    #[must_use]
    pub fn set_cpu_count(mut self, input: Option<i32>) -> Self {
        self.cpu_count = input;
        self
    }

    #[must_use]
    pub fn get_cpu_count(&self) -> &Option<i32> {
        &self.cpu_count
    }

    /// Disk size in GB.
    #[must_use]
    pub fn disk_size_in_gb(mut self, input: i32) -> Self {
        self.disk_size_in_gb = Some(input);
        self
    }

    #[must_use]
    pub fn set_disk_size_in_gb(mut self, input: Option<i32>) -> Self {
        self.disk_size_in_gb = input;
        self
    }

    #[must_use]
    pub fn get_disk_size_in_gb(&self) -> &Option<i32> {
        &self.disk_size_in_gb
    }

    /// Memory in GB.
    #[must_use]
    pub fn ram_size_in_gb(mut self, input: f64) -> Self {
        self.ram_size_in_gb = Some(input);
        self
    }

    #[must_use]
    pub fn set_ram_size_in_gb(mut self, input: Option<f64>) -> Self {
        self.ram_size_in_gb = input;
        self
    }

    #[must_use]
    pub fn get_ram_size_in_gb(&self) -> &Option<f64> {
        &self.ram_size_in_gb
    }

    /// Consumes the builder and constructs a [`RelationalDatabaseHardware`].
    #[must_use]
    pub fn build(self) -> RelationalDatabaseHardware {
        RelationalDatabaseHardware {
            cpu_count: self.cpu_count,
            disk_size_in_gb: self.disk_size_in_gb,
            ram_size_in_gb: self.ram_size_in_gb.map(FloatBits),
        }
    }
}

/// Changes queued for a managed database's next maintenance window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingModifiedRelationalDatabaseValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup_retention_enabled: Option<bool>,
}

impl PendingModifiedRelationalDatabaseValues {
    /// Creates a new builder-style object to manufacture
    /// [`PendingModifiedRelationalDatabaseValues`].
    #[must_use]
    pub fn builder() -> PendingModifiedRelationalDatabaseValuesBuilder {
        PendingModifiedRelationalDatabaseValuesBuilder::default()
    }

    #[must_use]
    pub fn master_user_password(&self) -> Option<&str> {
        self.master_user_password.as_deref()
    }

    #[must_use]
    pub fn engine_version(&self) -> Option<&str> {
        self.engine_version.as_deref()
    }

    #[must_use]
    pub fn backup_retention_enabled(&self) -> Option<bool> {
        self.backup_retention_enabled
    }
}

impl fmt::Display for PendingModifiedRelationalDatabaseValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("masterUserPassword", self.master_user_password.as_deref())
            .field("engineVersion", self.engine_version.as_deref())
            .field("backupRetentionEnabled", self.backup_retention_enabled.as_ref())
            .finish()
    }
}

/// A builder for [`PendingModifiedRelationalDatabaseValues`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingModifiedRelationalDatabaseValuesBuilder {
    master_user_password: Option<String>,
    engine_version: Option<String>,
    backup_retention_enabled: Option<bool>,
}

impl PendingModifiedRelationalDatabaseValuesBuilder {
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

    /// Consumes the builder and constructs a [`PendingModifiedRelationalDatabaseValues`].
    #[must_use]
    pub fn build(self) -> PendingModifiedRelationalDatabaseValues {
        PendingModifiedRelationalDatabaseValues {
            master_user_password: self.master_user_password,
            engine_version: self.engine_version,
            backup_retention_enabled: self.backup_retention_enabled,
        }
    }
}

/// Connection endpoint of a managed database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationalDatabaseEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl RelationalDatabaseEndpoint {
    /// Creates a new builder-style object to manufacture [`RelationalDatabaseEndpoint`].
    #[must_use]
    pub fn builder() -> RelationalDatabaseEndpointBuilder {
        RelationalDatabaseEndpointBuilder::default()
    }

    #[must_use]
    pub fn port(&self) -> Option<i32> {
        self.port
    }

    /// The DNS name of the database.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl fmt::Display for RelationalDatabaseEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("port", self.port.as_ref())
            .field("address", self.address.as_deref())
            .finish()
    }
}

/// A builder for [`RelationalDatabaseEndpoint`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationalDatabaseEndpointBuilder {
    port: Option<i32>,
    address: Option<String>,
}

impl RelationalDatabaseEndpointBuilder {
    #[must_use]
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    #[must_use]
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    #[must_use]
    pub fn get_port(&self) -> &Option<i32> {
        &self.port
    }

    /// The DNS name of the database.
    #[must_use]
    pub fn address(mut self, input: impl Into<String>) -> Self {
        self.address = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_address(mut self, input: Option<String>) -> Self {
        self.address = input;
        self
    }

    #[must_use]
    pub fn get_address(&self) -> &Option<String> {
        &self.address
    }

    /// Consumes the builder and constructs a [`RelationalDatabaseEndpoint`].
    #[must_use]
    pub fn build(self) -> RelationalDatabaseEndpoint {
        RelationalDatabaseEndpoint {
            port: self.port,
            address: self.address,
        }
    }
}

/// A maintenance action waiting to be applied to a managed database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingMaintenanceAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    current_apply_date: Option<DateTime<Utc>>,
}

impl PendingMaintenanceAction {
    /// Creates a new builder-style object to manufacture [`PendingMaintenanceAction`].
    #[must_use]
    pub fn builder() -> PendingMaintenanceActionBuilder {
        PendingMaintenanceActionBuilder::default()
    }

    /// The type of pending action.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// When the action is scheduled to run.
    #[must_use]
    pub fn current_apply_date(&self) -> Option<DateTime<Utc>> {
        self.current_apply_date
    }
}

impl fmt::Display for PendingMaintenanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("action", self.action.as_deref())
            .field("description", self.description.as_deref())
            .field("currentApplyDate", self.current_apply_date.as_ref())
            .finish()
    }
}

/// A builder for [`PendingMaintenanceAction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingMaintenanceActionBuilder {
    action: Option<String>,
    description: Option<String>,
    current_apply_date: Option<DateTime<Utc>>,
}

impl PendingMaintenanceActionBuilder {
    /// The type of pending action.
    #[must_use]
    pub fn action(mut self, input: impl Into<String>) -> Self {
        self.action = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_action(mut self, input: Option<String>) -> Self {
        self.action = input;
        self
    }

    #[must_use]
    pub fn get_action(&self) -> &Option<String> {
        &self.action
    }

    #[must_use]
    pub fn description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_description(mut self, input: Option<String>) -> Self {
        self.description = input;
        self
    }

    #[must_use]
    pub fn get_description(&self) -> &Option<String> {
        &self.description
    }

    /// When the action is scheduled to run.
    #[must_use]
    pub fn current_apply_date(mut self, input: DateTime<Utc>) -> Self {
        self.current_apply_date = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_current_apply_date(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.current_apply_date = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_current_apply_date(&self) -> &Option<DateTime<Utc>> {
        &self.current_apply_date
    }

    /// Consumes the builder and constructs a [`PendingMaintenanceAction`].
    #[must_use]
    pub fn build(self) -> PendingMaintenanceAction {
        PendingMaintenanceAction {
            action: self.action,
            description: self.description,
            current_apply_date: self.current_apply_date,
        }
    }
}

/// A DNS record that proves ownership of a certificate domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerTlsCertificateDomainValidationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
}

impl LoadBalancerTlsCertificateDomainValidationRecord {
    /// Creates a new builder-style object to manufacture
    /// [`LoadBalancerTlsCertificateDomainValidationRecord`].
    #[must_use]
    pub fn builder() -> LoadBalancerTlsCertificateDomainValidationRecordBuilder {
        LoadBalancerTlsCertificateDomainValidationRecordBuilder::default()
    }

    /// The record name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The DNS record type, e.g. `CNAME`.
    #[must_use]
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    /// The record value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateDomainStatus`].
    #[must_use]
    pub fn validation_status(&self) -> Option<&str> {
        self.validation_status.as_deref()
    }

    /// The domain this record validates.
    #[must_use]
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }
}

impl fmt::Display for LoadBalancerTlsCertificateDomainValidationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("name", self.name.as_deref())
            .field("type", self.r#type.as_deref())
            .field("value", self.value.as_deref())
            .field("validationStatus", self.validation_status.as_deref())
            .field("domainName", self.domain_name.as_deref())
            .finish()
    }
}

/// A builder for [`LoadBalancerTlsCertificateDomainValidationRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancerTlsCertificateDomainValidationRecordBuilder {
    name: Option<String>,
    r#type: Option<String>,
    value: Option<String>,
    validation_status: Option<String>,
    domain_name: Option<String>,
}

impl LoadBalancerTlsCertificateDomainValidationRecordBuilder {
    /// The record name.
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

    /// The DNS record type, e.g. `CNAME`.
    #[must_use]
    pub fn r#type(mut self, input: impl Into<String>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_type(mut self, input: Option<String>) -> Self {
        self.r#type = input;
        self
    }

    #[must_use]
    pub fn get_type(&self) -> &Option<String> {
        &self.r#type
    }

    /// The record value.
    #[must_use]
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    #[must_use]
    pub fn get_value(&self) -> &Option<String> {
        &self.value
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateDomainStatus`].
    #[must_use]
    pub fn validation_status(mut self, input: impl Into<String>) -> Self {
        self.validation_status = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_validation_status(mut self, input: Option<String>) -> Self {
        self.validation_status = input;
        self
    }

    #[must_use]
    pub fn get_validation_status(&self) -> &Option<String> {
        &self.validation_status
    }

    /// The domain this record validates.
    #[must_use]
    pub fn domain_name(mut self, input: impl Into<String>) -> Self {
        self.domain_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_domain_name(mut self, input: Option<String>) -> Self {
        self.domain_name = input;
        self
    }

    #[must_use]
    pub fn get_domain_name(&self) -> &Option<String> {
        &self.domain_name
    }

    /// Consumes the builder and constructs a [`LoadBalancerTlsCertificateDomainValidationRecord`].
    #[must_use]
    pub fn build(self) -> LoadBalancerTlsCertificateDomainValidationRecord {
        LoadBalancerTlsCertificateDomainValidationRecord {
            name: self.name,
            r#type: self.r#type,
            value: self.value,
            validation_status: self.validation_status,
            domain_name: self.domain_name,
        }
    }
}

/// Validation state of one domain during certificate renewal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerTlsCertificateDomainValidationOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_status: Option<String>,
}

impl LoadBalancerTlsCertificateDomainValidationOption {
    /// Creates a new builder-style object to manufacture
    /// [`LoadBalancerTlsCertificateDomainValidationOption`].
    #[must_use]
    pub fn builder() -> LoadBalancerTlsCertificateDomainValidationOptionBuilder {
        LoadBalancerTlsCertificateDomainValidationOptionBuilder::default()
    }

    #[must_use]
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateDomainStatus`].
    #[must_use]
    pub fn validation_status(&self) -> Option<&str> {
        self.validation_status.as_deref()
    }
}

impl fmt::Display for LoadBalancerTlsCertificateDomainValidationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("domainName", self.domain_name.as_deref())
            .field("validationStatus", self.validation_status.as_deref())
            .finish()
    }
}

/// A builder for [`LoadBalancerTlsCertificateDomainValidationOption`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancerTlsCertificateDomainValidationOptionBuilder {
    domain_name: Option<String>,
    validation_status: Option<String>,
}

impl LoadBalancerTlsCertificateDomainValidationOptionBuilder {
    #[must_use]
    pub fn domain_name(mut self, input: impl Into<String>) -> Self {
        self.domain_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_domain_name(mut self, input: Option<String>) -> Self {
        self.domain_name = input;
        self
    }

    #[must_use]
    pub fn get_domain_name(&self) -> &Option<String> {
        &self.domain_name
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateDomainStatus`].
    #[must_use]
    pub fn validation_status(mut self, input: impl Into<String>) -> Self {
        self.validation_status = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_validation_status(mut self, input: Option<String>) -> Self {
        self.validation_status = input;
        self
    }

    #[must_use]
    pub fn get_validation_status(&self) -> &Option<String> {
        &self.validation_status
    }

    /// Consumes the builder and constructs a [`LoadBalancerTlsCertificateDomainValidationOption`].
    #[must_use]
    pub fn build(self) -> LoadBalancerTlsCertificateDomainValidationOption {
        LoadBalancerTlsCertificateDomainValidationOption {
            domain_name: self.domain_name,
            validation_status: self.validation_status,
        }
    }
}

/// Status of managed renewal for a certificate.
///
/// Only present when the certificate is eligible for renewal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerTlsCertificateRenewalSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    renewal_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_validation_options: Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>>,
}

impl LoadBalancerTlsCertificateRenewalSummary {
    /// Creates a new builder-style object to manufacture
    /// [`LoadBalancerTlsCertificateRenewalSummary`].
    #[must_use]
    pub fn builder() -> LoadBalancerTlsCertificateRenewalSummaryBuilder {
        LoadBalancerTlsCertificateRenewalSummaryBuilder::default()
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateRenewalStatus`].
    #[must_use]
    pub fn renewal_status(&self) -> Option<&str> {
        self.renewal_status.as_deref()
    }

    /// One entry per domain on the certificate.
    #[must_use]
    pub fn domain_validation_options(
        &self,
    ) -> Option<&[LoadBalancerTlsCertificateDomainValidationOption]> {
        self.domain_validation_options.as_deref()
    }
}

impl fmt::Display for LoadBalancerTlsCertificateRenewalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("renewalStatus", self.renewal_status.as_deref())
            .list("domainValidationOptions", self.domain_validation_options.as_deref())
            .finish()
    }
}

/// A builder for [`LoadBalancerTlsCertificateRenewalSummary`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancerTlsCertificateRenewalSummaryBuilder {
    renewal_status: Option<String>,
    domain_validation_options: Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>>,
}

impl LoadBalancerTlsCertificateRenewalSummaryBuilder {
    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateRenewalStatus`].
    #[must_use]
    pub fn renewal_status(mut self, input: impl Into<String>) -> Self {
        self.renewal_status = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_renewal_status(mut self, input: Option<String>) -> Self {
        self.renewal_status = input;
        self
    }

    #[must_use]
    pub fn get_renewal_status(&self) -> &Option<String> {
        &self.renewal_status
    }

    /// Appends an item to `domain_validation_options`.
    ///
    /// To override the contents of this collection use
    /// [`set_domain_validation_options`](Self::set_domain_validation_options).
    #[must_use]
    pub fn domain_validation_options(
        mut self,
        input: LoadBalancerTlsCertificateDomainValidationOption,
    ) -> Self {
        self.domain_validation_options.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `domain_validation_options`, allocating it even when `inputs` is
    /// empty.
    #[must_use]
    pub fn extend_domain_validation_options(
        mut self,
        inputs: impl IntoIterator<Item = LoadBalancerTlsCertificateDomainValidationOption>,
    ) -> Self {
        self.domain_validation_options.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_domain_validation_options(
        mut self,
        input: Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>>,
    ) -> Self {
        self.domain_validation_options = input;
        self
    }

    #[must_use]
    pub fn get_domain_validation_options(
        &self,
    ) -> &Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>> {
        &self.domain_validation_options
    }

    /// Consumes the builder and constructs a [`LoadBalancerTlsCertificateRenewalSummary`].
    #[must_use]
    pub fn build(self) -> LoadBalancerTlsCertificateRenewalSummary {
        LoadBalancerTlsCertificateRenewalSummary {
            renewal_status: self.renewal_status,
            domain_validation_options: self.domain_validation_options,
        }
    }
}

/// An asynchronous operation started by a mutating request.
///
/// Every mutating Lightsail call returns one record per affected resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_terminal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    status_changed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_details: Option<String>,
}

impl Operation {
    /// Creates a new builder-style object to manufacture [`Operation`].
    #[must_use]
    pub fn builder() -> OperationBuilder {
        OperationBuilder::default()
    }

    /// The operation ID.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The resource the operation acts on.
    #[must_use]
    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    /// Values are listed in [`ResourceType`](crate::enums::ResourceType).
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub fn location(&self) -> Option<&ResourceLocation> {
        self.location.as_ref()
    }

    /// Whether the operation has finished.
    #[must_use]
    pub fn is_terminal(&self) -> Option<bool> {
        self.is_terminal
    }

    #[must_use]
    pub fn operation_details(&self) -> Option<&str> {
        self.operation_details.as_deref()
    }

    /// The operation name, e.g. `CreateInstance`.
    #[must_use]
    pub fn operation_type(&self) -> Option<&str> {
        self.operation_type.as_deref()
    }

    /// Values are listed in [`OperationStatus`](crate::enums::OperationStatus).
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn status_changed_at(&self) -> Option<DateTime<Utc>> {
        self.status_changed_at
    }

    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    #[must_use]
    pub fn error_details(&self) -> Option<&str> {
        self.error_details.as_deref()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("id", self.id.as_deref())
            .field("resourceName", self.resource_name.as_deref())
            .field("resourceType", self.resource_type.as_deref())
            .field("createdAt", self.created_at.as_ref())
            .field("location", self.location.as_ref())
            .field("isTerminal", self.is_terminal.as_ref())
            .field("operationDetails", self.operation_details.as_deref())
            .field("operationType", self.operation_type.as_deref())
            .field("status", self.status.as_deref())
            .field("statusChangedAt", self.status_changed_at.as_ref())
            .field("errorCode", self.error_code.as_deref())
            .field("errorDetails", self.error_details.as_deref())
            .finish()
    }
}

/// A builder for [`Operation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationBuilder {
    id: Option<String>,
    resource_name: Option<String>,
    resource_type: Option<String>,
    created_at: Option<DateTime<Utc>>,
    location: Option<ResourceLocation>,
    is_terminal: Option<bool>,
    operation_details: Option<String>,
    operation_type: Option<String>,
    status: Option<String>,
    status_changed_at: Option<DateTime<Utc>>,
    error_code: Option<String>,
    error_details: Option<String>,
}

impl OperationBuilder {
    /// The operation ID.
    #[must_use]
    pub fn id(mut self, input: impl Into<String>) -> Self {
        self.id = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_id(mut self, input: Option<String>) -> Self {
        self.id = input;
        self
    }

    #[must_use]
    pub fn get_id(&self) -> &Option<String> {
        &self.id
    }

    /// The resource the operation acts on.
    #[must_use]
    pub fn resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_resource_name(mut self, input: Option<String>) -> Self {
        self.resource_name = input;
        self
    }

    #[must_use]
    pub fn get_resource_name(&self) -> &Option<String> {
        &self.resource_name
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

    /// Whether the operation has finished.
    #[must_use]
    pub fn is_terminal(mut self, input: bool) -> Self {
        self.is_terminal = Some(input);
        self
    }

    #[must_use]
    pub fn set_is_terminal(mut self, input: Option<bool>) -> Self {
        self.is_terminal = input;
        self
    }

    #[must_use]
    pub fn get_is_terminal(&self) -> &Option<bool> {
        &self.is_terminal
    }

    #[must_use]
    pub fn operation_details(mut self, input: impl Into<String>) -> Self {
        self.operation_details = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_operation_details(mut self, input: Option<String>) -> Self {
        self.operation_details = input;
        self
    }

    #[must_use]
    pub fn get_operation_details(&self) -> &Option<String> {
        &self.operation_details
    }

    /// The operation name, e.g. `CreateInstance`.
    #[must_use]
    pub fn operation_type(mut self, input: impl Into<String>) -> Self {
        self.operation_type = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_operation_type(mut self, input: Option<String>) -> Self {
        self.operation_type = input;
        self
    }

    #[must_use]
    pub fn get_operation_type(&self) -> &Option<String> {
        &self.operation_type
    }

    /// Values are listed in [`OperationStatus`](crate::enums::OperationStatus).
    #[must_use]
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    #[must_use]
    pub fn get_status(&self) -> &Option<String> {
        &self.status
    }

    #[must_use]
    pub fn status_changed_at(mut self, input: DateTime<Utc>) -> Self {
        self.status_changed_at = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_status_changed_at(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.status_changed_at = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_status_changed_at(&self) -> &Option<DateTime<Utc>> {
        &self.status_changed_at
    }

    #[must_use]
    pub fn error_code(mut self, input: impl Into<String>) -> Self {
        self.error_code = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_error_code(mut self, input: Option<String>) -> Self {
        self.error_code = input;
        self
    }

    #[must_use]
    pub fn get_error_code(&self) -> &Option<String> {
        &self.error_code
    }

    #[must_use]
    pub fn error_details(mut self, input: impl Into<String>) -> Self {
        self.error_details = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_error_details(mut self, input: Option<String>) -> Self {
        self.error_details = input;
        self
    }

    #[must_use]
    pub fn get_error_details(&self) -> &Option<String> {
        &self.error_details
    }

    /// Consumes the builder and constructs a [`Operation`].
    #[must_use]
    pub fn build(self) -> Operation {
        Operation {
            id: self.id,
            resource_name: self.resource_name,
            resource_type: self.resource_type,
            created_at: self.created_at,
            location: self.location,
            is_terminal: self.is_terminal,
            operation_details: self.operation_details,
            operation_type: self.operation_type,
            status: self.status,
            status_changed_at: self.status_changed_at,
            error_code: self.error_code,
            error_details: self.error_details,
        }
    }
}

/// One aggregated metric data point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricDatapoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    average: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_count: Option<FloatBits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sum: Option<FloatBits>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl MetricDatapoint {
    /// Creates a new builder-style object to manufacture [`MetricDatapoint`].
    #[must_use]
    pub fn builder() -> MetricDatapointBuilder {
        MetricDatapointBuilder::default()
    }

    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.average.map(f64::from)
    }

    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        self.maximum.map(f64::from)
    }

    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        self.minimum.map(f64::from)
    }

    #[must_use]
    pub fn sample_count(&self) -> Option<f64> {
        self.sample_count.map(f64::from)
    }

    #[must_use]
    pub fn sum(&self) -> Option<f64> {
        self.sum.map(f64::from)
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Values are listed in [`MetricUnit`](crate::enums::MetricUnit).
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl fmt::Display for MetricDatapoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("average", self.average.as_ref())
            .field("maximum", self.maximum.as_ref())
            .field("minimum", self.minimum.as_ref())
            .field("sampleCount", self.sample_count.as_ref())
            .field("sum", self.sum.as_ref())
            .field("timestamp", self.timestamp.as_ref())
            .field("unit", self.unit.as_deref())
            .finish()
    }
}

/// A builder for [`MetricDatapoint`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricDatapointBuilder {
    average: Option<f64>,
    maximum: Option<f64>,
    minimum: Option<f64>,
    sample_count: Option<f64>,
    sum: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
    unit: Option<String>,
}

impl MetricDatapointBuilder {
    #[must_use]
    pub fn average(mut self, input: f64) -> Self {
        self.average = Some(input);
        self
    }

    #[must_use]
    pub fn set_average(mut self, input: Option<f64>) -> Self {
        self.average = input;
        self
    }

    #[must_use]
    pub fn get_average(&self) -> &Option<f64> {
        &self.average
    }

    #[must_use]
    pub fn maximum(mut self, input: f64) -> Self {
        self.maximum = Some(input);
        self
    }

    #[must_use]
    pub fn set_maximum(mut self, input: Option<f64>) -> Self {
        self.maximum = input;
        self
    }

    #[must_use]
    pub fn get_maximum(&self) -> &Option<f64> {
        &self.maximum
    }

    #[must_use]
    pub fn minimum(mut self, input: f64) -> Self {
        self.minimum = Some(input);
        self
    }

    #[must_use]
    pub fn set_minimum(mut self, input: Option<f64>) -> Self {
        self.minimum = input;
        self
    }

    #[must_use]
    pub fn get_minimum(&self) -> &Option<f64> {
        &self.minimum
    }

    #[must_use]
    pub fn sample_count(mut self, input: f64) -> Self {
        self.sample_count = Some(input);
        self
    }

    #[must_use]
    pub fn set_sample_count(mut self, input: Option<f64>) -> Self {
        self.sample_count = input;
        self
    }

    #[must_use]
    pub fn get_sample_count(&self) -> &Option<f64> {
        &self.sample_count
    }

    #[must_use]
    pub fn sum(mut self, input: f64) -> Self {
        self.sum = Some(input);
        self
    }

    #[must_use]
    pub fn set_sum(mut self, input: Option<f64>) -> Self {
        self.sum = input;
        self
    }

    #[must_use]
    pub fn get_sum(&self) -> &Option<f64> {
        &self.sum
    }

    #[must_use]
    pub fn timestamp(mut self, input: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_timestamp(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.timestamp = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_timestamp(&self) -> &Option<DateTime<Utc>> {
        &self.timestamp
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

    /// Consumes the builder and constructs a [`MetricDatapoint`].
    #[must_use]
    pub fn build(self) -> MetricDatapoint {
        MetricDatapoint {
            average: self.average.map(FloatBits),
            maximum: self.maximum.map(FloatBits),
            minimum: self.minimum.map(FloatBits),
            sample_count: self.sample_count.map(FloatBits),
            sum: self.sum.map(FloatBits),
            timestamp: self.timestamp,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::enums::{LightsailEnum, OperationStatus, RegionName, ResourceType};

    #[test]
    fn test_should_use_tags_as_set_members() {
        let mut tags = HashSet::new();
        tags.insert(Tag::builder().key("env").value("prod").build());
        tags.insert(Tag::builder().value("prod").key("env").build());
        tags.insert(Tag::builder().key("env").build());
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_should_render_nested_shape() {
        let info = AddOnRequest::builder()
            .add_on_type("AutoSnapshot")
            .auto_snapshot_add_on_request(AutoSnapshotAddOnRequest::default())
            .build();
        assert_eq!(
            info.to_string(),
            "{addOnType: AutoSnapshot, autoSnapshotAddOnRequest: {}}"
        );
    }

    #[test]
    fn test_should_deserialize_operation_record() {
        let json = r#"{
            "id": "6b6f1e0a-6c3c-4c4b-9b0b-1a2b3c4d5e6f",
            "resourceName": "cpu-alarm",
            "resourceType": "Alarm",
            "createdAt": 1700000000.5,
            "location": {"availabilityZone": "all", "regionName": "us-east-2"},
            "isTerminal": true,
            "operationType": "PutAlarm",
            "status": "Succeeded",
            "statusChangedAt": 1700000001,
            "somethingNew": {"ignored": true}
        }"#;
        let op: Operation = serde_json::from_str(json).expect("deserialize operation");

        assert_eq!(op.resource_name(), Some("cpu-alarm"));
        assert_eq!(op.is_terminal(), Some(true));
        assert_eq!(
            OperationStatus::from_field(op.status()),
            Ok(OperationStatus::Succeeded)
        );
        assert_eq!(
            op.created_at(),
            DateTime::from_timestamp_millis(1_700_000_000_500)
        );
        let location = op.location().expect("location");
        assert_eq!(
            RegionName::from_field(location.region_name()),
            Ok(RegionName::UsEast2)
        );
        assert_eq!(op.error_code(), None);
    }

    #[test]
    fn test_should_keep_unknown_enum_string_from_service() {
        let info: MonitoredResourceInfo =
            serde_json::from_str(r#"{"name":"x","resourceType":"FutureResourceKind"}"#)
                .expect("deserialize");
        assert_eq!(info.resource_type(), Some("FutureResourceKind"));
        assert!(ResourceType::from_field(info.resource_type()).is_err());
    }

    #[test]
    fn test_should_serialize_raw_identifier_field_as_type() {
        let record = LoadBalancerTlsCertificateDomainValidationRecord::builder()
            .name("_a1b2.example.com.")
            .r#type("CNAME")
            .build();
        assert_eq!(record.r#type(), Some("CNAME"));
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(
            json,
            serde_json::json!({"name": "_a1b2.example.com.", "type": "CNAME"})
        );
        assert_eq!(record.to_string(), "{name: _a1b2.example.com., type: CNAME}");
    }

    #[test]
    fn test_should_compare_datapoints_by_bits() {
        let a = MetricDatapoint::builder().average(f64::NAN).unit("Percent").build();
        let b = MetricDatapoint::builder().average(f64::NAN).unit("Percent").build();
        assert_eq!(a, b);

        let zero = MetricDatapoint::builder().sum(0.0).build();
        let negative_zero = MetricDatapoint::builder().sum(-0.0).build();
        assert_ne!(zero, negative_zero);
    }

    #[test]
    fn test_should_render_datapoint_floats_with_decimal_point() {
        let point = MetricDatapoint::builder()
            .average(12.0)
            .sample_count(5.0)
            .unit("Percent")
            .build();
        assert_eq!(point.average(), Some(12.0));
        assert_eq!(point.to_string(), "{average: 12.0, sampleCount: 5.0, unit: Percent}");

        let json = serde_json::to_value(&point).expect("serialize datapoint");
        assert_eq!(json["average"], 12.0);
        let parsed: MetricDatapoint =
            serde_json::from_str(r#"{"average":12,"sampleCount":5,"unit":"Percent"}"#)
                .expect("integer floats");
        assert_eq!(parsed, point);
    }

    #[test]
    fn test_should_compare_hardware_with_float_field() {
        let small = RelationalDatabaseHardware::builder()
            .cpu_count(2)
            .disk_size_in_gb(40)
            .ram_size_in_gb(1.0)
            .build();
        let mut set = HashSet::new();
        set.insert(small.clone());
        assert!(set.contains(&small));
        assert!(!set.contains(&RelationalDatabaseHardware::builder().cpu_count(2).build()));
    }
}
