//! Instance operation inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::operations::{LightsailInput, LightsailOperation};
use crate::shape::ShapeFormatter;
use crate::types::{AddOnRequest, DiskMap, Tag};

/// Request of the `CreateInstancesFromSnapshot` operation.
///
/// Instances are created either from a named instance snapshot or, when
/// `sourceInstanceName` is set, from one of that instance's automatic snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateInstancesFromSnapshotInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attached_disk_mapping: Option<BTreeMap<String, Vec<DiskMap>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_snapshot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_pair_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    add_ons: Option<Vec<AddOnRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    restore_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_latest_restorable_auto_snapshot: Option<bool>,
}

impl CreateInstancesFromSnapshotInput {
    /// Creates a new builder-style object to manufacture [`CreateInstancesFromSnapshotInput`].
    #[must_use]
    pub fn builder() -> CreateInstancesFromSnapshotInputBuilder {
        CreateInstancesFromSnapshotInputBuilder::default()
    }

    /// Names of the instances to create.
    #[must_use]
    pub fn instance_names(&self) -> Option<&[String]> {
        self.instance_names.as_deref()
    }

    /// Maps source disk paths to the disks attached to the new instances.
    #[must_use]
    pub fn attached_disk_mapping(&self) -> Option<&BTreeMap<String, Vec<DiskMap>>> {
        self.attached_disk_mapping.as_ref()
    }

    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// The manual snapshot to create the instances from.
    #[must_use]
    pub fn instance_snapshot_name(&self) -> Option<&str> {
        self.instance_snapshot_name.as_deref()
    }

    /// The bundle (size) of the new instances.
    #[must_use]
    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    /// Launch script run when the instances boot.
    #[must_use]
    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    #[must_use]
    pub fn key_pair_name(&self) -> Option<&str> {
        self.key_pair_name.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    #[must_use]
    pub fn add_ons(&self) -> Option<&[AddOnRequest]> {
        self.add_ons.as_deref()
    }

    /// The instance whose automatic snapshot is used.
    #[must_use]
    pub fn source_instance_name(&self) -> Option<&str> {
        self.source_instance_name.as_deref()
    }

    /// Date of the automatic snapshot to use, `YYYY-MM-DD` format.
    #[must_use]
    pub fn restore_date(&self) -> Option<&str> {
        self.restore_date.as_deref()
    }

    #[must_use]
    pub fn use_latest_restorable_auto_snapshot(&self) -> Option<bool> {
        self.use_latest_restorable_auto_snapshot
    }
}

impl fmt::Display for CreateInstancesFromSnapshotInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("instanceNames", self.instance_names.as_deref())
            .map("attachedDiskMapping", self.attached_disk_mapping.as_ref())
            .field("availabilityZone", self.availability_zone.as_deref())
            .field("instanceSnapshotName", self.instance_snapshot_name.as_deref())
            .field("bundleId", self.bundle_id.as_deref())
            .field("userData", self.user_data.as_deref())
            .field("keyPairName", self.key_pair_name.as_deref())
            .list("tags", self.tags.as_deref())
            .list("addOns", self.add_ons.as_deref())
            .field("sourceInstanceName", self.source_instance_name.as_deref())
            .field("restoreDate", self.restore_date.as_deref())
            .field(
                "useLatestRestorableAutoSnapshot",
                self.use_latest_restorable_auto_snapshot.as_ref(),
            )
            .finish()
    }
}

/// A builder for [`CreateInstancesFromSnapshotInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateInstancesFromSnapshotInputBuilder {
    instance_names: Option<Vec<String>>,
    attached_disk_mapping: Option<BTreeMap<String, Vec<DiskMap>>>,
    availability_zone: Option<String>,
    instance_snapshot_name: Option<String>,
    bundle_id: Option<String>,
    user_data: Option<String>,
    key_pair_name: Option<String>,
    tags: Option<Vec<Tag>>,
    add_ons: Option<Vec<AddOnRequest>>,
    source_instance_name: Option<String>,
    restore_date: Option<String>,
    use_latest_restorable_auto_snapshot: Option<bool>,
}

impl CreateInstancesFromSnapshotInputBuilder {
    /// Appends an item to `instance_names`.
    ///
    /// To override the contents of this collection use
    /// [`set_instance_names`](Self::set_instance_names).
    #[must_use]
    pub fn instance_names(mut self, input: impl Into<String>) -> Self {
        self.instance_names.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `instance_names`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_instance_names<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.instance_names
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_instance_names(mut self, input: Option<Vec<String>>) -> Self {
        self.instance_names = input;
        self
    }

    #[must_use]
    pub fn get_instance_names(&self) -> &Option<Vec<String>> {
        &self.instance_names
    }

    /// Adds an entry to `attached_disk_mapping`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateKey`] if `key` is already present. The
    /// builder is left unchanged.
    pub fn attached_disk_mapping(
        &mut self,
        key: impl Into<String>,
        value: Vec<DiskMap>,
    ) -> Result<&mut Self, ModelError> {
        let key = key.into();
        let entries = self.attached_disk_mapping.get_or_insert_with(BTreeMap::new);
        if entries.contains_key(&key) {
            return Err(ModelError::DuplicateKey {
                field: "attachedDiskMapping",
                key,
            });
        }
        entries.insert(key, value);
        Ok(self)
    }

    /// Removes every entry of `attached_disk_mapping`, leaving it unset.
    #[must_use]
    pub fn clear_attached_disk_mapping(mut self) -> Self {
        self.attached_disk_mapping = None;
        self
    }

    #[must_use]
    pub fn set_attached_disk_mapping(
        mut self,
        input: Option<BTreeMap<String, Vec<DiskMap>>>,
    ) -> Self {
        self.attached_disk_mapping = input;
        self
    }

    #[must_use]
    pub fn get_attached_disk_mapping(&self) -> &Option<BTreeMap<String, Vec<DiskMap>>> {
        &self.attached_disk_mapping
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

    /// The manual snapshot to create the instances from.
    #[must_use]
    pub fn instance_snapshot_name(mut self, input: impl Into<String>) -> Self {
        self.instance_snapshot_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_instance_snapshot_name(mut self, input: Option<String>) -> Self {
        self.instance_snapshot_name = input;
        self
    }

    #[must_use]
    pub fn get_instance_snapshot_name(&self) -> &Option<String> {
        &self.instance_snapshot_name
    }

    /// The bundle (size) of the new instances.
    #[must_use]
    pub fn bundle_id(mut self, input: impl Into<String>) -> Self {
        self.bundle_id = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_bundle_id(mut self, input: Option<String>) -> Self {
        self.bundle_id = input;
        self
    }

    #[must_use]
    pub fn get_bundle_id(&self) -> &Option<String> {
        &self.bundle_id
    }

    /// Launch script run when the instances boot.
    #[must_use]
    pub fn user_data(mut self, input: impl Into<String>) -> Self {
        self.user_data = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_user_data(mut self, input: Option<String>) -> Self {
        self.user_data = input;
        self
    }

    #[must_use]
    pub fn get_user_data(&self) -> &Option<String> {
        &self.user_data
    }

    #[must_use]
    pub fn key_pair_name(mut self, input: impl Into<String>) -> Self {
        self.key_pair_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_key_pair_name(mut self, input: Option<String>) -> Self {
        self.key_pair_name = input;
        self
    }

    #[must_use]
    pub fn get_key_pair_name(&self) -> &Option<String> {
        &self.key_pair_name
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

    /// Appends an item to `add_ons`.
    ///
    /// To override the contents of this collection use [`set_add_ons`](Self::set_add_ons).
    #[must_use]
    pub fn add_ons(mut self, input: AddOnRequest) -> Self {
        self.add_ons.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `add_ons`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_add_ons(mut self, inputs: impl IntoIterator<Item = AddOnRequest>) -> Self {
        self.add_ons.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_add_ons(mut self, input: Option<Vec<AddOnRequest>>) -> Self {
        self.add_ons = input;
        self
    }

    #[must_use]
    pub fn get_add_ons(&self) -> &Option<Vec<AddOnRequest>> {
        &self.add_ons
    }

    /// The instance whose automatic snapshot is used.
    #[must_use]
    pub fn source_instance_name(mut self, input: impl Into<String>) -> Self {
        self.source_instance_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_source_instance_name(mut self, input: Option<String>) -> Self {
        self.source_instance_name = input;
        self
    }

    #[must_use]
    pub fn get_source_instance_name(&self) -> &Option<String> {
        &self.source_instance_name
    }

    /// Date of the automatic snapshot to use, `YYYY-MM-DD` format.
    #[must_use]
    pub fn restore_date(mut self, input: impl Into<String>) -> Self {
        self.restore_date = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_restore_date(mut self, input: Option<String>) -> Self {
        self.restore_date = input;
        self
    }

    #[must_use]
    pub fn get_restore_date(&self) -> &Option<String> {
        &self.restore_date
    }

    #[must_use]
    pub fn use_latest_restorable_auto_snapshot(mut self, input: bool) -> Self {
        self.use_latest_restorable_auto_snapshot = Some(input);
        self
    }

    #[must_use]
    pub fn set_use_latest_restorable_auto_snapshot(mut self, input: Option<bool>) -> Self {
        self.use_latest_restorable_auto_snapshot = input;
        self
    }

    #[must_use]
    pub fn get_use_latest_restorable_auto_snapshot(&self) -> &Option<bool> {
        &self.use_latest_restorable_auto_snapshot
    }

    /// Consumes the builder and constructs a [`CreateInstancesFromSnapshotInput`].
    #[must_use]
    pub fn build(self) -> CreateInstancesFromSnapshotInput {
        CreateInstancesFromSnapshotInput {
            instance_names: self.instance_names,
            attached_disk_mapping: self.attached_disk_mapping,
            availability_zone: self.availability_zone,
            instance_snapshot_name: self.instance_snapshot_name,
            bundle_id: self.bundle_id,
            user_data: self.user_data,
            key_pair_name: self.key_pair_name,
            tags: self.tags,
            add_ons: self.add_ons,
            source_instance_name: self.source_instance_name,
            restore_date: self.restore_date,
            use_latest_restorable_auto_snapshot: self.use_latest_restorable_auto_snapshot,
        }
    }
}

impl LightsailInput for CreateInstancesFromSnapshotInput {
    const OPERATION: LightsailOperation = LightsailOperation::CreateInstancesFromSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AddOnType;
    use crate::types::AutoSnapshotAddOnRequest;

    fn disk(original: &str, new: &str) -> DiskMap {
        DiskMap::builder()
            .original_disk_path(original)
            .new_disk_name(new)
            .build()
    }

    #[test]
    fn test_should_add_disk_mapping_entries() {
        let mut builder = CreateInstancesFromSnapshotInput::builder().instance_names("web-2");
        builder
            .attached_disk_mapping("web-1", vec![disk("/dev/xvdf", "data-2")])
            .expect("first entry")
            .attached_disk_mapping("db-1", vec![])
            .expect("second entry");
        let input = builder.build();

        let mapping = input.attached_disk_mapping().expect("mapping set");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["web-1"], vec![disk("/dev/xvdf", "data-2")]);
    }

    #[test]
    fn test_should_reject_duplicate_disk_mapping_key() {
        let mut builder = CreateInstancesFromSnapshotInput::builder();
        builder
            .attached_disk_mapping("web-1", vec![])
            .expect("first entry");
        let err = builder
            .attached_disk_mapping("web-1", vec![])
            .expect_err("duplicate key");
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "attachedDiskMapping",
                key: "web-1".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_keep_builder_state_after_duplicate_key() {
        let mut builder = CreateInstancesFromSnapshotInput::builder().instance_names("web-2");
        builder
            .attached_disk_mapping("web-1", vec![disk("/dev/xvdf", "data-2")])
            .expect("first entry");
        let before = builder.clone();

        assert!(
            builder
                .attached_disk_mapping("web-1", vec![disk("/dev/xvdg", "other")])
                .is_err()
        );
        assert_eq!(builder, before);

        let input = builder.bundle_id("nano_3_0").build();
        assert_eq!(input.instance_names(), Some(["web-2".to_owned()].as_slice()));
        assert_eq!(input.bundle_id(), Some("nano_3_0"));
        let mapping = input.attached_disk_mapping().expect("mapping kept");
        assert_eq!(mapping["web-1"], vec![disk("/dev/xvdf", "data-2")]);
    }

    #[test]
    fn test_should_clear_disk_mapping() {
        let mut builder = CreateInstancesFromSnapshotInput::builder();
        builder.attached_disk_mapping("web-1", vec![]).expect("first entry");
        let mut builder = builder.clear_attached_disk_mapping();
        builder
            .attached_disk_mapping("web-1", vec![])
            .expect("key is free again after clearing");
        let input = builder.build();
        assert_eq!(input.attached_disk_mapping().map(BTreeMap::len), Some(1));

        let mut builder = CreateInstancesFromSnapshotInput::builder();
        builder.attached_disk_mapping("web-1", vec![]).expect("entry");
        let cleared = builder.clear_attached_disk_mapping().build();
        assert_eq!(cleared.attached_disk_mapping(), None);
    }

    #[test]
    fn test_should_display_nested_map_and_lists() {
        let mut builder =
            CreateInstancesFromSnapshotInput::builder().extend_instance_names(["a", "b"]);
        builder
            .attached_disk_mapping("web-1", vec![disk("/dev/xvdf", "data-2")])
            .expect("entry");
        let input = builder.bundle_id("nano_3_0").build();
        assert_eq!(
            input.to_string(),
            "{instanceNames: [a, b], attachedDiskMapping: {web-1: [{originalDiskPath: /dev/xvdf, \
             newDiskName: data-2}]}, bundleId: nano_3_0}"
        );
    }

    #[test]
    fn test_should_serialize_nested_shapes() {
        let input = CreateInstancesFromSnapshotInput::builder()
            .instance_names("web-2")
            .availability_zone("us-east-2a")
            .source_instance_name("web-1")
            .use_latest_restorable_auto_snapshot(true)
            .add_ons(
                AddOnRequest::builder()
                    .add_on_type(AddOnType::AutoSnapshot)
                    .auto_snapshot_add_on_request(
                        AutoSnapshotAddOnRequest::builder()
                            .snapshot_time_of_day("06:00")
                            .build(),
                    )
                    .build(),
            )
            .tags(Tag::builder().key("env").value("prod").build())
            .build();
        let json = serde_json::to_value(&input).expect("serialize input");
        assert_eq!(
            json,
            serde_json::json!({
                "instanceNames": ["web-2"],
                "availabilityZone": "us-east-2a",
                "tags": [{"key": "env", "value": "prod"}],
                "addOns": [{
                    "addOnType": "AutoSnapshot",
                    "autoSnapshotAddOnRequest": {"snapshotTimeOfDay": "06:00"}
                }],
                "sourceInstanceName": "web-1",
                "useLatestRestorableAutoSnapshot": true
            })
        );
    }

    #[test]
    fn test_should_not_alias_caller_list() {
        let mut names = vec!["web-2".to_owned()];
        let input = CreateInstancesFromSnapshotInput::builder()
            .set_instance_names(Some(names.clone()))
            .build();
        names.push("web-3".to_owned());
        assert_eq!(input.instance_names(), Some(&["web-2".to_owned()][..]));
    }
}
