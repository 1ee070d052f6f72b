//! Notification contact methods.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeFormatter;
use crate::timestamp;
use crate::types::ResourceLocation;

/// A channel used to deliver alarm notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,
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
}

impl ContactMethod {
    /// Creates a new builder-style object to manufacture [`ContactMethod`].
    #[must_use]
    pub fn builder() -> ContactMethodBuilder {
        ContactMethodBuilder::default()
    }

    /// The email address or phone number.
    #[must_use]
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint.as_deref()
    }

    /// Values are listed in [`ContactMethodStatus`](crate::enums::ContactMethodStatus).
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Values are listed in [`ContactProtocol`](crate::enums::ContactProtocol).
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
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
    pub fn support_code(&self) -> Option<&str> {
        self.support_code.as_deref()
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("contactEndpoint", self.contact_endpoint.as_deref())
            .field("status", self.status.as_deref())
            .field("protocol", self.protocol.as_deref())
            .field("name", self.name.as_deref())
            .field("arn", self.arn.as_deref())
            .field("createdAt", self.created_at.as_ref())
            .field("location", self.location.as_ref())
            .field("resourceType", self.resource_type.as_deref())
            .field("supportCode", self.support_code.as_deref())
            .finish()
    }
}

/// A builder for [`ContactMethod`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMethodBuilder {
    contact_endpoint: Option<String>,
    status: Option<String>,
    protocol: Option<String>,
    name: Option<String>,
    arn: Option<String>,
    created_at: Option<DateTime<Utc>>,
    location: Option<ResourceLocation>,
    resource_type: Option<String>,
    support_code: Option<String>,
}

impl ContactMethodBuilder {
    /// The email address or phone number.
    #[must_use]
    pub fn contact_endpoint(mut self, input: impl Into<String>) -> Self {
        self.contact_endpoint = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_contact_endpoint(mut self, input: Option<String>) -> Self {
        self.contact_endpoint = input;
        self
    }

    #[must_use]
    pub fn get_contact_endpoint(&self) -> &Option<String> {
        &self.contact_endpoint
    }

    /// Values are listed in [`ContactMethodStatus`](crate::enums::ContactMethodStatus).
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

    /// Values are listed in [`ContactProtocol`](crate::enums::ContactProtocol).
    #[must_use]
    pub fn protocol(mut self, input: impl Into<String>) -> Self {
        self.protocol = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_protocol(mut self, input: Option<String>) -> Self {
        self.protocol = input;
        self
    }

    #[must_use]
    pub fn get_protocol(&self) -> &Option<String> {
        &self.protocol
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

    /// Consumes the builder and constructs a [`ContactMethod`].
    #[must_use]
    pub fn build(self) -> ContactMethod {
        ContactMethod {
            contact_endpoint: self.contact_endpoint,
            status: self.status,
            protocol: self.protocol,
            name: self.name,
            arn: self.arn,
            created_at: self.created_at,
            location: self.location,
            resource_type: self.resource_type,
            support_code: self.support_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ContactMethodStatus, ContactProtocol, LightsailEnum};

    #[test]
    fn test_should_build_contact_method() {
        let method = ContactMethod::builder()
            .contact_endpoint("ops@example.com")
            .protocol(ContactProtocol::Email)
            .status(ContactMethodStatus::PendingVerification)
            .build();
        assert_eq!(method.protocol(), Some("Email"));
        assert_eq!(
            ContactMethodStatus::from_field(method.status()),
            Ok(ContactMethodStatus::PendingVerification)
        );
        assert_eq!(
            method.to_string(),
            "{contactEndpoint: ops@example.com, status: PendingVerification, protocol: Email}"
        );
    }

    #[test]
    fn test_should_read_back_builder_fields() {
        let builder = ContactMethod::builder().name("Email-us-east-2");
        assert_eq!(builder.get_name(), &Some("Email-us-east-2".to_owned()));
        assert_eq!(builder.get_arn(), &None);
        let builder = builder.set_name(None);
        assert_eq!(builder.build(), ContactMethod::default());
    }
}
