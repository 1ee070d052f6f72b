//! Load balancer SSL/TLS certificates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeFormatter;
use crate::timestamp;
use crate::types::{
    LoadBalancerTlsCertificateDomainValidationRecord, LoadBalancerTlsCertificateRenewalSummary,
    ResourceLocation, Tag,
};

/// An SSL/TLS certificate for a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerTlsCertificate {
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
    load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_attached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_validation_records: Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    issued_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_algorithm: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    not_after: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    not_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    renewal_summary: Option<LoadBalancerTlsCertificateRenewalSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    revocation_reason: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    revoked_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject_alternative_names: Option<Vec<String>>,
}

impl LoadBalancerTlsCertificate {
    /// Creates a new builder-style object to manufacture [`LoadBalancerTlsCertificate`].
    #[must_use]
    pub fn builder() -> LoadBalancerTlsCertificateBuilder {
        LoadBalancerTlsCertificateBuilder::default()
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

    /// The load balancer the certificate belongs to.
    #[must_use]
    pub fn load_balancer_name(&self) -> Option<&str> {
        self.load_balancer_name.as_deref()
    }

    /// Whether the certificate is attached to the load balancer.
    #[must_use]
    pub fn is_attached(&self) -> Option<bool> {
        self.is_attached
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateStatus`].
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The domain name of the certificate.
    #[must_use]
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    #[must_use]
    pub fn domain_validation_records(
        &self,
    ) -> Option<&[LoadBalancerTlsCertificateDomainValidationRecord]> {
        self.domain_validation_records.as_deref()
    }

    /// Set when issuance failed.
    ///
    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateFailureReason`].
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    #[must_use]
    pub fn key_algorithm(&self) -> Option<&str> {
        self.key_algorithm.as_deref()
    }

    /// End of the validity period.
    #[must_use]
    pub fn not_after(&self) -> Option<DateTime<Utc>> {
        self.not_after
    }

    /// Start of the validity period.
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.not_before
    }

    #[must_use]
    pub fn renewal_summary(&self) -> Option<&LoadBalancerTlsCertificateRenewalSummary> {
        self.renewal_summary.as_ref()
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateRevocationReason`].
    #[must_use]
    pub fn revocation_reason(&self) -> Option<&str> {
        self.revocation_reason.as_deref()
    }

    #[must_use]
    pub fn revoked_at(&self) -> Option<DateTime<Utc>> {
        self.revoked_at
    }

    #[must_use]
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    #[must_use]
    pub fn signature_algorithm(&self) -> Option<&str> {
        self.signature_algorithm.as_deref()
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Additional domains covered by the certificate.
    #[must_use]
    pub fn subject_alternative_names(&self) -> Option<&[String]> {
        self.subject_alternative_names.as_deref()
    }
}

impl fmt::Display for LoadBalancerTlsCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("name", self.name.as_deref())
            .field("arn", self.arn.as_deref())
            .field("supportCode", self.support_code.as_deref())
            .field("createdAt", self.created_at.as_ref())
            .field("location", self.location.as_ref())
            .field("resourceType", self.resource_type.as_deref())
            .list("tags", self.tags.as_deref())
            .field("loadBalancerName", self.load_balancer_name.as_deref())
            .field("isAttached", self.is_attached.as_ref())
            .field("status", self.status.as_deref())
            .field("domainName", self.domain_name.as_deref())
            .list("domainValidationRecords", self.domain_validation_records.as_deref())
            .field("failureReason", self.failure_reason.as_deref())
            .field("issuedAt", self.issued_at.as_ref())
            .field("issuer", self.issuer.as_deref())
            .field("keyAlgorithm", self.key_algorithm.as_deref())
            .field("notAfter", self.not_after.as_ref())
            .field("notBefore", self.not_before.as_ref())
            .field("renewalSummary", self.renewal_summary.as_ref())
            .field("revocationReason", self.revocation_reason.as_deref())
            .field("revokedAt", self.revoked_at.as_ref())
            .field("serial", self.serial.as_deref())
            .field("signatureAlgorithm", self.signature_algorithm.as_deref())
            .field("subject", self.subject.as_deref())
            .list("subjectAlternativeNames", self.subject_alternative_names.as_deref())
            .finish()
    }
}

/// A builder for [`LoadBalancerTlsCertificate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancerTlsCertificateBuilder {
    name: Option<String>,
    arn: Option<String>,
    support_code: Option<String>,
    created_at: Option<DateTime<Utc>>,
    location: Option<ResourceLocation>,
    resource_type: Option<String>,
    tags: Option<Vec<Tag>>,
    load_balancer_name: Option<String>,
    is_attached: Option<bool>,
    status: Option<String>,
    domain_name: Option<String>,
    domain_validation_records: Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>>,
    failure_reason: Option<String>,
    issued_at: Option<DateTime<Utc>>,
    issuer: Option<String>,
    key_algorithm: Option<String>,
    not_after: Option<DateTime<Utc>>,
    not_before: Option<DateTime<Utc>>,
    renewal_summary: Option<LoadBalancerTlsCertificateRenewalSummary>,
    revocation_reason: Option<String>,
    revoked_at: Option<DateTime<Utc>>,
    serial: Option<String>,
    signature_algorithm: Option<String>,
    subject: Option<String>,
    subject_alternative_names: Option<Vec<String>>,
}

impl LoadBalancerTlsCertificateBuilder {
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

    /// The load balancer the certificate belongs to.
    #[must_use]
    pub fn load_balancer_name(mut self, input: impl Into<String>) -> Self {
        self.load_balancer_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_load_balancer_name(mut self, input: Option<String>) -> Self {
        self.load_balancer_name = input;
        self
    }

    #[must_use]
    pub fn get_load_balancer_name(&self) -> &Option<String> {
        &self.load_balancer_name
    }

    /// Whether the certificate is attached to the load balancer.
    #[must_use]
    pub fn is_attached(mut self, input: bool) -> Self {
        self.is_attached = Some(input);
        self
    }

    #[must_use]
    pub fn set_is_attached(mut self, input: Option<bool>) -> Self {
        self.is_attached = input;
        self
    }

    #[must_use]
    pub fn get_is_attached(&self) -> &Option<bool> {
        &self.is_attached
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateStatus`].
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

    /// The domain name of the certificate.
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

    /// Appends an item to `domain_validation_records`.
    ///
    /// To override the contents of this collection use
    /// [`set_domain_validation_records`](Self::set_domain_validation_records).
    #[must_use]
    pub fn domain_validation_records(
        mut self,
        input: LoadBalancerTlsCertificateDomainValidationRecord,
    ) -> Self {
        self.domain_validation_records.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Appends every item to `domain_validation_records`, allocating it even when `inputs` is
    /// empty.
    #[must_use]
    pub fn extend_domain_validation_records(
        mut self,
        inputs: impl IntoIterator<Item = LoadBalancerTlsCertificateDomainValidationRecord>,
    ) -> Self {
        self.domain_validation_records.get_or_insert_with(Vec::new).extend(inputs);
        self
    }

    #[must_use]
    pub fn set_domain_validation_records(
        mut self,
        input: Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>>,
    ) -> Self {
        self.domain_validation_records = input;
        self
    }

    #[must_use]
    pub fn get_domain_validation_records(
        &self,
    ) -> &Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>> {
        &self.domain_validation_records
    }

    /// Set when issuance failed.
    ///
    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateFailureReason`].
    #[must_use]
    pub fn failure_reason(mut self, input: impl Into<String>) -> Self {
        self.failure_reason = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_failure_reason(mut self, input: Option<String>) -> Self {
        self.failure_reason = input;
        self
    }

    #[must_use]
    pub fn get_failure_reason(&self) -> &Option<String> {
        &self.failure_reason
    }

    #[must_use]
    pub fn issued_at(mut self, input: DateTime<Utc>) -> Self {
        self.issued_at = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_issued_at(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.issued_at = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_issued_at(&self) -> &Option<DateTime<Utc>> {
        &self.issued_at
    }

    #[must_use]
    pub fn issuer(mut self, input: impl Into<String>) -> Self {
        self.issuer = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_issuer(mut self, input: Option<String>) -> Self {
        self.issuer = input;
        self
    }

    #[must_use]
    pub fn get_issuer(&self) -> &Option<String> {
        &self.issuer
    }

    #[must_use]
    pub fn key_algorithm(mut self, input: impl Into<String>) -> Self {
        self.key_algorithm = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_key_algorithm(mut self, input: Option<String>) -> Self {
        self.key_algorithm = input;
        self
    }

    #[must_use]
    pub fn get_key_algorithm(&self) -> &Option<String> {
        &self.key_algorithm
    }

    /// End of the validity period.
    #[must_use]
    pub fn not_after(mut self, input: DateTime<Utc>) -> Self {
        self.not_after = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_not_after(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.not_after = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_not_after(&self) -> &Option<DateTime<Utc>> {
        &self.not_after
    }

    /// Start of the validity period.
    #[must_use]
    pub fn not_before(mut self, input: DateTime<Utc>) -> Self {
        self.not_before = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_not_before(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.not_before = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_not_before(&self) -> &Option<DateTime<Utc>> {
        &self.not_before
    }

    #[must_use]
    pub fn renewal_summary(mut self, input: LoadBalancerTlsCertificateRenewalSummary) -> Self {
        self.renewal_summary = Some(input);
        self
    }

    #[must_use]
    pub fn set_renewal_summary(
        mut self,
        input: Option<LoadBalancerTlsCertificateRenewalSummary>,
    ) -> Self {
        self.renewal_summary = input;
        self
    }

    #[must_use]
    pub fn get_renewal_summary(&self) -> &Option<LoadBalancerTlsCertificateRenewalSummary> {
        &self.renewal_summary
    }

    /// Values are listed in
    /// [`crate::enums::LoadBalancerTlsCertificateRevocationReason`].
    #[must_use]
    pub fn revocation_reason(mut self, input: impl Into<String>) -> Self {
        self.revocation_reason = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_revocation_reason(mut self, input: Option<String>) -> Self {
        self.revocation_reason = input;
        self
    }

    #[must_use]
    pub fn get_revocation_reason(&self) -> &Option<String> {
        &self.revocation_reason
    }

    #[must_use]
    pub fn revoked_at(mut self, input: DateTime<Utc>) -> Self {
        self.revoked_at = Some(timestamp::truncate_to_millis(input));
        self
    }

    #[must_use]
    pub fn set_revoked_at(mut self, input: Option<DateTime<Utc>>) -> Self {
        self.revoked_at = input.map(timestamp::truncate_to_millis);
        self
    }

    #[must_use]
    pub fn get_revoked_at(&self) -> &Option<DateTime<Utc>> {
        &self.revoked_at
    }

    #[must_use]
    pub fn serial(mut self, input: impl Into<String>) -> Self {
        self.serial = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_serial(mut self, input: Option<String>) -> Self {
        self.serial = input;
        self
    }

    #[must_use]
    pub fn get_serial(&self) -> &Option<String> {
        &self.serial
    }

    #[must_use]
    pub fn signature_algorithm(mut self, input: impl Into<String>) -> Self {
        self.signature_algorithm = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_signature_algorithm(mut self, input: Option<String>) -> Self {
        self.signature_algorithm = input;
        self
    }

    #[must_use]
    pub fn get_signature_algorithm(&self) -> &Option<String> {
        &self.signature_algorithm
    }

    #[must_use]
    pub fn subject(mut self, input: impl Into<String>) -> Self {
        self.subject = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_subject(mut self, input: Option<String>) -> Self {
        self.subject = input;
        self
    }

    #[must_use]
    pub fn get_subject(&self) -> &Option<String> {
        &self.subject
    }

    /// Appends an item to `subject_alternative_names`.
    ///
    /// To override the contents of this collection use
    /// [`set_subject_alternative_names`](Self::set_subject_alternative_names).
    #[must_use]
    pub fn subject_alternative_names(mut self, input: impl Into<String>) -> Self {
        self.subject_alternative_names.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `subject_alternative_names`, allocating it even when `inputs` is
    /// empty.
    #[must_use]
    pub fn extend_subject_alternative_names<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subject_alternative_names
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_subject_alternative_names(mut self, input: Option<Vec<String>>) -> Self {
        self.subject_alternative_names = input;
        self
    }

    #[must_use]
    pub fn get_subject_alternative_names(&self) -> &Option<Vec<String>> {
        &self.subject_alternative_names
    }

    /// Consumes the builder and constructs a [`LoadBalancerTlsCertificate`].
    #[must_use]
    pub fn build(self) -> LoadBalancerTlsCertificate {
        LoadBalancerTlsCertificate {
            name: self.name,
            arn: self.arn,
            support_code: self.support_code,
            created_at: self.created_at,
            location: self.location,
            resource_type: self.resource_type,
            tags: self.tags,
            load_balancer_name: self.load_balancer_name,
            is_attached: self.is_attached,
            status: self.status,
            domain_name: self.domain_name,
            domain_validation_records: self.domain_validation_records,
            failure_reason: self.failure_reason,
            issued_at: self.issued_at,
            issuer: self.issuer,
            key_algorithm: self.key_algorithm,
            not_after: self.not_after,
            not_before: self.not_before,
            renewal_summary: self.renewal_summary,
            revocation_reason: self.revocation_reason,
            revoked_at: self.revoked_at,
            serial: self.serial,
            signature_algorithm: self.signature_algorithm,
            subject: self.subject,
            subject_alternative_names: self.subject_alternative_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{
        LightsailEnum, LoadBalancerTlsCertificateDomainStatus,
        LoadBalancerTlsCertificateRenewalStatus, LoadBalancerTlsCertificateStatus,
    };

    #[test]
    fn test_should_deserialize_certificate_with_renewal_summary() {
        let json = r#"{
            "name": "example-cert",
            "loadBalancerName": "web-lb",
            "isAttached": true,
            "status": "ISSUED",
            "domainName": "example.com",
            "domainValidationRecords": [{
                "name": "_x1.example.com.",
                "type": "CNAME",
                "value": "_y2.acm-validations.aws.",
                "validationStatus": "SUCCESS",
                "domainName": "example.com"
            }],
            "renewalSummary": {
                "renewalStatus": "PENDING_AUTO_RENEWAL",
                "domainValidationOptions": [
                    {"domainName": "example.com", "validationStatus": "SUCCESS"}
                ]
            },
            "notAfter": 1731536000,
            "subjectAlternativeNames": ["example.com", "www.example.com"],
            "tags": [{"key": "env", "value": "prod"}]
        }"#;
        let cert: LoadBalancerTlsCertificate =
            serde_json::from_str(json).expect("deserialize certificate");

        assert_eq!(cert.is_attached(), Some(true));
        assert_eq!(
            LoadBalancerTlsCertificateStatus::from_field(cert.status()),
            Ok(LoadBalancerTlsCertificateStatus::Issued)
        );
        let records = cert.domain_validation_records().expect("records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].r#type(), Some("CNAME"));
        assert_eq!(
            LoadBalancerTlsCertificateDomainStatus::from_field(records[0].validation_status()),
            Ok(LoadBalancerTlsCertificateDomainStatus::Success)
        );
        let renewal = cert.renewal_summary().expect("renewal summary");
        assert_eq!(
            LoadBalancerTlsCertificateRenewalStatus::from_field(renewal.renewal_status()),
            Ok(LoadBalancerTlsCertificateRenewalStatus::PendingAutoRenewal)
        );
        assert_eq!(cert.not_after().map(|t| t.timestamp()), Some(1_731_536_000));
        assert_eq!(cert.failure_reason(), None);
        assert_eq!(cert.tags().map(<[Tag]>::len), Some(1));
    }

    #[test]
    fn test_should_render_certificate_summary() {
        let cert = LoadBalancerTlsCertificate::builder()
            .name("example-cert")
            .is_attached(false)
            .status(LoadBalancerTlsCertificateStatus::PendingValidation)
            .extend_subject_alternative_names(["example.com", "www.example.com"])
            .build();
        assert_eq!(
            cert.to_string(),
            "{name: example-cert, isAttached: false, status: PENDING_VALIDATION, \
             subjectAlternativeNames: [example.com, www.example.com]}"
        );
    }
}
