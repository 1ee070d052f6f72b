//! Instance firewall ports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::ShapeFormatter;

/// A firewall port range open on an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstancePortInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidr_list_aliases: Option<Vec<String>>,
}

impl InstancePortInfo {
    /// Creates a new builder-style object to manufacture [`InstancePortInfo`].
    #[must_use]
    pub fn builder() -> InstancePortInfoBuilder {
        InstancePortInfoBuilder::default()
    }

    /// First port of the range.
    #[must_use]
    pub fn from_port(&self) -> Option<i32> {
        self.from_port
    }

    /// Last port of the range.
    #[must_use]
    pub fn to_port(&self) -> Option<i32> {
        self.to_port
    }

    /// Values are listed in [`NetworkProtocol`](crate::enums::NetworkProtocol).
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Where traffic may originate, e.g. `Anywhere (0.0.0.0/0)`.
    #[must_use]
    pub fn access_from(&self) -> Option<&str> {
        self.access_from.as_deref()
    }

    /// Values are listed in [`PortAccessType`](crate::enums::PortAccessType).
    #[must_use]
    pub fn access_type(&self) -> Option<&str> {
        self.access_type.as_deref()
    }

    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    /// Values are listed in [`AccessDirection`](crate::enums::AccessDirection).
    #[must_use]
    pub fn access_direction(&self) -> Option<&str> {
        self.access_direction.as_deref()
    }

    /// IPv4 CIDR ranges allowed to connect.
    #[must_use]
    pub fn cidrs(&self) -> Option<&[String]> {
        self.cidrs.as_deref()
    }

    /// Aliases for CIDR lists, e.g. `lightsail-connect`.
    #[must_use]
    pub fn cidr_list_aliases(&self) -> Option<&[String]> {
        self.cidr_list_aliases.as_deref()
    }
}

impl fmt::Display for InstancePortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("fromPort", self.from_port.as_ref())
            .field("toPort", self.to_port.as_ref())
            .field("protocol", self.protocol.as_deref())
            .field("accessFrom", self.access_from.as_deref())
            .field("accessType", self.access_type.as_deref())
            .field("commonName", self.common_name.as_deref())
            .field("accessDirection", self.access_direction.as_deref())
            .list("cidrs", self.cidrs.as_deref())
            .list("cidrListAliases", self.cidr_list_aliases.as_deref())
            .finish()
    }
}

/// A builder for [`InstancePortInfo`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstancePortInfoBuilder {
    from_port: Option<i32>,
    to_port: Option<i32>,
    protocol: Option<String>,
    access_from: Option<String>,
    access_type: Option<String>,
    common_name: Option<String>,
    access_direction: Option<String>,
    cidrs: Option<Vec<String>>,
    cidr_list_aliases: Option<Vec<String>>,
}

impl InstancePortInfoBuilder {
    /// First port of the range.
    #[must_use]
    pub fn from_port(mut self, input: i32) -> Self {
        self.from_port = Some(input);
        self
    }

    #[must_use]
    pub fn set_from_port(mut self, input: Option<i32>) -> Self {
        self.from_port = input;
        self
    }

    #[must_use]
    pub fn get_from_port(&self) -> &Option<i32> {
        &self.from_port
    }

    /// Last port of the range.
    #[must_use]
    pub fn to_port(mut self, input: i32) -> Self {
        self.to_port = Some(input);
        self
    }

    #[must_use]
    pub fn set_to_port(mut self, input: Option<i32>) -> Self {
        self.to_port = input;
        self
    }

    #[must_use]
    pub fn get_to_port(&self) -> &Option<i32> {
        &self.to_port
    }

    /// Values are listed in [`NetworkProtocol`](crate::enums::NetworkProtocol).
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

    /// Where traffic may originate, e.g. `Anywhere (0.0.0.0/0)`.
    #[must_use]
    pub fn access_from(mut self, input: impl Into<String>) -> Self {
        self.access_from = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_access_from(mut self, input: Option<String>) -> Self {
        self.access_from = input;
        self
    }

    #[must_use]
    pub fn get_access_from(&self) -> &Option<String> {
        &self.access_from
    }

    /// Values are listed in [`PortAccessType`](crate::enums::PortAccessType).
    #[must_use]
    pub fn access_type(mut self, input: impl Into<String>) -> Self {
        self.access_type = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_access_type(mut self, input: Option<String>) -> Self {
        self.access_type = input;
        self
    }

    #[must_use]
    pub fn get_access_type(&self) -> &Option<String> {
        &self.access_type
    }

    #[must_use]
    pub fn common_name(mut self, input: impl Into<String>) -> Self {
        self.common_name = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_common_name(mut self, input: Option<String>) -> Self {
        self.common_name = input;
        self
    }

    #[must_use]
    pub fn get_common_name(&self) -> &Option<String> {
        &self.common_name
    }

    /// Values are listed in [`AccessDirection`](crate::enums::AccessDirection).
    #[must_use]
    pub fn access_direction(mut self, input: impl Into<String>) -> Self {
        self.access_direction = Some(input.into());
        self
    }

    #[must_use]
    pub fn set_access_direction(mut self, input: Option<String>) -> Self {
        self.access_direction = input;
        self
    }

    #[must_use]
    pub fn get_access_direction(&self) -> &Option<String> {
        &self.access_direction
    }

    /// Appends an item to `cidrs`.
    ///
    /// To override the contents of this collection use [`set_cidrs`](Self::set_cidrs).
    #[must_use]
    pub fn cidrs(mut self, input: impl Into<String>) -> Self {
        self.cidrs.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `cidrs`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_cidrs<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.cidrs
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_cidrs(mut self, input: Option<Vec<String>>) -> Self {
        self.cidrs = input;
        self
    }

    #[must_use]
    pub fn get_cidrs(&self) -> &Option<Vec<String>> {
        &self.cidrs
    }

    /// Appends an item to `cidr_list_aliases`.
    ///
    /// To override the contents of this collection use
    /// [`set_cidr_list_aliases`](Self::set_cidr_list_aliases).
    #[must_use]
    pub fn cidr_list_aliases(mut self, input: impl Into<String>) -> Self {
        self.cidr_list_aliases.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Appends every item to `cidr_list_aliases`, allocating it even when `inputs` is empty.
    #[must_use]
    pub fn extend_cidr_list_aliases<I, V>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.cidr_list_aliases
            .get_or_insert_with(Vec::new)
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn set_cidr_list_aliases(mut self, input: Option<Vec<String>>) -> Self {
        self.cidr_list_aliases = input;
        self
    }

    #[must_use]
    pub fn get_cidr_list_aliases(&self) -> &Option<Vec<String>> {
        &self.cidr_list_aliases
    }

    /// Consumes the builder and constructs a [`InstancePortInfo`].
    #[must_use]
    pub fn build(self) -> InstancePortInfo {
        InstancePortInfo {
            from_port: self.from_port,
            to_port: self.to_port,
            protocol: self.protocol,
            access_from: self.access_from,
            access_type: self.access_type,
            common_name: self.common_name,
            access_direction: self.access_direction,
            cidrs: self.cidrs,
            cidr_list_aliases: self.cidr_list_aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AccessDirection, NetworkProtocol, PortAccessType};

    #[test]
    fn test_should_append_cidrs_in_order() {
        let port = InstancePortInfo::builder()
            .from_port(22)
            .to_port(22)
            .protocol(NetworkProtocol::Tcp)
            .access_type(PortAccessType::Public)
            .access_direction(AccessDirection::Inbound)
            .cidrs("10.0.0.0/8")
            .extend_cidrs(["192.168.0.0/16", "172.16.0.0/12"])
            .build();
        assert_eq!(
            port.cidrs(),
            Some(
                &[
                    "10.0.0.0/8".to_owned(),
                    "192.168.0.0/16".to_owned(),
                    "172.16.0.0/12".to_owned()
                ][..]
            )
        );
        assert_eq!(port.protocol(), Some("tcp"));
        assert_eq!(port.access_direction(), Some("inbound"));
    }

    #[test]
    fn test_should_distinguish_unset_from_empty_list() {
        let unset = InstancePortInfo::builder().build();
        let empty = InstancePortInfo::builder().set_cidrs(Some(Vec::new())).build();
        assert_eq!(unset.cidrs(), None);
        assert_eq!(empty.cidrs(), Some(&[][..]));
        assert_ne!(unset, empty);
        assert_eq!(empty.to_string(), "{cidrs: []}");
    }

    #[test]
    fn test_should_render_port_range() {
        let port = InstancePortInfo::builder()
            .from_port(0)
            .to_port(65535)
            .protocol("all")
            .cidr_list_aliases("lightsail-connect")
            .build();
        assert_eq!(
            port.to_string(),
            "{fromPort: 0, toPort: 65535, protocol: all, cidrListAliases: [lightsail-connect]}"
        );
    }
}
