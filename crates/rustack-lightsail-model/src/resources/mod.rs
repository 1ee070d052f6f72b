//! Lightsail resource snapshots.
//!
//! Each type mirrors the service's description of one resource at the time it
//! was read. Snapshots are usually produced by deserializing a response.

mod alarm;
mod contact_method;
mod instance_port_info;
mod load_balancer_tls_certificate;
mod relational_database;

pub use alarm::{Alarm, AlarmBuilder};
pub use contact_method::{ContactMethod, ContactMethodBuilder};
pub use instance_port_info::{InstancePortInfo, InstancePortInfoBuilder};
pub use load_balancer_tls_certificate::{
    LoadBalancerTlsCertificate, LoadBalancerTlsCertificateBuilder,
};
pub use relational_database::{RelationalDatabase, RelationalDatabaseBuilder};
