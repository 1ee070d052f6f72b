//! Lightsail input types.
//!
//! One request shape per modeled operation, each implementing
//! [`LightsailInput`](crate::operations::LightsailInput).

mod alarm;
mod instance;
mod relational_database;

pub use alarm::{PutAlarmInput, PutAlarmInputBuilder};
pub use instance::{CreateInstancesFromSnapshotInput, CreateInstancesFromSnapshotInputBuilder};
pub use relational_database::{
    CreateRelationalDatabaseInput, CreateRelationalDatabaseInputBuilder,
    GetRelationalDatabaseMetricDataInput, GetRelationalDatabaseMetricDataInputBuilder,
};
