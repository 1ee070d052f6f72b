//! Lightsail model types for Rustack.
//!
//! Typed request shapes, resource snapshots and closed enumerations of the AWS
//! Lightsail `2016-11-28` API. Shapes are immutable values created through
//! builders; every field is optional and enum-constrained fields keep the raw
//! wire string so that values newer than this crate are preserved. Parse such a
//! field with [`LightsailEnum::from_field`] when the typed member is needed.
//!
//! The crate performs no I/O. The `rustack-lightsail-json` crate encodes
//! these shapes for the `awsJson1_1` protocol.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::ref_option)]
#![allow(clippy::struct_field_names)]
#![allow(missing_docs)]

pub mod enums;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod resources;
pub mod shape;
pub mod timestamp;
pub mod types;

pub use enums::LightsailEnum;
pub use error::{LightsailError, LightsailErrorCode, ModelError};
pub use operations::{LightsailInput, LightsailOperation};
