//! Data model types for SWE Common.
//!
//! This module contains the component tree and its collaborators:
//! - Identifiers
//! - Kind tags and run-time values
//! - Constraints
//! - Scalar, record, vector and array payloads
//! - Encoding descriptors

pub mod array;
pub mod component;
pub mod constraint;
pub mod encoding;
pub mod id;
pub mod record;
pub mod scalar;
pub mod value;
pub mod vector;

pub use array::DataArray;
pub use component::{Component, ComponentData, Metadata};
pub use constraint::{AllowedTokens, AllowedValues};
pub use encoding::{BinaryEncoding, ByteEncoding, ByteOrder, TextEncoding};
pub use id::{format_id, parse_id, ComponentId};
pub use record::DataRecord;
pub use scalar::{Boolean, Category, Count, Quantity, Text, Time};
pub use value::{ComponentKind, Value};
pub use vector::Vector;
