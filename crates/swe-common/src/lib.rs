//! SWE Common: typed component trees for sensor observation data.
//!
//! This crate models the OGC SWE Common Data Model 2.0: scalar components
//! (`Boolean`, `Text`, `Category`, `Count`, `Quantity`, `Time`) composed into
//! records, vectors and arrays. A tree can be projected to its schema (a
//! JSON mapping in the SWE Common JSON shape) or read and written as a
//! nested run-time [`Value`].
//!
//! # Quick Start
//!
//! ```rust
//! use swe_common::{Component, Value};
//!
//! let template = Component::data_record("obs", "Observation", "urn:obs")
//!     .with_field(Component::text("f1", "Field 1", "urn:f1"))
//!     .with_field(Component::quantity("f2", "Field 2", "urn:f2").with_uom("m"));
//!
//! let mut array = Component::data_array("series", "Series", "urn:series");
//! array
//!     .as_array_mut()
//!     .unwrap()
//!     .set_component_template_and_size(2, template)
//!     .unwrap();
//!
//! let values = Value::Array(vec![
//!     Value::record([("f1", Value::from("A")), ("f2", Value::Real(1.0))]),
//!     Value::record([("f1", Value::from("B")), ("f2", Value::Real(2.0))]),
//! ]);
//! array.set_value(values.clone()).unwrap();
//! assert_eq!(array.get_value(), values);
//!
//! let schema = array.project_schema();
//! assert_eq!(schema["elementCount"]["value"], 2);
//! assert_eq!(schema["elementType"]["type"], "DataRecord");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Component tree, values, constraints, encodings
//! - [`codec`]: Schema projection and JSON value conversion
//! - [`validate`]: Opt-in constraint validation
//! - [`definitions`]: Well-known OGC URIs
//! - [`error`]: Error types
//! - [`limits`]: Resource limits
//!
//! # Constraints
//!
//! Constraints are descriptive. `set_value` never checks them; call
//! [`validate_component`] to do so explicitly.

pub mod codec;
pub mod definitions;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{project_component, value_from_json, value_from_json_for, value_to_json};
pub use error::{ComponentError, ValidationError};
pub use model::{
    AllowedTokens, AllowedValues, BinaryEncoding, Boolean, ByteEncoding, ByteOrder, Category,
    Component, ComponentData, ComponentId, ComponentKind, Count, DataArray, DataRecord, Metadata,
    Quantity, Text, TextEncoding, Time, Value, Vector,
};
pub use validate::{validate_component, validate_value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use limits::SWE_COMMON_VERSION;
