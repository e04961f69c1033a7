//! Projections of a component tree.
//!
//! - [`schema`]: the value-free structural mapping in SWE Common JSON shape
//! - [`value`]: conversion between run-time [`Value`](crate::model::Value)s
//!   and JSON

pub mod schema;
pub mod value;

pub use schema::{
    project_allowed_tokens, project_allowed_values, project_binary_encoding, project_component,
    project_text_encoding,
};
pub use value::{value_from_json, value_from_json_for, value_to_json};
