//! Schema projection for SWE Common components.
//!
//! Projects a component tree to a nested JSON mapping matching the SWE
//! Common JSON encoding. The projection is structural: scalar values are
//! never included. Arrays project their template, not their elements, so
//! the cost is independent of the array size.

use serde_json::{json, Map, Value as JsonValue};

use crate::model::{
    AllowedTokens, AllowedValues, BinaryEncoding, Component, ComponentData, DataArray,
    TextEncoding, Vector,
};

// =============================================================================
// COMPONENTS
// =============================================================================

/// Projects a component and its children.
pub fn project_component(component: &Component) -> JsonValue {
    let mut schema = project_base(component);

    match component.data() {
        ComponentData::Boolean(_) => {}
        ComponentData::Text(t) => {
            insert_tokens(&mut schema, t.constraint.as_ref());
        }
        ComponentData::Category(c) => {
            if let Some(code_space) = &c.code_space {
                schema.insert("codeSpace".into(), json!({ "href": code_space }));
            }
            insert_tokens(&mut schema, c.constraint.as_ref());
        }
        ComponentData::Count(c) => {
            insert_values(&mut schema, c.constraint.as_ref());
        }
        ComponentData::Quantity(q) => {
            if let Some(uom) = &q.uom {
                schema.insert("uom".into(), json!({ "code": uom }));
            }
            insert_values(&mut schema, q.constraint.as_ref());
        }
        ComponentData::Time(t) => {
            schema.insert("uom".into(), json!({ "code": t.uom }));
            insert_values(&mut schema, t.constraint.as_ref());
        }
        ComponentData::DataRecord(r) => {
            let fields: Vec<JsonValue> = r.fields().iter().map(project_component).collect();
            schema.insert("fields".into(), JsonValue::Array(fields));
        }
        ComponentData::Vector(v) => project_vector(&mut schema, v),
        ComponentData::DataArray(a) => project_array(&mut schema, a),
    }

    JsonValue::Object(schema)
}

/// Keys shared by every component.
fn project_base(component: &Component) -> Map<String, JsonValue> {
    let meta = &component.meta;
    let mut schema = Map::new();
    schema.insert("name".into(), json!(meta.name));
    schema.insert("type".into(), json!(component.kind().as_str()));
    schema.insert("label".into(), json!(meta.label));
    schema.insert("definition".into(), json!(meta.definition));
    schema.insert("description".into(), json!(meta.description));
    if meta.optional {
        schema.insert("optional".into(), JsonValue::Bool(true));
    }
    if meta.updatable {
        schema.insert("updatable".into(), JsonValue::Bool(true));
    }
    schema
}

fn insert_tokens(schema: &mut Map<String, JsonValue>, constraint: Option<&AllowedTokens>) {
    if let Some(c) = constraint {
        schema.insert("constraint".into(), project_allowed_tokens(c));
    }
}

fn insert_values(schema: &mut Map<String, JsonValue>, constraint: Option<&AllowedValues>) {
    if let Some(c) = constraint {
        schema.insert("constraint".into(), project_allowed_values(c));
    }
}

/// Coordinates are summarized rather than fully projected.
fn project_vector(schema: &mut Map<String, JsonValue>, vector: &Vector) {
    schema.insert("referenceFrame".into(), json!(vector.reference_frame));
    schema.insert("localFrame".into(), json!(vector.local_frame));

    let coordinates: Vec<JsonValue> = vector
        .coordinates()
        .map(|(axis, coord)| {
            let mut entry = Map::new();
            entry.insert("name".into(), json!(coord.name()));
            entry.insert("type".into(), json!(coord.kind().as_str()));
            entry.insert("definition".into(), json!(coord.definition()));
            entry.insert("axisID".into(), json!(axis));
            entry.insert("label".into(), json!(coord.label()));
            let uom = match coord.data() {
                ComponentData::Quantity(q) => q.uom.as_deref(),
                ComponentData::Time(t) => Some(t.uom.as_str()),
                _ => None,
            };
            if let Some(uom) = uom {
                entry.insert("uom".into(), json!({ "code": uom }));
            }
            JsonValue::Object(entry)
        })
        .collect();
    schema.insert("coordinates".into(), JsonValue::Array(coordinates));
}

fn project_array(schema: &mut Map<String, JsonValue>, array: &DataArray) {
    let count = array.element_count();
    let count_value = count.as_count().and_then(|c| c.get());
    schema.insert(
        "elementCount".into(),
        json!({
            "type": count.kind().as_str(),
            "definition": count.definition(),
            "value": count_value,
        }),
    );

    if let Some(template) = array.template() {
        schema.insert(
            "elementType".into(),
            json!({
                "name": template.name(),
                "type": template.kind().as_str(),
                "definition": template.definition(),
                "description": template.description(),
            }),
        );
    }
}

// =============================================================================
// CONSTRAINTS
// =============================================================================

/// Projects a token constraint as `{value?, pattern?}`.
pub fn project_allowed_tokens(constraint: &AllowedTokens) -> JsonValue {
    let mut schema = Map::new();
    if let Some(values) = &constraint.values {
        schema.insert("value".into(), json!(values));
    }
    if let Some(pattern) = &constraint.pattern {
        schema.insert("pattern".into(), json!(pattern));
    }
    JsonValue::Object(schema)
}

/// Projects a value constraint as `{value?, interval?, significantFigures?}`.
pub fn project_allowed_values(constraint: &AllowedValues) -> JsonValue {
    let mut schema = Map::new();
    if let Some(values) = &constraint.values {
        let values: Vec<JsonValue> = values.iter().map(|v| JsonValue::from(*v)).collect();
        schema.insert("value".into(), JsonValue::Array(values));
    }
    if let Some((min, max)) = constraint.interval {
        schema.insert("interval".into(), json!([min, max]));
    }
    if let Some(figures) = constraint.significant_figures {
        schema.insert("significantFigures".into(), json!(figures));
    }
    JsonValue::Object(schema)
}

// =============================================================================
// ENCODINGS
// =============================================================================

pub fn project_text_encoding(encoding: &TextEncoding) -> JsonValue {
    json!({
        "type": "TextEncoding",
        "tokenSeparator": encoding.token_separator,
        "blockSeparator": encoding.block_separator,
        "decimalSeparator": encoding.decimal_separator,
        "collapseWhiteSpaces": encoding.collapse_white_spaces,
    })
}

pub fn project_binary_encoding(encoding: &BinaryEncoding) -> JsonValue {
    let mut schema = Map::new();
    schema.insert("type".into(), json!("BinaryEncoding"));
    schema.insert("byteEncoding".into(), json!(encoding.byte_encoding.as_str()));
    schema.insert("byteOrder".into(), json!(encoding.byte_order.as_str()));
    if let Some(len) = encoding.byte_length {
        schema.insert("byteLength".into(), json!(len));
    }
    JsonValue::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{frames, properties, units};
    use crate::model::{ByteOrder, Value};

    #[test]
    fn test_boolean_projection() {
        let comp = Component::boolean("test-bool", "Test Bool", "www.test.org/test/bool")
            .with_description("Test Description");
        assert_eq!(
            comp.project_schema(),
            json!({
                "name": "test-bool",
                "type": "Boolean",
                "label": "Test Bool",
                "definition": "www.test.org/test/bool",
                "description": "Test Description",
            })
        );
    }

    #[test]
    fn test_value_never_projected() {
        let mut comp = Component::quantity("temp", "Temperature", "urn:temp").with_uom("Cel");
        comp.set_value(Value::Real(21.5)).unwrap();
        let schema = comp.project_schema();
        assert!(schema.get("value").is_none());
        assert_eq!(schema["uom"], json!({ "code": "Cel" }));
    }

    #[test]
    fn test_quantity_constraint_after_uom() {
        let comp = Component::quantity("lat", "Latitude", "urn:lat")
            .with_uom("deg")
            .with_allowed_values(
                AllowedValues::from_interval(-90.0, 90.0).with_significant_figures(8),
            );
        let schema = comp.project_schema();
        let keys: Vec<&str> = schema.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["name", "type", "label", "definition", "description", "uom", "constraint"]
        );
        assert_eq!(
            schema["constraint"],
            json!({ "interval": [-90.0, 90.0], "significantFigures": 8 })
        );
    }

    #[test]
    fn test_quantity_without_uom() {
        let schema = Component::quantity("q", "Q", "urn:q").project_schema();
        assert!(schema.get("uom").is_none());
        assert!(schema.get("constraint").is_none());
    }

    #[test]
    fn test_text_and_category_constraints() {
        let text = Component::text("mode", "Mode", "urn:mode")
            .with_allowed_tokens(AllowedTokens::from_values(["auto", "manual"]));
        assert_eq!(
            text.project_schema()["constraint"],
            json!({ "value": ["auto", "manual"] })
        );

        let category = Component::category("status", "Status", "urn:status")
            .with_code_space("urn:codes:status")
            .with_allowed_tokens(AllowedTokens::from_pattern("[A-Z]+"));
        let schema = category.project_schema();
        assert_eq!(schema["type"], json!("Category"));
        assert_eq!(schema["codeSpace"], json!({ "href": "urn:codes:status" }));
        assert_eq!(schema["constraint"], json!({ "pattern": "[A-Z]+" }));
    }

    #[test]
    fn test_count_constraint() {
        let comp = Component::count("n", "N", "urn:n")
            .with_allowed_values(AllowedValues::from_values([1.0, 2.0, 4.0]));
        assert_eq!(
            comp.project_schema()["constraint"],
            json!({ "value": [1.0, 2.0, 4.0] })
        );
    }

    #[test]
    fn test_time_projection() {
        let schema = Component::time("time", "Sampling Time").project_schema();
        assert_eq!(schema["type"], json!("Time"));
        assert_eq!(schema["definition"], json!(properties::SAMPLING_TIME));
        assert_eq!(schema["uom"], json!({ "code": units::ISO_8601_GREGORIAN }));
    }

    #[test]
    fn test_flags_projected_when_set() {
        let schema = Component::count("n", "N", "urn:n")
            .with_optional(true)
            .with_updatable(true)
            .project_schema();
        assert_eq!(schema["optional"], json!(true));
        assert_eq!(schema["updatable"], json!(true));

        let schema = Component::count("n", "N", "urn:n").project_schema();
        assert!(schema.get("optional").is_none());
        assert!(schema.get("updatable").is_none());
    }

    #[test]
    fn test_record_projection() {
        let rec = Component::data_record("weather", "Weather", "urn:weather")
            .with_field(Component::time("time", "Time"))
            .with_field(Component::quantity("temp", "Temperature", "urn:temp").with_uom("Cel"));
        let schema = rec.project_schema();
        assert_eq!(schema["type"], json!("DataRecord"));
        let fields = schema["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], json!("time"));
        assert_eq!(fields[1]["uom"], json!({ "code": "Cel" }));
    }

    #[test]
    fn test_vector_projection() {
        let loc = Component::vector(
            "location",
            "Location",
            properties::SENSOR_LOCATION,
            frames::WGS84_3D,
            "urn:local",
        )
        .with_coord("Lat", Component::quantity("lat", "Latitude", "urn:lat").with_uom("deg"))
        .with_coord("Lon", Component::quantity("lon", "Longitude", "urn:lon").with_uom("deg"))
        .with_coord("Alt", Component::quantity("alt", "Altitude", "urn:alt").with_uom("m"));

        let schema = loc.project_schema();
        assert_eq!(schema["referenceFrame"], json!(frames::WGS84_3D));
        assert_eq!(schema["localFrame"], json!("urn:local"));
        assert_eq!(
            schema["coordinates"],
            json!([
                {
                    "name": "lat", "type": "Quantity", "definition": "urn:lat",
                    "axisID": "Lat", "label": "Latitude", "uom": { "code": "deg" },
                },
                {
                    "name": "lon", "type": "Quantity", "definition": "urn:lon",
                    "axisID": "Lon", "label": "Longitude", "uom": { "code": "deg" },
                },
                {
                    "name": "alt", "type": "Quantity", "definition": "urn:alt",
                    "axisID": "Alt", "label": "Altitude", "uom": { "code": "m" },
                },
            ])
        );
    }

    #[test]
    fn test_array_projection_uses_template() {
        let mut arr = Component::data_array("samples", "Samples", "urn:samples");
        arr.as_array_mut()
            .unwrap()
            .set_component_template_and_size(
                5,
                Component::quantity("sample", "Sample", "urn:sample")
                    .with_description("One sample"),
            )
            .unwrap();

        let schema = arr.project_schema();
        assert_eq!(
            schema["elementCount"],
            json!({
                "type": "Count",
                "definition": properties::ELEMENT_COUNT,
                "value": 5,
            })
        );
        assert_eq!(
            schema["elementType"],
            json!({
                "name": "sample",
                "type": "Quantity",
                "definition": "urn:sample",
                "description": "One sample",
            })
        );
        assert!(schema.get("values").is_none());
    }

    #[test]
    fn test_array_without_template() {
        let schema = Component::data_array("a", "A", "urn:a").project_schema();
        assert_eq!(schema["elementCount"]["value"], json!(0));
        assert!(schema.get("elementType").is_none());
    }

    #[test]
    fn test_encoding_projection() {
        assert_eq!(
            project_text_encoding(&TextEncoding::default()),
            json!({
                "type": "TextEncoding",
                "tokenSeparator": ",",
                "blockSeparator": "\n",
                "decimalSeparator": ".",
                "collapseWhiteSpaces": false,
            })
        );

        let binary = BinaryEncoding {
            byte_order: ByteOrder::BigEndian,
            byte_length: Some(128),
            ..BinaryEncoding::default()
        };
        assert_eq!(
            project_binary_encoding(&binary),
            json!({
                "type": "BinaryEncoding",
                "byteEncoding": "raw",
                "byteOrder": "bigEndian",
                "byteLength": 128,
            })
        );
    }
}
