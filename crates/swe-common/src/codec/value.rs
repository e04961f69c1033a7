//! Conversion between run-time values and JSON.
//!
//! JSON has a single number type. [`value_from_json`] reads integers that fit
//! in `i64` as `Count` and every other number as `Real`;
//! [`value_from_json_for`] instead reads numbers by the kind of the component
//! they are meant for, so `1` becomes `Real(1.0)` for a `Quantity`.
//! Non-finite reals have no JSON form and are written as `null`.

use serde_json::{Map, Value as JsonValue};

use crate::model::{Component, ComponentData, Value};

/// Converts a run-time value to JSON.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(v) => JsonValue::Bool(*v),
        Value::Count(v) => JsonValue::from(*v),
        Value::Real(v) => JsonValue::from(*v),
        Value::Text(v) => JsonValue::String(v.clone()),
        Value::Record(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect::<Map<String, JsonValue>>(),
        ),
        Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}

/// Converts JSON to a run-time value.
pub fn value_from_json(json: JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(v) => Value::Boolean(v),
        JsonValue::Number(n) => match n.as_i64() {
            Some(v) => Value::Count(v),
            None => n.as_f64().map_or(Value::Null, Value::Real),
        },
        JsonValue::String(v) => Value::Text(v),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(value_from_json).collect()),
        JsonValue::Object(entries) => Value::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k, value_from_json(v)))
                .collect(),
        ),
    }
}

/// Converts JSON to a run-time value shaped for `component`.
///
/// Numbers assigned to a `Quantity` or `Time` become `Real`, integral or not.
/// Record keys, vector axes and array positions with no matching component
/// fall back to [`value_from_json`].
pub fn value_from_json_for(component: &Component, json: JsonValue) -> Value {
    match (component.data(), json) {
        (ComponentData::Quantity(_) | ComponentData::Time(_), JsonValue::Number(n)) => {
            n.as_f64().map_or(Value::Null, Value::Real)
        }
        (ComponentData::DataRecord(r), JsonValue::Object(entries)) => Value::Record(
            entries
                .into_iter()
                .map(|(k, v)| {
                    let value = match r.field(&k) {
                        Some(field) => value_from_json_for(field, v),
                        None => value_from_json(v),
                    };
                    (k, value)
                })
                .collect(),
        ),
        (ComponentData::Vector(vector), JsonValue::Object(entries)) => Value::Record(
            entries
                .into_iter()
                .map(|(k, v)| {
                    let value = match vector.coordinate(&k) {
                        Some(coord) => value_from_json_for(coord, v),
                        None => value_from_json(v),
                    };
                    (k, value)
                })
                .collect(),
        ),
        (ComponentData::DataArray(a), JsonValue::Array(items)) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match a.elements().get(i).or(a.template()) {
                    Some(element) => value_from_json_for(element, item),
                    None => value_from_json(item),
                })
                .collect(),
        ),
        (_, json) => value_from_json(json),
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        value_to_json(value)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        value_to_json(&value)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        value_from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Component;

    #[test]
    fn test_numbers() {
        assert_eq!(value_from_json(json!(1)), Value::Count(1));
        assert_eq!(value_from_json(json!(1.5)), Value::Real(1.5));
        assert_eq!(value_from_json(json!(u64::MAX)), Value::Real(u64::MAX as f64));
        assert_eq!(value_to_json(&Value::Real(f64::NAN)), JsonValue::Null);
    }

    #[test]
    fn test_nested_structure() {
        let json = json!([{"f1": "A", "f2": 1.5}, {"f1": null, "f2": 2.5}]);
        let value = value_from_json(json.clone());
        assert_eq!(
            value,
            Value::Array(vec![
                Value::record([("f1", Value::from("A")), ("f2", Value::Real(1.5))]),
                Value::record([("f1", Value::Null), ("f2", Value::Real(2.5))]),
            ])
        );
        assert_eq!(value_to_json(&value), json);
    }

    #[test]
    fn test_record_from_json_document() {
        let mut rec = Component::data_record("obs", "Observation", "urn:obs")
            .with_field(Component::time("time", "Time"))
            .with_field(Component::count("n", "N", "urn:n"))
            .with_field(Component::boolean("ok", "Ok", "urn:ok"));

        let doc: JsonValue = serde_json::from_str(r#"{"time": 1700000000.25, "n": 4, "ok": true}"#)
            .unwrap();
        rec.set_value(doc.clone().into()).unwrap();
        assert_eq!(JsonValue::from(rec.get_value()), doc);
    }

    #[test]
    fn test_integer_literals_for_real_fields() {
        let template = Component::data_record("rec", "Record", "urn:rec")
            .with_field(Component::text("f1", "F1", "urn:f1"))
            .with_field(Component::quantity("f2", "F2", "urn:f2"))
            .with_field(Component::count("n", "N", "urn:n"));
        let mut arr = Component::data_array("arr", "Array", "urn:arr");
        arr.as_array_mut()
            .unwrap()
            .set_component_template_and_size(2, template)
            .unwrap();

        let doc = json!([{"f1": "A", "f2": 1, "n": 3}, {"f1": "B", "f2": 2}]);
        let value = value_from_json_for(&arr, doc);
        arr.set_value(value).unwrap();
        assert_eq!(
            arr.get_value(),
            Value::Array(vec![
                Value::record([
                    ("f1", Value::from("A")),
                    ("f2", Value::Real(1.0)),
                    ("n", Value::Count(3)),
                ]),
                Value::record([
                    ("f1", Value::from("B")),
                    ("f2", Value::Real(2.0)),
                    ("n", Value::Null),
                ]),
            ])
        );
        assert_eq!(
            value_to_json(&arr.get_value()),
            json!([{"f1": "A", "f2": 1.0, "n": 3}, {"f1": "B", "f2": 2.0, "n": null}])
        );

        // Without a component, integers stay counts and a Quantity rejects them
        let mut plain = Component::quantity("q", "Q", "urn:q");
        assert!(plain.set_value(value_from_json(json!(1))).is_err());
        plain.set_value(value_from_json_for(&plain, json!(1))).unwrap();
        assert_eq!(plain.get_value(), Value::Real(1.0));
    }

    #[test]
    fn test_integer_axes_and_times() {
        let mut loc = Component::vector("loc", "Location", "urn:loc", "urn:crs", "urn:local")
            .with_coord("Lat", Component::quantity("lat", "Lat", "urn:lat"))
            .with_coord("Alt", Component::quantity("alt", "Alt", "urn:alt"));
        loc.set_value(value_from_json_for(&loc, json!({"Lat": 34.74, "Alt": 190})))
            .unwrap();
        assert_eq!(loc.get_value(), Value::record([("Lat", 34.74), ("Alt", 190.0)]));

        let mut time = Component::time("time", "Time");
        time.set_value(value_from_json_for(&time, json!(1700000000))).unwrap();
        assert_eq!(time.get_value(), Value::Real(1_700_000_000.0));
    }
}
