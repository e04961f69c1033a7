//! Kind tags and run-time values for SWE Common components.
//!
//! A [`Value`] is the value projection of a component tree: scalars hold one
//! native value, records and vectors hold a name-keyed mapping, arrays hold a
//! sequence in element order.

use std::fmt;

use indexmap::IndexMap;

/// Component kinds (SWE Common 2.0, Section 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Boolean,
    Text,
    Category,
    Count,
    Quantity,
    Time,
    DataRecord,
    Vector,
    DataArray,
}

impl ComponentKind {
    /// Returns the schema `type` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Boolean => "Boolean",
            ComponentKind::Text => "Text",
            ComponentKind::Category => "Category",
            ComponentKind::Count => "Count",
            ComponentKind::Quantity => "Quantity",
            ComponentKind::Time => "Time",
            ComponentKind::DataRecord => "DataRecord",
            ComponentKind::Vector => "Vector",
            ComponentKind::DataArray => "DataArray",
        }
    }

    /// Creates a ComponentKind from its schema `type` tag.
    pub fn from_tag(tag: &str) -> Option<ComponentKind> {
        match tag {
            "Boolean" => Some(ComponentKind::Boolean),
            "Text" => Some(ComponentKind::Text),
            "Category" => Some(ComponentKind::Category),
            "Count" => Some(ComponentKind::Count),
            "Quantity" => Some(ComponentKind::Quantity),
            "Time" => Some(ComponentKind::Time),
            "DataRecord" => Some(ComponentKind::DataRecord),
            "Vector" => Some(ComponentKind::Vector),
            "DataArray" => Some(ComponentKind::DataArray),
            _ => None,
        }
    }

    /// Returns true for leaf kinds holding a single native value.
    pub fn is_scalar(self) -> bool {
        !matches!(
            self,
            ComponentKind::DataRecord | ComponentKind::Vector | ComponentKind::DataArray
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run-time value read from or written to a component tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value set.
    #[default]
    Null,

    /// Value of a `Boolean` component.
    Boolean(bool),

    /// Value of a `Count` component.
    Count(i64),

    /// Value of a `Quantity` or `Time` component.
    Real(f64),

    /// Value of a `Text` or `Category` component.
    Text(String),

    /// Name-keyed values of a `DataRecord` or axis-keyed values of a `Vector`.
    Record(IndexMap<String, Value>),

    /// Element values of a `DataArray`, in element order.
    Array(Vec<Value>),
}

impl Value {
    /// Returns a short name for the shape of this value, used in errors.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Count(_) => "count",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Record(_) => "record",
            Value::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Count(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Builds a record value from `(name, value)` pairs, keeping their order.
    pub fn record<K, V, I>(entries: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<IndexMap<String, Value>>(),
        )
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Count(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
