//! The component tree node.
//!
//! A [`Component`] pairs identity and semantic metadata shared by every
//! component with a [`ComponentData`] payload holding the kind-specific
//! state. The kind is fixed by the payload variant at construction.

use crate::definitions::properties;
use crate::error::ComponentError;
use crate::model::{
    AllowedTokens, AllowedValues, Boolean, Category, ComponentId, ComponentKind, Count, DataArray,
    DataRecord, Quantity, Text, Time, Value, Vector,
};

/// Identification and semantic metadata of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Short name, unique among the direct children of the enclosing composite.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// URI of the property this component represents.
    pub definition: String,
    pub description: String,
    /// Optional identifier for referencing the component from elsewhere.
    pub identifier: Option<String>,
    /// Container for future extensions.
    pub extension: Option<String>,
    /// Whether the value may be omitted from a data stream.
    pub optional: bool,
    /// Whether the value may be updated (process inputs and parameters).
    pub updatable: bool,
}

/// Kind-specific state of a component.
#[derive(Debug, PartialEq)]
pub enum ComponentData {
    Boolean(Boolean),
    Text(Text),
    Category(Category),
    Count(Count),
    Quantity(Quantity),
    Time(Time),
    DataRecord(DataRecord),
    Vector(Vector),
    DataArray(DataArray),
}

impl ComponentData {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentData::Boolean(_) => ComponentKind::Boolean,
            ComponentData::Text(_) => ComponentKind::Text,
            ComponentData::Category(_) => ComponentKind::Category,
            ComponentData::Count(_) => ComponentKind::Count,
            ComponentData::Quantity(_) => ComponentKind::Quantity,
            ComponentData::Time(_) => ComponentKind::Time,
            ComponentData::DataRecord(_) => ComponentKind::DataRecord,
            ComponentData::Vector(_) => ComponentKind::Vector,
            ComponentData::DataArray(_) => ComponentKind::DataArray,
        }
    }

    fn deep_copy(&self) -> ComponentData {
        match self {
            ComponentData::Boolean(v) => ComponentData::Boolean(v.clone()),
            ComponentData::Text(v) => ComponentData::Text(v.clone()),
            ComponentData::Category(v) => ComponentData::Category(v.clone()),
            ComponentData::Count(v) => ComponentData::Count(v.clone()),
            ComponentData::Quantity(v) => ComponentData::Quantity(v.clone()),
            ComponentData::Time(v) => ComponentData::Time(v.clone()),
            ComponentData::DataRecord(v) => ComponentData::DataRecord(v.deep_copy()),
            ComponentData::Vector(v) => ComponentData::Vector(v.deep_copy()),
            ComponentData::DataArray(v) => ComponentData::DataArray(v.deep_copy()),
        }
    }
}

/// A node of a SWE Common component tree.
///
/// Composites own their children exclusively. Attaching one component to two
/// parents is impossible since children are moved in.
#[derive(Debug, PartialEq)]
pub struct Component {
    id: ComponentId,
    pub meta: Metadata,
    data: ComponentData,
}

impl Component {
    /// Creates a component with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
        data: ComponentData,
    ) -> Self {
        Self {
            id: ComponentId::generate(),
            meta: Metadata {
                name: name.into(),
                label: label.into(),
                definition: definition.into(),
                ..Metadata::default()
            },
            data,
        }
    }

    pub fn boolean(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::Boolean(Boolean::default()))
    }

    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::Text(Text::default()))
    }

    pub fn category(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::Category(Category::default()))
    }

    pub fn count(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::Count(Count::default()))
    }

    pub fn quantity(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::Quantity(Quantity::default()))
    }

    /// Creates a `Time` component with the sampling-time definition, the
    /// ISO 8601 Gregorian unit and a Unix-epoch UTC reference.
    pub fn time(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            name,
            label,
            properties::SAMPLING_TIME,
            ComponentData::Time(Time::default()),
        )
    }

    pub fn data_record(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::DataRecord(DataRecord::new()))
    }

    pub fn vector(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
        reference_frame: impl Into<String>,
        local_frame: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            definition,
            ComponentData::Vector(Vector::new(reference_frame, local_frame)),
        )
    }

    pub fn data_array(
        name: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self::new(name, label, definition, ComponentData::DataArray(DataArray::new()))
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = description.into();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.meta.definition = definition.into();
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.meta.identifier = Some(identifier.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.meta.extension = Some(extension.into());
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.meta.optional = optional;
        self
    }

    pub fn with_updatable(mut self, updatable: bool) -> Self {
        self.meta.updatable = updatable;
        self
    }

    /// Sets the unit of measure of a `Quantity` or `Time`; ignored otherwise.
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        match &mut self.data {
            ComponentData::Quantity(q) => q.uom = Some(uom.into()),
            ComponentData::Time(t) => t.uom = uom.into(),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "unit of measure ignored"
                );
            }
        }
        self
    }

    /// Sets the token constraint of a `Text` or `Category`; ignored otherwise.
    pub fn with_allowed_tokens(mut self, constraint: AllowedTokens) -> Self {
        match &mut self.data {
            ComponentData::Text(t) => t.constraint = Some(constraint),
            ComponentData::Category(c) => c.constraint = Some(constraint),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "token constraint ignored"
                );
            }
        }
        self
    }

    /// Sets the value constraint of a `Count`, `Quantity` or `Time`; ignored
    /// otherwise.
    pub fn with_allowed_values(mut self, constraint: AllowedValues) -> Self {
        match &mut self.data {
            ComponentData::Count(c) => c.constraint = Some(constraint),
            ComponentData::Quantity(q) => q.constraint = Some(constraint),
            ComponentData::Time(t) => t.constraint = Some(constraint),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "value constraint ignored"
                );
            }
        }
        self
    }

    /// Sets the code space of a `Category`; ignored otherwise.
    pub fn with_code_space(mut self, code_space: impl Into<String>) -> Self {
        match &mut self.data {
            ComponentData::Category(c) => c.code_space = Some(code_space.into()),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "code space ignored"
                );
            }
        }
        self
    }

    /// Appends a field to a `DataRecord`; ignored otherwise.
    pub fn with_field(mut self, field: Component) -> Self {
        self.add_field(field);
        self
    }

    /// Adds a coordinate to a `Vector`; ignored otherwise.
    pub fn with_coord(mut self, axis_id: impl Into<String>, coordinate: Component) -> Self {
        self.add_coord(axis_id, coordinate);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.data.kind()
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn label(&self) -> &str {
        &self.meta.label
    }

    pub fn definition(&self) -> &str {
        &self.meta.definition
    }

    pub fn description(&self) -> &str {
        &self.meta.description
    }

    pub fn data(&self) -> &ComponentData {
        &self.data
    }

    pub fn as_boolean(&self) -> Option<&Boolean> {
        match &self.data {
            ComponentData::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean_mut(&mut self) -> Option<&mut Boolean> {
        match &mut self.data {
            ComponentData::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match &self.data {
            ComponentData::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.data {
            ComponentData::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match &self.data {
            ComponentData::Category(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_category_mut(&mut self) -> Option<&mut Category> {
        match &mut self.data {
            ComponentData::Category(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<&Count> {
        match &self.data {
            ComponentData::Count(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_count_mut(&mut self) -> Option<&mut Count> {
        match &mut self.data {
            ComponentData::Count(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match &self.data {
            ComponentData::Quantity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quantity_mut(&mut self) -> Option<&mut Quantity> {
        match &mut self.data {
            ComponentData::Quantity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&Time> {
        match &self.data {
            ComponentData::Time(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_time_mut(&mut self) -> Option<&mut Time> {
        match &mut self.data {
            ComponentData::Time(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&DataRecord> {
        match &self.data {
            ComponentData::DataRecord(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut DataRecord> {
        match &mut self.data {
            ComponentData::DataRecord(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match &self.data {
            ComponentData::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector_mut(&mut self) -> Option<&mut Vector> {
        match &mut self.data {
            ComponentData::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DataArray> {
        match &self.data {
            ComponentData::DataArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut DataArray> {
        match &mut self.data {
            ComponentData::DataArray(v) => Some(v),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Tree operations
    // -------------------------------------------------------------------------

    /// Appends a field if this is a `DataRecord`.
    ///
    /// Returns the attached field, or `None` (and drops `field`) if this
    /// component is not a record.
    pub fn add_field(&mut self, field: Component) -> Option<&mut Component> {
        match &mut self.data {
            ComponentData::DataRecord(r) => Some(r.add_field(field)),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "add_field on non-record"
                );
                None
            }
        }
    }

    /// Inserts or replaces a coordinate if this is a `Vector`.
    ///
    /// Returns the attached coordinate, or `None` if this component is not a
    /// vector.
    pub fn add_coord(
        &mut self,
        axis_id: impl Into<String>,
        coordinate: Component,
    ) -> Option<&mut Component> {
        match &mut self.data {
            ComponentData::Vector(v) => Some(v.add_coord(axis_id, coordinate)),
            data => {
                tracing::debug!(
                    name = %self.meta.name,
                    kind = %data.kind(),
                    "add_coord on non-vector"
                );
                None
            }
        }
    }

    /// Returns the value projection of this component.
    pub fn get_value(&self) -> Value {
        match &self.data {
            ComponentData::Boolean(v) => v.value.into(),
            ComponentData::Text(v) => v.value.clone().into(),
            ComponentData::Category(v) => v.value.clone().into(),
            ComponentData::Count(v) => v.value.into(),
            ComponentData::Quantity(v) => v.value.into(),
            ComponentData::Time(v) => v.value.into(),
            ComponentData::DataRecord(v) => Value::Record(v.get_value()),
            ComponentData::Vector(v) => Value::Record(v.get_value()),
            ComponentData::DataArray(v) => Value::Array(v.get_value()),
        }
    }

    /// Assigns a value shaped like this component's value projection.
    ///
    /// Scalars accept `Value::Null` (clearing the value) or the single value
    /// variant of their native type; numbers are not coerced. Constraints are
    /// not checked.
    pub fn set_value(&mut self, value: Value) -> Result<(), ComponentError> {
        let name = &self.meta.name;
        match (&mut self.data, value) {
            (ComponentData::Boolean(b), Value::Boolean(v)) => b.set(Some(v)),
            (ComponentData::Boolean(b), Value::Null) => b.set(None),
            (ComponentData::Text(t), Value::Text(v)) => t.set(Some(v)),
            (ComponentData::Text(t), Value::Null) => t.set(None),
            (ComponentData::Category(c), Value::Text(v)) => c.set(Some(v)),
            (ComponentData::Category(c), Value::Null) => c.set(None),
            (ComponentData::Count(c), Value::Count(v)) => c.set(Some(v)),
            (ComponentData::Count(c), Value::Null) => c.set(None),
            (ComponentData::Quantity(q), Value::Real(v)) => q.set(Some(v)),
            (ComponentData::Quantity(q), Value::Null) => q.set(None),
            (ComponentData::Time(t), Value::Real(v)) => t.set(Some(v)),
            (ComponentData::Time(t), Value::Null) => t.set(None),
            (ComponentData::DataRecord(r), Value::Record(values)) => r.set_value(values)?,
            (ComponentData::Vector(v), Value::Record(values)) => v.set_value(name, values)?,
            (ComponentData::DataArray(a), Value::Array(values)) => a.set_value(name, values)?,
            (data, other) => {
                return Err(ComponentError::ValueShape {
                    component: name.clone(),
                    kind: data.kind(),
                    found: other.shape(),
                });
            }
        }
        Ok(())
    }

    /// Returns a structurally identical, fully independent copy.
    ///
    /// Every component of the copy receives a fresh identifier. Values,
    /// constraints and metadata are copied.
    pub fn deep_copy(&self) -> Component {
        Component {
            id: ComponentId::generate(),
            meta: self.meta.clone(),
            data: self.data.deep_copy(),
        }
    }

    /// Returns the schema projection of this component.
    pub fn project_schema(&self) -> serde_json::Value {
        crate::codec::project_component(self)
    }
}
