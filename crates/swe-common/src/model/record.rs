//! `DataRecord`: an ordered list of named, heterogeneous fields.

use indexmap::IndexMap;

use crate::error::ComponentError;
use crate::model::{Component, ComponentData, ComponentId, Value};

/// Payload of a `DataRecord` component.
///
/// Field order is insertion order. Value lookup is by field name; when
/// several fields share a name, the first one wins.
#[derive(Debug, Default, PartialEq)]
pub struct DataRecord {
    fields: Vec<Component>,
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field and returns it for chaining.
    pub fn add_field(&mut self, field: Component) -> &mut Component {
        self.fields.push(field);
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    pub fn fields(&self) -> &[Component] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Component] {
        &mut self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Component> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Maps each field name to its field, in field order.
    pub fn name_to_field_map(&self) -> IndexMap<&str, &Component> {
        let mut map = IndexMap::with_capacity(self.fields.len());
        for f in &self.fields {
            map.entry(f.name()).or_insert(f);
        }
        map
    }

    /// Returns each field's value keyed by field name, in field order.
    ///
    /// A name shared by several fields reports the first of them, the same
    /// field `set_value` writes.
    pub fn get_value(&self) -> IndexMap<String, Value> {
        let mut values = IndexMap::with_capacity(self.fields.len());
        for f in &self.fields {
            values
                .entry(f.name().to_string())
                .or_insert_with(|| f.get_value());
        }
        values
    }

    /// Assigns values to fields by name.
    ///
    /// Fields absent from `values` are left unchanged and keys matching no
    /// field are ignored. The first failing field aborts the call; fields
    /// assigned before it keep their new values.
    pub fn set_value(&mut self, values: IndexMap<String, Value>) -> Result<(), ComponentError> {
        for (key, value) in values {
            match self.field_mut(&key) {
                Some(field) => field.set_value(value)?,
                None => tracing::trace!(%key, "no field for key, ignoring"),
            }
        }
        Ok(())
    }

    /// Maps the identifier of every non-record descendant to its value.
    ///
    /// Nested records are descended into, not reported themselves.
    pub fn flatten_to_id_value_map(&self) -> IndexMap<ComponentId, Value> {
        self.leaves()
            .into_iter()
            .map(|f| (f.id(), f.get_value()))
            .collect()
    }

    /// Maps the identifier of every non-record descendant to the component.
    pub fn flatten_to_id_field_map(&self) -> IndexMap<ComponentId, &Component> {
        self.leaves().into_iter().map(|f| (f.id(), f)).collect()
    }

    fn leaves(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        self.push_leaves(&mut out);
        out
    }

    fn push_leaves<'a>(&'a self, out: &mut Vec<&'a Component>) {
        for f in &self.fields {
            match f.data() {
                ComponentData::DataRecord(nested) => nested.push_leaves(out),
                _ => out.push(f),
            }
        }
    }

    pub(crate) fn deep_copy(&self) -> DataRecord {
        DataRecord {
            fields: self.fields.iter().map(Component::deep_copy).collect(),
        }
    }
}
