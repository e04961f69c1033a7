//! `Vector`: coordinates keyed by axis identifier.

use indexmap::IndexMap;

use crate::error::ComponentError;
use crate::model::{Component, Value};

/// Payload of a `Vector` component.
///
/// Coordinates keep insertion order. Unlike `DataRecord`, assigning a value
/// that names an unknown axis is an error.
#[derive(Debug, PartialEq)]
pub struct Vector {
    pub reference_frame: String,
    pub local_frame: String,
    coordinates: IndexMap<String, Component>,
}

impl Vector {
    pub fn new(reference_frame: impl Into<String>, local_frame: impl Into<String>) -> Self {
        Self {
            reference_frame: reference_frame.into(),
            local_frame: local_frame.into(),
            coordinates: IndexMap::new(),
        }
    }

    /// Inserts the coordinate for `axis_id`, replacing any previous one in
    /// place, and returns it.
    pub fn add_coord(
        &mut self,
        axis_id: impl Into<String>,
        coordinate: Component,
    ) -> &mut Component {
        let entry = self.coordinates.entry(axis_id.into());
        match entry {
            indexmap::map::Entry::Occupied(mut e) => {
                e.insert(coordinate);
                e.into_mut()
            }
            indexmap::map::Entry::Vacant(e) => e.insert(coordinate),
        }
    }

    pub fn coordinate(&self, axis_id: &str) -> Option<&Component> {
        self.coordinates.get(axis_id)
    }

    pub fn coordinate_mut(&mut self, axis_id: &str) -> Option<&mut Component> {
        self.coordinates.get_mut(axis_id)
    }

    /// Iterates `(axis_id, coordinate)` pairs in insertion order.
    pub fn coordinates(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.coordinates.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns each coordinate's value keyed by axis id.
    pub fn get_value(&self) -> IndexMap<String, Value> {
        self.coordinates
            .iter()
            .map(|(axis, c)| (axis.clone(), c.get_value()))
            .collect()
    }

    /// Assigns coordinate values by axis id.
    ///
    /// Every key is checked before anything is assigned: an unknown axis
    /// fails with `UnknownAxis` and leaves all coordinates unchanged. Axes
    /// absent from `values` are left unchanged.
    pub fn set_value(
        &mut self,
        vector: &str,
        values: IndexMap<String, Value>,
    ) -> Result<(), ComponentError> {
        if let Some(axis) = values.keys().find(|k| !self.coordinates.contains_key(*k)) {
            return Err(ComponentError::UnknownAxis {
                vector: vector.to_string(),
                axis: axis.clone(),
            });
        }
        for (axis, value) in values {
            if let Some(coord) = self.coordinates.get_mut(&axis) {
                coord.set_value(value)?;
            }
        }
        Ok(())
    }

    pub(crate) fn deep_copy(&self) -> Vector {
        Vector {
            reference_frame: self.reference_frame.clone(),
            local_frame: self.local_frame.clone(),
            coordinates: self
                .coordinates
                .iter()
                .map(|(axis, c)| (axis.clone(), c.deep_copy()))
                .collect(),
        }
    }
}
