//! `DataArray`: a homogeneous sequence of components stamped from a template.
//!
//! Elements are stored contiguously and owned by the array. Templating deep
//! copies the template once per element, so it costs
//! O(size * template size); there is no sharing between elements.

use indexmap::IndexMap;

use crate::definitions::{properties, ELEMENT_COUNT_LABEL, ELEMENT_COUNT_NAME};
use crate::error::ComponentError;
use crate::limits::MAX_ARRAY_ELEMENTS;
use crate::model::{Component, ComponentId, ComponentKind, Value};

/// Payload of a `DataArray` component.
///
/// Every element has the same kind, and the element count always equals the
/// number of elements. Only the array's own operations change either.
#[derive(Debug, PartialEq)]
pub struct DataArray {
    template: Option<Box<Component>>,
    element_count: Box<Component>,
    elements: Vec<Component>,
}

impl Default for DataArray {
    fn default() -> Self {
        Self::new()
    }
}

impl DataArray {
    /// Creates an empty array with no template.
    pub fn new() -> Self {
        let mut element_count =
            Component::count(ELEMENT_COUNT_NAME, ELEMENT_COUNT_LABEL, properties::ELEMENT_COUNT);
        if let Some(count) = element_count.as_count_mut() {
            count.set(Some(0));
        }
        Self {
            template: None,
            element_count: Box::new(element_count),
            elements: Vec::new(),
        }
    }

    /// The template elements are stamped from, if one was set.
    pub fn template(&self) -> Option<&Component> {
        self.template.as_deref()
    }

    /// The `Count` component tracking the number of elements.
    pub fn element_count(&self) -> &Component {
        &self.element_count
    }

    /// The elements, read-only. Element values change through `set_value`.
    pub fn elements(&self) -> &[Component] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Kind every element must have: that of the first element, else that of
    /// the template.
    pub fn element_kind(&self) -> Option<ComponentKind> {
        self.elements
            .first()
            .or(self.template.as_deref())
            .map(Component::kind)
    }

    /// Records `template` and appends `size` independent deep copies of it.
    ///
    /// Fails without mutation if existing elements have a different kind or
    /// the array would exceed [`MAX_ARRAY_ELEMENTS`].
    pub fn set_component_template_and_size(
        &mut self,
        size: usize,
        template: Component,
    ) -> Result<(), ComponentError> {
        if let Some(first) = self.elements.first() {
            if first.kind() != template.kind() {
                return Err(ComponentError::KindMismatch {
                    expected: first.kind(),
                    found: template.kind(),
                });
            }
        }
        self.check_capacity(size)?;

        tracing::debug!(
            size,
            kind = %template.kind(),
            template = %template.name(),
            "stamping array elements"
        );
        self.elements.reserve(size);
        for _ in 0..size {
            self.elements.push(template.deep_copy());
        }
        self.template = Some(Box::new(template));
        self.sync_count();
        Ok(())
    }

    /// Appends one element.
    ///
    /// The element must have the kind of the existing elements (or of the
    /// template, if the array is empty). An empty array with no template
    /// accepts any kind. Fails without mutation on mismatch.
    pub fn add_component(&mut self, component: Component) -> Result<(), ComponentError> {
        if let Some(expected) = self.element_kind() {
            if component.kind() != expected {
                tracing::debug!(%expected, found = %component.kind(), "rejected array element");
                return Err(ComponentError::KindMismatch {
                    expected,
                    found: component.kind(),
                });
            }
        }
        self.check_capacity(1)?;
        self.elements.push(component);
        self.sync_count();
        Ok(())
    }

    /// Returns each element's value, in element order.
    pub fn get_value(&self) -> Vec<Value> {
        self.elements.iter().map(Component::get_value).collect()
    }

    /// Assigns `values[i]` to element `i`.
    ///
    /// Elements past the end of `values` are left unchanged. More values than
    /// elements fails with `TooManyValues` before anything is assigned.
    pub fn set_value(&mut self, array: &str, values: Vec<Value>) -> Result<(), ComponentError> {
        if values.len() > self.elements.len() {
            return Err(ComponentError::TooManyValues {
                array: array.to_string(),
                len: values.len(),
                capacity: self.elements.len(),
            });
        }
        for (element, value) in self.elements.iter_mut().zip(values) {
            element.set_value(value)?;
        }
        Ok(())
    }

    /// Maps each element's identifier to its value, in element order.
    pub fn id_value_map(&self) -> IndexMap<ComponentId, Value> {
        self.elements
            .iter()
            .map(|e| (e.id(), e.get_value()))
            .collect()
    }

    fn check_capacity(&self, additional: usize) -> Result<(), ComponentError> {
        let requested = self.elements.len().saturating_add(additional);
        if requested > MAX_ARRAY_ELEMENTS {
            return Err(ComponentError::ArrayTooLarge {
                requested,
                max: MAX_ARRAY_ELEMENTS,
            });
        }
        Ok(())
    }

    fn sync_count(&mut self) {
        let len = i64::try_from(self.elements.len()).unwrap_or(i64::MAX);
        if let Some(count) = self.element_count.as_count_mut() {
            count.set(Some(len));
        }
    }

    pub(crate) fn deep_copy(&self) -> DataArray {
        DataArray {
            template: self.template.as_ref().map(|t| Box::new(t.deep_copy())),
            element_count: Box::new(self.element_count.deep_copy()),
            elements: self.elements.iter().map(Component::deep_copy).collect(),
        }
    }
}
