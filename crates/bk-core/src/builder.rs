use std::collections::HashMap;

use crate::entity::Entity;
use crate::property::{Property, PropertyA, PropertyB, PropertyKind, PropertyValue};

/// A builder that collects property values by kind and assembles an [`Entity`].
///
/// Adding a kind twice keeps the last value. Kinds without a slot on the
/// entity are kept but ignored by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    values: HashMap<PropertyKind, PropertyValue>,
}

impl EntityBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a property's value under its kind.
    pub fn add(&mut self, property: impl Property) -> &mut Self {
        let kind = property.kind();
        self.add_property(kind, property.into_value())
    }

    /// Store `value` under `kind`, replacing any earlier value for that kind.
    pub fn add_property(
        &mut self,
        kind: PropertyKind,
        value: impl Into<PropertyValue>,
    ) -> &mut Self {
        self.values.insert(kind, value.into());
        self
    }

    /// Shorthand for `add(PropertyA::new(value))`.
    pub fn add_property_a(&mut self, value: impl Into<PropertyValue>) -> &mut Self {
        self.add(PropertyA::new(value))
    }

    /// Shorthand for `add(PropertyB::new(value))`.
    pub fn add_property_b(&mut self, value: impl Into<PropertyValue>) -> &mut Self {
        self.add(PropertyB::new(value))
    }

    /// The value currently stored for `kind`, if any.
    pub fn get(&self, kind: &PropertyKind) -> Option<&PropertyValue> {
        self.values.get(kind)
    }

    /// Number of distinct kinds stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored kinds that have no slot on [`Entity`], sorted.
    pub fn unmatched_kinds(&self) -> Vec<&PropertyKind> {
        let mut kinds: Vec<&PropertyKind> = self
            .values
            .keys()
            .filter(|k| !k.is_builtin())
            .collect();
        kinds.sort();
        kinds
    }

    /// Assemble a new entity from the stored values.
    ///
    /// The builder is left as it was, so it can be built again or extended.
    pub fn build(&self) -> Entity {
        let mut target = Entity::default();
        for kind in &Entity::SLOT_KINDS {
            if let Some(value) = self.values.get(kind) {
                target.fill_slot(kind, value.clone());
            }
        }
        target
    }
}
