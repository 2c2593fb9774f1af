use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::property::{Property, PropertyA, PropertyB, PropertyKind, PropertyValue, SlotProperty};

/// The assembled target of an [`EntityBuilder`](crate::EntityBuilder).
///
/// Both slots are always present. A slot that was never set holds the empty
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Slot for [`PropertyKind::A`].
    pub property_a: PropertyA,
    /// Slot for [`PropertyKind::B`].
    pub property_b: PropertyB,
}

impl Entity {
    /// The kinds that have a slot on this entity, in display order.
    pub const SLOT_KINDS: [PropertyKind; 2] = [PropertyA::KIND, PropertyB::KIND];

    /// Read a slot by kind. Returns `None` for kinds without a slot.
    pub fn slot(&self, kind: &PropertyKind) -> Option<&PropertyValue> {
        match kind {
            PropertyKind::A => Some(self.property_a.value()),
            PropertyKind::B => Some(self.property_b.value()),
            PropertyKind::Custom(_) => None,
        }
    }

    /// Put `value` into the slot matching `kind`.
    ///
    /// Returns false and leaves the entity untouched if no slot matches.
    pub fn fill_slot(&mut self, kind: &PropertyKind, value: PropertyValue) -> bool {
        match kind {
            PropertyKind::A => self.property_a = PropertyA::from_value(value),
            PropertyKind::B => self.property_b = PropertyB::from_value(value),
            PropertyKind::Custom(_) => return false,
        }
        true
    }

    /// Write one `Property X: value` line per slot.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Property A: {}", self.property_a.value())?;
        writeln!(out, "Property B: {}", self.property_b.value())?;
        Ok(())
    }

    /// Print the entity's slots to standard output.
    pub fn process(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            eprintln!("error: cannot write entity: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entity: &Entity) -> String {
        let mut buf = Vec::new();
        entity.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_entity_has_empty_slots() {
        let entity = Entity::default();
        assert!(entity.property_a.value.is_empty());
        assert!(entity.property_b.value.is_empty());
    }

    #[test]
    fn fill_slot_sets_matching_slot_only() {
        let mut entity = Entity::default();
        assert!(entity.fill_slot(&PropertyKind::B, "y".into()));
        assert!(entity.property_a.value.is_empty());
        assert_eq!(entity.slot(&PropertyKind::B), Some(&PropertyValue::from("y")));
    }

    #[test]
    fn fill_slot_ignores_custom_kind() {
        let mut entity = Entity::default();
        let kind = PropertyKind::Custom("colour".to_string());
        assert!(!entity.fill_slot(&kind, "red".into()));
        assert_eq!(entity, Entity::default());
        assert!(entity.slot(&kind).is_none());
    }

    #[test]
    fn write_to_lists_both_slots() {
        let entity = Entity {
            property_a: PropertyA::new("Prop A"),
            property_b: PropertyB::new("Prop B"),
        };
        insta::assert_snapshot!(render(&entity).trim_end(), @r"
        Property A: Prop A
        Property B: Prop B
        ");
    }

    #[test]
    fn write_to_renders_empty_slot_as_blank() {
        let entity = Entity {
            property_a: PropertyA::new(42_i64),
            property_b: PropertyB::default(),
        };
        assert_eq!(render(&entity), "Property A: 42\nProperty B: \n");
    }

    #[test]
    fn entity_json_shape() {
        let entity = Entity {
            property_a: PropertyA::new("x"),
            property_b: PropertyB::default(),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "property_a": "x", "property_b": null })
        );
        let back: Entity = serde_json::from_value(json).unwrap();
        assert_eq!(back, entity);
    }
}
