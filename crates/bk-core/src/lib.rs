//! Core types for Baukasten: properties, the target entity, and the builder
//! that assembles one from the other.
//!
//! Properties are matched onto entity slots by their [`PropertyKind`], not by
//! their concrete type:
//!
//! ```
//! use bk_core::EntityBuilder;
//!
//! let entity = EntityBuilder::new()
//!     .add_property_a("Prop A")
//!     .add_property_b("Prop B")
//!     .build();
//! assert_eq!(entity.property_a.value.to_string(), "Prop A");
//! ```

/// The entity builder.
pub mod builder;
/// The assembled target entity and its slots.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Property kinds, values, and the property capability.
pub mod property;

/// Re-export the builder.
pub use builder::EntityBuilder;
/// Re-export the entity.
pub use entity::Entity;
/// Re-export error types.
pub use error::{BkError, BkResult};
/// Re-export property types.
pub use property::{
    AnyProperty, Property, PropertyA, PropertyB, PropertyKind, PropertyValue, SlotProperty,
    parse_assignment,
};
