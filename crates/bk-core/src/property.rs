use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BkError, BkResult};

/// The kind of a property. Extensible via `Custom(String)` for kinds that
/// have no slot on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    /// The kind stored in [`Entity::property_a`](crate::Entity::property_a).
    A,
    /// The kind stored in [`Entity::property_b`](crate::Entity::property_b).
    B,
    /// A user-defined kind not covered by the built-in ones.
    Custom(String),
}

impl PropertyKind {
    /// Parse a kind from a string. Never fails for non-empty input: names
    /// that are not built in become [`PropertyKind::Custom`].
    pub fn parse(s: &str) -> BkResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BkError::EmptyKind);
        }
        Ok(match s.to_lowercase().as_str() {
            "a" | "property_a" => Self::A,
            "b" | "property_b" => Self::B,
            _ => Self::Custom(s.to_string()),
        })
    }

    /// Returns true for the built-in kinds.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl FromStr for PropertyKind {
    type Err = BkError;

    fn from_str(s: &str) -> BkResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// The opaque value a property carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// No value. This is what an unset slot holds.
    #[default]
    Empty,
    /// A text value.
    String(String),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// An ordered list of values.
    List(Vec<PropertyValue>),
    /// A string-keyed map of values.
    Map(HashMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Returns true if this is [`PropertyValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Interpret command-line text as a value.
    ///
    /// `null` is empty, `true`/`false` are booleans, numeric literals are
    /// integers or floats, and everything else is kept as a string.
    pub fn parse(s: &str) -> Self {
        match s {
            "null" => return Self::Empty,
            "true" => return Self::Boolean(true),
            "false" => return Self::Boolean(false),
            _ => {}
        }
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // out of i64 range keeps the literal text rather than rounding it
            return match s.parse::<i64>() {
                Ok(n) => Self::Integer(n),
                Err(_) => Self::String(s.to_string()),
            };
        }
        // "inf", "NaN" and overflowing exponents stay strings
        if let Ok(n) = s.parse::<f64>()
            && n.is_finite()
        {
            return Self::Float(n);
        }
        Self::String(s.to_string())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Map(_) => write!(f, "{{...}}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Anything that holds a single value under a kind.
pub trait Property {
    /// The kind this property is stored under.
    fn kind(&self) -> PropertyKind;

    /// The carried value.
    fn value(&self) -> &PropertyValue;

    /// Mutable access to the carried value.
    fn value_mut(&mut self) -> &mut PropertyValue;

    /// Replace the carried value.
    fn set_value(&mut self, value: impl Into<PropertyValue>)
    where
        Self: Sized,
    {
        *self.value_mut() = value.into();
    }

    /// Consume the property, keeping only its value.
    fn into_value(self) -> PropertyValue
    where
        Self: Sized;
}

/// A property whose kind is fixed by its type, so it can fill an entity slot.
pub trait SlotProperty: Property + Default {
    /// The kind every value of this type has.
    const KIND: PropertyKind;

    /// Wrap a value in this property type.
    fn from_value(value: PropertyValue) -> Self;
}

/// The property held in an entity's first slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyA {
    /// The carried value.
    pub value: PropertyValue,
}

impl PropertyA {
    /// Create a property holding `value`.
    pub fn new(value: impl Into<PropertyValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Property for PropertyA {
    fn kind(&self) -> PropertyKind {
        Self::KIND
    }

    fn value(&self) -> &PropertyValue {
        &self.value
    }

    fn value_mut(&mut self) -> &mut PropertyValue {
        &mut self.value
    }

    fn into_value(self) -> PropertyValue {
        self.value
    }
}

impl SlotProperty for PropertyA {
    const KIND: PropertyKind = PropertyKind::A;

    fn from_value(value: PropertyValue) -> Self {
        Self { value }
    }
}

/// The property held in an entity's second slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyB {
    /// The carried value.
    pub value: PropertyValue,
}

impl PropertyB {
    /// Create a property holding `value`.
    pub fn new(value: impl Into<PropertyValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Property for PropertyB {
    fn kind(&self) -> PropertyKind {
        Self::KIND
    }

    fn value(&self) -> &PropertyValue {
        &self.value
    }

    fn value_mut(&mut self) -> &mut PropertyValue {
        &mut self.value
    }

    fn into_value(self) -> PropertyValue {
        self.value
    }
}

impl SlotProperty for PropertyB {
    const KIND: PropertyKind = PropertyKind::B;

    fn from_value(value: PropertyValue) -> Self {
        Self { value }
    }
}

/// A property of any kind, decided at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyProperty {
    /// The kind this property is stored under.
    pub kind: PropertyKind,
    /// The carried value.
    pub value: PropertyValue,
}

impl AnyProperty {
    /// Create a property of `kind` holding `value`.
    pub fn new(kind: PropertyKind, value: impl Into<PropertyValue>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Property for AnyProperty {
    fn kind(&self) -> PropertyKind {
        self.kind.clone()
    }

    fn value(&self) -> &PropertyValue {
        &self.value
    }

    fn value_mut(&mut self) -> &mut PropertyValue {
        &mut self.value
    }

    fn into_value(self) -> PropertyValue {
        self.value
    }
}

impl FromStr for AnyProperty {
    type Err = BkError;

    fn from_str(s: &str) -> BkResult<Self> {
        let (kind, value) = parse_assignment(s)?;
        Ok(Self { kind, value })
    }
}

/// Split a `KIND=VALUE` assignment into its kind and value.
///
/// Only the first `=` separates; the value may contain more of them.
pub fn parse_assignment(s: &str) -> BkResult<(PropertyKind, PropertyValue)> {
    let (kind, value) = s
        .split_once('=')
        .ok_or_else(|| BkError::MalformedAssignment(s.to_string()))?;
    Ok((kind.parse()?, PropertyValue::parse(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_kind_parse_builtin() {
        assert_eq!(PropertyKind::parse("a").unwrap(), PropertyKind::A);
        assert_eq!(PropertyKind::parse("B").unwrap(), PropertyKind::B);
        assert_eq!(PropertyKind::parse("property_a").unwrap(), PropertyKind::A);
    }

    #[test]
    fn property_kind_parse_custom() {
        let kind = PropertyKind::parse("colour").unwrap();
        assert_eq!(kind, PropertyKind::Custom("colour".to_string()));
        assert!(!kind.is_builtin());
    }

    #[test]
    fn property_kind_parse_empty_fails() {
        assert_eq!(PropertyKind::parse("  "), Err(BkError::EmptyKind));
    }

    #[test]
    fn property_kind_display_round_trips_through_parse() {
        for kind in [PropertyKind::A, PropertyKind::B] {
            assert_eq!(kind.to_string().parse::<PropertyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn property_value_parse_literals() {
        assert_eq!(PropertyValue::parse("null"), PropertyValue::Empty);
        assert_eq!(PropertyValue::parse("true"), PropertyValue::Boolean(true));
        assert_eq!(PropertyValue::parse("-12"), PropertyValue::Integer(-12));
        assert_eq!(PropertyValue::parse("2.5"), PropertyValue::Float(2.5));
        assert_eq!(PropertyValue::parse("inf"), PropertyValue::from("inf"));
        assert_eq!(PropertyValue::parse("Prop A"), PropertyValue::from("Prop A"));
    }

    #[test]
    fn property_value_parse_keeps_out_of_range_integer_text() {
        assert_eq!(
            PropertyValue::parse("99999999999999999999"),
            PropertyValue::from("99999999999999999999")
        );
        assert_eq!(
            PropertyValue::parse("-9223372036854775808"),
            PropertyValue::Integer(i64::MIN)
        );
    }

    #[test]
    fn property_value_parse_rejects_non_finite_floats() {
        let value = PropertyValue::parse("1e999");
        assert_eq!(value, PropertyValue::from("1e999"));
        assert_eq!(serde_json::to_value(&value).unwrap(), "1e999");
        assert_eq!(PropertyValue::parse("NaN"), PropertyValue::from("NaN"));
        assert_eq!(PropertyValue::parse("1e3"), PropertyValue::Float(1000.0));
    }

    #[test]
    fn property_value_display() {
        assert_eq!(PropertyValue::Empty.to_string(), "");
        let list = PropertyValue::List(vec![1_i64.into(), "two".into()]);
        assert_eq!(list.to_string(), "[1, two]");
    }

    #[test]
    fn property_value_from_option() {
        assert_eq!(PropertyValue::from(None::<&str>), PropertyValue::Empty);
        assert_eq!(PropertyValue::from(Some(3_i64)), PropertyValue::Integer(3));
    }

    #[test]
    fn property_value_json_shape() {
        let json = serde_json::to_value(PropertyValue::Empty).unwrap();
        assert!(json.is_null());
        let back: PropertyValue = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(back, PropertyValue::from("x"));
    }

    #[test]
    fn slot_properties_carry_their_kind() {
        assert_eq!(PropertyA::new("x").kind(), PropertyKind::A);
        assert_eq!(PropertyB::default().kind(), PropertyKind::B);
        assert!(PropertyA::default().value().is_empty());
    }

    #[test]
    fn set_value_replaces_value() {
        let mut prop = PropertyB::new("old");
        prop.set_value(7_i64);
        assert_eq!(prop.into_value(), PropertyValue::Integer(7));
    }

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        let (kind, value) = parse_assignment("a=x=y").unwrap();
        assert_eq!(kind, PropertyKind::A);
        assert_eq!(value, PropertyValue::from("x=y"));
    }

    #[test]
    fn parse_assignment_rejects_missing_equals() {
        assert_eq!(
            parse_assignment("a"),
            Err(BkError::MalformedAssignment("a".to_string()))
        );
        assert_eq!(parse_assignment("=x"), Err(BkError::EmptyKind));
    }

    #[test]
    fn any_property_from_str() {
        let prop: AnyProperty = "weight=3".parse().unwrap();
        assert_eq!(prop.kind(), PropertyKind::Custom("weight".to_string()));
        assert_eq!(prop.value, PropertyValue::Integer(3));
    }
}
