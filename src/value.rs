//! Typed value descriptors of the target schema
//!
//! Every setting and style prop in the output is wrapped as
//! `{"$$type": <kind>, "value": <value>}` so the consuming renderer knows how to
//! interpret the raw value.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

pub const DEFAULT_UNIT: &str = "px";

/// A length with an explicit unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    #[serde(serialize_with = "serialize_number")]
    pub size: f64,
    pub unit: String,
}

impl Size {
    pub fn new(size: f64, unit: impl Into<String>) -> Self {
        Self {
            size,
            unit: unit.into(),
        }
    }

    pub fn px(size: f64) -> Self {
        Self::new(size, DEFAULT_UNIT)
    }

    pub fn zero() -> Self {
        Self::px(0.0)
    }

    /// Approximate pixel value, treating `em`/`rem` as multiples of 16px
    pub fn to_px(&self) -> f64 {
        match self.unit.as_str() {
            "em" | "rem" => self.size * 16.0,
            _ => self.size,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

/// Four independent sides of a box spacing value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxDimensions {
    pub top: Size,
    pub right: Size,
    pub bottom: Size,
    pub left: Size,
}

impl BoxDimensions {
    pub fn uniform(size: Size) -> Self {
        Self {
            top: size.clone(),
            right: size.clone(),
            bottom: size.clone(),
            left: size,
        }
    }

    /// Vertical/horizontal pair: top=bottom, left=right
    pub fn symmetric(vertical: Size, horizontal: Size) -> Self {
        Self {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Serialize for BoxDimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("top", &TypedValue::Size(self.top.clone()))?;
        map.serialize_entry("right", &TypedValue::Size(self.right.clone()))?;
        map.serialize_entry("bottom", &TypedValue::Size(self.bottom.clone()))?;
        map.serialize_entry("left", &TypedValue::Size(self.left.clone()))?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub target: String,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            url: "#".to_string(),
            target: "_self".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Color(String),
    Size(Size),
    /// Unlinked four-sided spacing
    Dimensions(BoxDimensions),
    String(String),
    Number(f64),
    Classes(Vec<String>),
    Link(Link),
}

impl TypedValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Size(_) => "size",
            Self::Dimensions(_) => "dimensions",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Classes(_) => "classes",
            Self::Link(_) => "link",
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Color or string payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Color(s) | Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<&Size> {
        match self {
            Self::Size(size) => Some(size),
            _ => None,
        }
    }

    /// Box spacing as four sides, whether linked or not
    pub fn as_dimensions(&self) -> Option<BoxDimensions> {
        match self {
            Self::Size(size) => Some(BoxDimensions::uniform(size.clone())),
            Self::Dimensions(dims) => Some(dims.clone()),
            _ => None,
        }
    }

    pub fn is_linked_spacing(&self) -> bool {
        matches!(self, Self::Size(_))
    }
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypedValue", 2)?;
        state.serialize_field("$$type", self.kind())?;
        match self {
            Self::Color(s) | Self::String(s) => state.serialize_field("value", s)?,
            Self::Size(size) => state.serialize_field("value", size)?,
            Self::Dimensions(dims) => state.serialize_field("value", dims)?,
            Self::Number(n) => state.serialize_field("value", &JsonNumber(*n))?,
            Self::Classes(classes) => state.serialize_field("value", classes)?,
            Self::Link(link) => state.serialize_field("value", link)?,
        }
        state.end()
    }
}

struct JsonNumber(f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

/// Whole numbers serialize as JSON integers so `32.0` renders as `32`
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Render a number the way it appears in CSS-like strings (`700`, `1.5`)
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// JSON number, integral when the value is whole
pub fn number_value(value: f64) -> serde_json::Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serde_json::Value::from(value as i64)
    } else {
        serde_json::Value::from(value)
    }
}
