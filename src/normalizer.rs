//! Style normalization: loosely-typed design attributes to typed descriptors
//!
//! Each attribute belongs to a family (color, size, box spacing, enumerated,
//! number, plain string). Absent or unparseable values fall back to the
//! family's default so normalization never fails.

use crate::value::{format_number, BoxDimensions, Size, TypedValue, DEFAULT_UNIT};
use convert_case::{Case, Casing};
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_FOREGROUND: &str = "#000000";
pub const DEFAULT_FONT_WEIGHT: &str = "400";
pub const DEFAULT_TEXT_ALIGN: &str = "left";
pub const DEFAULT_FLEX_DIRECTION: &str = "row";

/// How an attribute's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleFamily {
    Color { default: &'static str },
    Size,
    BoxSpacing,
    Enumerated { default: &'static str },
    Number { default: f64 },
    Text,
    /// Unknown keys, kept as strings so nothing is dropped
    Opaque,
}

/// What a paint colors: glyphs and vector shapes (`Text`) or the node's box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    Text,
    Box,
}

/// Output prop name and family for one source key
#[derive(Debug, Clone, PartialEq)]
pub struct StyleKey {
    pub prop: String,
    pub family: StyleFamily,
    /// Alternate spelling; loses to the canonical key when both are present
    pub alias: bool,
}

impl StyleKey {
    fn canonical(prop: &str, family: StyleFamily) -> Self {
        Self {
            prop: prop.to_string(),
            family,
            alias: false,
        }
    }

    fn alias(prop: &str, family: StyleFamily) -> Self {
        Self {
            prop: prop.to_string(),
            family,
            alias: true,
        }
    }
}

pub fn resolve_key(key: &str, target: StyleTarget) -> StyleKey {
    use StyleFamily as F;

    let foreground = F::Color {
        default: DEFAULT_FOREGROUND,
    };
    let background = F::Color {
        default: DEFAULT_BACKGROUND,
    };

    match key {
        "color" => StyleKey::canonical("color", foreground),
        "textColor" => StyleKey::alias("color", foreground),
        "fill" | "fills" if target == StyleTarget::Text => StyleKey::alias("color", foreground),
        "backgroundColor" => StyleKey::canonical("background-color", background),
        "background" | "fill" | "fills" => StyleKey::alias("background-color", background),
        "borderColor" => StyleKey::canonical("border-color", foreground),

        "fontSize" => StyleKey::canonical("font-size", F::Size),
        "borderRadius" => StyleKey::canonical("border-radius", F::Size),
        "cornerRadius" => StyleKey::alias("border-radius", F::Size),
        "gap" => StyleKey::canonical("gap", F::Size),
        "itemSpacing" => StyleKey::alias("gap", F::Size),
        "lineHeight" | "letterSpacing" | "borderWidth" | "width" | "height" => {
            StyleKey::canonical(&kebab_case(key), F::Size)
        }

        "padding" | "margin" => StyleKey::canonical(key, F::BoxSpacing),

        "fontWeight" => StyleKey::canonical(
            "font-weight",
            F::Enumerated {
                default: DEFAULT_FONT_WEIGHT,
            },
        ),
        "textAlign" => StyleKey::canonical(
            "text-align",
            F::Enumerated {
                default: DEFAULT_TEXT_ALIGN,
            },
        ),
        "textAlignHorizontal" => StyleKey::alias(
            "text-align",
            F::Enumerated {
                default: DEFAULT_TEXT_ALIGN,
            },
        ),
        "flexDirection" => StyleKey::canonical(
            "flex-direction",
            F::Enumerated {
                default: DEFAULT_FLEX_DIRECTION,
            },
        ),
        "layoutMode" => StyleKey::alias(
            "flex-direction",
            F::Enumerated {
                default: DEFAULT_FLEX_DIRECTION,
            },
        ),

        "opacity" => StyleKey::canonical("opacity", F::Number { default: 1.0 }),
        "fontFamily" => StyleKey::canonical("font-family", F::Text),

        other => StyleKey::canonical(&kebab_case(other), F::Opaque),
    }
}

/// Split `paddingTop`-style keys into (`padding`, side)
fn side_key(key: &str) -> Option<(&'static str, Side)> {
    let (prop, rest) = if let Some(rest) = key.strip_prefix("padding") {
        ("padding", rest)
    } else if let Some(rest) = key.strip_prefix("margin") {
        ("margin", rest)
    } else {
        return None;
    };

    let side = match rest {
        "Top" => Side::Top,
        "Right" => Side::Right,
        "Bottom" => Side::Bottom,
        "Left" => Side::Left,
        _ => return None,
    };
    Some((prop, side))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Upper-case hex; the alpha byte is only written when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

pub struct StyleNormalizer {
    token_pattern: Regex,
}

impl Default for StyleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleNormalizer {
    pub fn new() -> Self {
        Self {
            token_pattern: Regex::new(r"^\s*(-?(?:\d+\.?\d*|\.\d+))\s*([a-zA-Z%]*)\s*$")
                .expect("size token pattern is valid"),
        }
    }

    /// Normalize a whole style bag into output props
    pub fn normalize_styles(
        &self,
        styles: &serde_json::Map<String, Value>,
        target: StyleTarget,
    ) -> BTreeMap<String, TypedValue> {
        let mut props = BTreeMap::new();
        let mut sides: HashMap<&'static str, HashMap<Side, Size>> = HashMap::new();
        let mut canonical = Vec::new();

        for (key, value) in styles {
            if value.is_null() {
                continue;
            }
            if let Some((prop, side)) = side_key(key) {
                let size = self.parse_size(value).unwrap_or_default();
                sides.entry(prop).or_default().insert(side, size);
                continue;
            }

            let style_key = resolve_key(key, target);
            if style_key.alias {
                let normalized = self.normalize_family(&style_key, Some(value));
                props.insert(style_key.prop, normalized);
            } else {
                canonical.push((style_key, value));
            }
        }

        for (prop, mut per_side) in sides {
            let mut take = |side: Side| per_side.remove(&side).unwrap_or_default();
            let dims = BoxDimensions {
                top: take(Side::Top),
                right: take(Side::Right),
                bottom: take(Side::Bottom),
                left: take(Side::Left),
            };
            props.insert(prop.to_string(), TypedValue::Dimensions(dims));
        }

        for (style_key, value) in canonical {
            let normalized = self.normalize_family(&style_key, Some(value));
            props.insert(style_key.prop, normalized);
        }

        props
    }

    /// Normalize one attribute by its source key
    pub fn normalize(&self, key: &str, value: &Value, target: StyleTarget) -> (String, TypedValue) {
        let style_key = resolve_key(key, target);
        let normalized = self.normalize_family(&style_key, Some(value));
        (style_key.prop, normalized)
    }

    /// Schema default for a source key with no value
    pub fn default_for(&self, key: &str, target: StyleTarget) -> (String, TypedValue) {
        let style_key = resolve_key(key, target);
        let normalized = self.normalize_family(&style_key, None);
        (style_key.prop, normalized)
    }

    fn normalize_family(&self, key: &StyleKey, value: Option<&Value>) -> TypedValue {
        match key.family {
            StyleFamily::Color { default } => self.normalize_color(value, default),
            StyleFamily::Size => self.normalize_size(value),
            StyleFamily::BoxSpacing => self.normalize_box_spacing(value),
            StyleFamily::Enumerated { default } => {
                normalize_enumerated(&key.prop, value, default)
            }
            StyleFamily::Number { default } => TypedValue::Number(
                value.and_then(parse_number).unwrap_or(default),
            ),
            StyleFamily::Text | StyleFamily::Opaque => {
                TypedValue::String(value.map(opaque_string).unwrap_or_default())
            }
        }
    }

    pub fn normalize_color(&self, value: Option<&Value>, default: &str) -> TypedValue {
        match value.and_then(parse_color) {
            Some(color) => TypedValue::Color(color.to_hex()),
            None => {
                if let Some(raw) = value {
                    log::debug!("Unrecognized color {}, using {}", raw, default);
                }
                TypedValue::Color(default.to_string())
            }
        }
    }

    pub fn normalize_size(&self, value: Option<&Value>) -> TypedValue {
        TypedValue::Size(value.and_then(|v| self.parse_size(v)).unwrap_or_default())
    }

    /// Linked spacing becomes a single size, anything per-side becomes dimensions
    pub fn normalize_box_spacing(&self, value: Option<&Value>) -> TypedValue {
        let Some(value) = value else {
            return TypedValue::Size(Size::zero());
        };

        match value {
            Value::String(s) => {
                let tokens: Vec<Size> = s
                    .split_whitespace()
                    .map(|token| self.parse_token(token).unwrap_or_default())
                    .collect();
                match tokens.as_slice() {
                    [] => TypedValue::Size(Size::zero()),
                    [all] => TypedValue::Size(all.clone()),
                    [vertical, horizontal] => TypedValue::Dimensions(BoxDimensions::symmetric(
                        vertical.clone(),
                        horizontal.clone(),
                    )),
                    [top, horizontal, bottom] => TypedValue::Dimensions(BoxDimensions {
                        top: top.clone(),
                        right: horizontal.clone(),
                        bottom: bottom.clone(),
                        left: horizontal.clone(),
                    }),
                    [top, right, bottom, left, extra @ ..] => {
                        if !extra.is_empty() {
                            log::debug!(
                                "Spacing '{}' has {} tokens; extra tokens ignored",
                                s,
                                tokens.len()
                            );
                        }
                        TypedValue::Dimensions(BoxDimensions {
                            top: top.clone(),
                            right: right.clone(),
                            bottom: bottom.clone(),
                            left: left.clone(),
                        })
                    }
                }
            }
            Value::Object(map) if ["top", "right", "bottom", "left"].iter().any(|k| map.contains_key(*k)) => {
                let side = |name: &str| {
                    map.get(name)
                        .and_then(|v| self.parse_size(v))
                        .unwrap_or_default()
                };
                TypedValue::Dimensions(BoxDimensions {
                    top: side("top"),
                    right: side("right"),
                    bottom: side("bottom"),
                    left: side("left"),
                })
            }
            other => TypedValue::Size(self.parse_size(other).unwrap_or_default()),
        }
    }

    /// Bare number (px), `{size, unit}` object, or unit-suffixed string
    pub fn parse_size(&self, value: &Value) -> Option<Size> {
        match value {
            Value::Number(n) => n.as_f64().map(Size::px),
            Value::String(s) => self.parse_token(s),
            Value::Object(map) => {
                let size = map
                    .get("size")
                    .or_else(|| map.get("value"))
                    .and_then(parse_number)?;
                let unit = map
                    .get("unit")
                    .and_then(Value::as_str)
                    .filter(|u| !u.is_empty())
                    .unwrap_or(DEFAULT_UNIT);
                Some(Size::new(size, unit))
            }
            _ => None,
        }
    }

    /// Numeric prefix plus optional unit suffix, e.g. `24px`, `1.5em`, `12`
    pub fn parse_token(&self, token: &str) -> Option<Size> {
        let caps = self.token_pattern.captures(token)?;
        let size: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps
            .get(2)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());
        Some(Size::new(size, unit))
    }

    /// Pixel font size of a style bag, if it carries one
    pub fn font_size_px(&self, styles: &serde_json::Map<String, Value>) -> Option<f64> {
        styles
            .get("fontSize")
            .and_then(|v| self.parse_size(v))
            .map(|size| size.to_px())
    }
}

/// Numeric font weight, understanding `bold` and `normal`
pub fn font_weight_value(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Some(700.0),
            "normal" => Some(400.0),
            other => other.parse().ok(),
        },
        other => parse_number(other),
    }
}

fn normalize_enumerated(prop: &str, value: Option<&Value>, default: &str) -> TypedValue {
    let raw = match value {
        None => return TypedValue::string(default),
        Some(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_default(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };
    if raw.is_empty() {
        return TypedValue::string(default);
    }

    let normalized = match prop {
        "font-weight" => match raw.to_ascii_lowercase().as_str() {
            "bold" => "700".to_string(),
            "normal" => "400".to_string(),
            _ => raw,
        },
        "text-align" => match raw.to_ascii_lowercase().as_str() {
            "justified" => "justify".to_string(),
            lower => lower.to_string(),
        },
        "flex-direction" => match raw.to_ascii_lowercase().as_str() {
            "horizontal" | "none" => "row".to_string(),
            "vertical" => "column".to_string(),
            lower => lower.to_string(),
        },
        _ => raw,
    };
    TypedValue::String(normalized)
}

/// Hex strings, `{r,g,b,a}` objects in the 0-1 range, paints and paint lists
pub fn parse_color(value: &Value) -> Option<Rgba> {
    match value {
        Value::String(s) => parse_hex_color(s),
        Value::Object(map) => {
            if let Some(inner) = map.get("color") {
                let mut color = parse_color(inner)?;
                if let Some(opacity) = map.get("opacity").and_then(Value::as_f64) {
                    color.a = unit_to_byte(opacity * (color.a as f64 / 255.0));
                }
                return Some(color);
            }
            let channel = |key: &str| map.get(key).and_then(Value::as_f64);
            let (r, g, b) = (channel("r")?, channel("g")?, channel("b")?);
            let a = channel("a").unwrap_or(1.0);
            Some(Rgba::new(
                unit_to_byte(r),
                unit_to_byte(g),
                unit_to_byte(b),
                unit_to_byte(a),
            ))
        }
        Value::Array(paints) => paints
            .iter()
            .filter(|paint| {
                let visible = paint.get("visible").and_then(Value::as_bool).unwrap_or(true);
                let solid = paint
                    .get("type")
                    .and_then(Value::as_str)
                    .map_or(true, |t| t.eq_ignore_ascii_case("SOLID"));
                visible && solid
            })
            .find_map(parse_color),
        _ => None,
    }
}

fn unit_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
fn parse_hex_color(raw: &str) -> Option<Rgba> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();

    let a = if expanded.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, a))
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn opaque_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// `backgroundImage` -> `background-image`
pub fn kebab_case(key: &str) -> String {
    key.to_case(Case::Kebab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dims(value: TypedValue) -> BoxDimensions {
        match value {
            TypedValue::Dimensions(d) => d,
            other => panic!("expected dimensions, got {:?}", other),
        }
    }

    #[test]
    fn test_rgb_object_to_hex() {
        let n = StyleNormalizer::new();
        let value = n.normalize_color(Some(&json!({"r": 1, "g": 0, "b": 0})), DEFAULT_BACKGROUND);
        assert_eq!(value, TypedValue::Color("#FF0000".into()));

        let value = n.normalize_color(
            Some(&json!({"r": 0.5, "g": 0.25, "b": 1.0})),
            DEFAULT_BACKGROUND,
        );
        assert_eq!(value, TypedValue::Color("#8040FF".into()));
    }

    #[test]
    fn test_hex_colors_normalize() {
        assert_eq!(parse_color(&json!("#abc")).unwrap().to_hex(), "#AABBCC");
        assert_eq!(parse_color(&json!("#0c0d0e")).unwrap().to_hex(), "#0C0D0E");
        assert_eq!(parse_color(&json!("#00000080")).unwrap().to_hex(), "#00000080");
        assert!(parse_color(&json!("red")).is_none());
        assert!(parse_color(&json!("#12345")).is_none());
    }

    #[test]
    fn test_color_defaults() {
        let n = StyleNormalizer::new();
        assert_eq!(
            n.default_for("backgroundColor", StyleTarget::Box),
            ("background-color".to_string(), TypedValue::Color("#FFFFFF".into()))
        );
        assert_eq!(
            n.normalize("color", &json!("not-a-color"), StyleTarget::Text),
            ("color".to_string(), TypedValue::Color("#000000".into()))
        );
        assert_eq!(
            n.default_for("borderColor", StyleTarget::Box).1,
            TypedValue::Color("#000000".into())
        );
    }

    #[test]
    fn test_paint_list_uses_first_visible_solid() {
        let paints = json!([
            {"type": "SOLID", "visible": false, "color": {"r": 0, "g": 0, "b": 1}},
            {"type": "GRADIENT_LINEAR"},
            {"type": "SOLID", "color": {"r": 0, "g": 1, "b": 0}}
        ]);
        assert_eq!(parse_color(&paints).unwrap().to_hex(), "#00FF00");
    }

    #[test]
    fn test_size_inputs() {
        let n = StyleNormalizer::new();
        assert_eq!(n.normalize_size(Some(&json!(24))), TypedValue::Size(Size::px(24.0)));
        assert_eq!(
            n.normalize_size(Some(&json!("1.5em"))),
            TypedValue::Size(Size::new(1.5, "em"))
        );
        assert_eq!(
            n.normalize_size(Some(&json!({"size": 12, "unit": "rem"}))),
            TypedValue::Size(Size::new(12.0, "rem"))
        );
        assert_eq!(n.normalize_size(Some(&json!("auto"))), TypedValue::Size(Size::zero()));
        assert_eq!(n.normalize_size(None), TypedValue::Size(Size::zero()));
    }

    #[test]
    fn test_two_token_padding_is_unlinked() {
        let n = StyleNormalizer::new();
        let d = dims(n.normalize_box_spacing(Some(&json!("32px 20px"))));
        assert_eq!(d.top, Size::px(32.0));
        assert_eq!(d.bottom, Size::px(32.0));
        assert_eq!(d.left, Size::px(20.0));
        assert_eq!(d.right, Size::px(20.0));
    }

    #[test]
    fn test_scalar_padding_is_linked() {
        let n = StyleNormalizer::new();
        let value = n.normalize_box_spacing(Some(&json!(24)));
        assert!(value.is_linked_spacing());
        assert_eq!(value, TypedValue::Size(Size::px(24.0)));

        let value = n.normalize_box_spacing(Some(&json!("20px")));
        assert_eq!(value, TypedValue::Size(Size::px(20.0)));
    }

    #[test]
    fn test_four_key_padding_object() {
        let n = StyleNormalizer::new();
        let d = dims(n.normalize_box_spacing(Some(&json!({"top": 4, "right": "16px", "left": 8}))));
        assert_eq!(d.top, Size::px(4.0));
        assert_eq!(d.right, Size::px(16.0));
        assert_eq!(d.bottom, Size::zero());
        assert_eq!(d.left, Size::px(8.0));
    }

    #[test]
    fn test_extra_spacing_tokens_are_ignored() {
        let n = StyleNormalizer::new();
        let d = dims(n.normalize_box_spacing(Some(&json!("1px 2px 3px 4px 5px"))));
        assert_eq!(d.top, Size::px(1.0));
        assert_eq!(d.right, Size::px(2.0));
        assert_eq!(d.bottom, Size::px(3.0));
        assert_eq!(d.left, Size::px(4.0));
    }

    #[test]
    fn test_unparseable_tokens_default_to_zero() {
        let n = StyleNormalizer::new();
        let d = dims(n.normalize_box_spacing(Some(&json!("abc 10px"))));
        assert_eq!(d.top, Size::zero());
        assert_eq!(d.left, Size::px(10.0));
    }

    #[test]
    fn test_enumerated_defaults_and_mapping() {
        let n = StyleNormalizer::new();
        assert_eq!(n.default_for("fontWeight", StyleTarget::Text).1, TypedValue::string("400"));
        assert_eq!(n.default_for("textAlign", StyleTarget::Text).1, TypedValue::string("left"));
        assert_eq!(n.default_for("flexDirection", StyleTarget::Box).1, TypedValue::string("row"));
        assert_eq!(
            n.normalize("fontWeight", &json!(700), StyleTarget::Text).1,
            TypedValue::string("700")
        );
        assert_eq!(
            n.normalize("textAlignHorizontal", &json!("JUSTIFIED"), StyleTarget::Text),
            ("text-align".to_string(), TypedValue::string("justify"))
        );
        assert_eq!(
            n.normalize("layoutMode", &json!("VERTICAL"), StyleTarget::Box),
            ("flex-direction".to_string(), TypedValue::string("column"))
        );
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let n = StyleNormalizer::new();
        assert_eq!(
            n.normalize("boxShadow", &json!("0 3px 14px rgba(0,0,0,0.12)"), StyleTarget::Box),
            (
                "box-shadow".to_string(),
                TypedValue::string("0 3px 14px rgba(0,0,0,0.12)")
            )
        );
        assert_eq!(
            n.normalize("zIndex", &json!(3), StyleTarget::Box).1,
            TypedValue::string("3")
        );
    }

    #[test]
    fn test_canonical_key_beats_alias() {
        let n = StyleNormalizer::new();
        let styles = json!({
            "backgroundColor": "#111111",
            "fill": "#222222",
            "cornerRadius": 8
        });
        let props = n.normalize_styles(styles.as_object().unwrap(), StyleTarget::Box);
        assert_eq!(props["background-color"], TypedValue::Color("#111111".into()));
        assert_eq!(props["border-radius"], TypedValue::Size(Size::px(8.0)));
    }

    #[test]
    fn test_text_fill_colors_glyphs() {
        let n = StyleNormalizer::new();
        let styles = json!({"fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}]});
        let props = n.normalize_styles(styles.as_object().unwrap(), StyleTarget::Text);
        assert_eq!(props["color"], TypedValue::Color("#FFFFFF".into()));
        assert!(!props.contains_key("background-color"));
    }

    #[test]
    fn test_side_keys_collect_into_dimensions() {
        let n = StyleNormalizer::new();
        let styles = json!({"paddingTop": 8, "paddingLeft": 16});
        let props = n.normalize_styles(styles.as_object().unwrap(), StyleTarget::Box);
        let d = dims(props["padding"].clone());
        assert_eq!(d.top, Size::px(8.0));
        assert_eq!(d.left, Size::px(16.0));
        assert_eq!(d.right, Size::zero());
    }

    #[test]
    fn test_font_weight_value() {
        assert_eq!(font_weight_value(&json!("bold")), Some(700.0));
        assert_eq!(font_weight_value(&json!("600")), Some(600.0));
        assert_eq!(font_weight_value(&json!(300)), Some(300.0));
        assert_eq!(font_weight_value(&json!("heavy")), None);
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("backgroundImage"), "background-image");
        assert_eq!(kebab_case("z_index"), "z-index");
        assert_eq!(kebab_case("opacity"), "opacity");
        assert_eq!(kebab_case("boxShadow"), "box-shadow");
    }
}
