//! Document assemblers
//!
//! The mapper produces one schema-neutral [`Document`]; an assembler renders it
//! into a concrete page-builder import format. Two generations are supported:
//!
//! - **atomic**: class-based widgets that keep the typed descriptors and
//!   carry their own style block
//! - **legacy**: a single section/column holding a flat list of widgets with
//!   plain settings

use crate::ids::{stable_suffix, NodePath};
use crate::normalizer::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_TEXT_ALIGN};
use crate::value::{number_value, BoxDimensions, Size, TypedValue};
use crate::widget::{Document, ElementKind, TargetWidget, DOCUMENT_VERSION};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSchema {
    #[default]
    Atomic,
    Legacy,
}

impl OutputSchema {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "atomic" | "v4" => Some(Self::Atomic),
            "legacy" | "classic" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for OutputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the internal widget model into one external schema
pub trait DocumentAssembler {
    fn schema(&self) -> OutputSchema;

    fn assemble(&self, document: &Document) -> Value;
}

pub fn assembler_for(schema: OutputSchema) -> Box<dyn DocumentAssembler> {
    match schema {
        OutputSchema::Atomic => Box::new(AtomicAssembler),
        OutputSchema::Legacy => Box::new(LegacyAssembler),
    }
}

fn document_envelope(document: &Document, content: Vec<Value>) -> Map<String, Value> {
    let mut root = Map::new();
    root.insert("version".to_string(), json!(document.version));
    root.insert("title".to_string(), json!(document.title));
    root.insert("type".to_string(), json!(document.document_kind));
    root.insert("content".to_string(), Value::Array(content));
    root.insert("settings".to_string(), Value::Object(document.settings.clone()));
    root
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicAssembler;

impl AtomicAssembler {
    fn element(&self, widget: &TargetWidget, depth: usize) -> Value {
        let mut element = Map::new();
        element.insert("id".to_string(), json!(widget.id));

        match widget.kind {
            ElementKind::Container => {
                element.insert("elType".to_string(), json!("e-flexbox"));
            }
            ElementKind::Block => {
                element.insert("elType".to_string(), json!("e-div-block"));
            }
            kind => {
                element.insert("elType".to_string(), json!("widget"));
                element.insert("widgetType".to_string(), json!(atomic_widget_type(kind)));
            }
        }

        element.insert("settings".to_string(), json!(widget.settings));
        element.insert(
            "elements".to_string(),
            Value::Array(
                widget
                    .children
                    .iter()
                    .map(|child| self.element(child, depth + 1))
                    .collect(),
            ),
        );
        element.insert("isInner".to_string(), json!(depth > 0));
        element.insert("styles".to_string(), json!(widget.style_block));
        element.insert("version".to_string(), json!(DOCUMENT_VERSION));
        Value::Object(element)
    }
}

fn atomic_widget_type(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Heading => "e-heading",
        ElementKind::Paragraph => "e-paragraph",
        ElementKind::Button => "e-button",
        ElementKind::Image => "e-image",
        ElementKind::Vector => "e-svg",
        ElementKind::Container => "e-flexbox",
        ElementKind::Block => "e-div-block",
    }
}

impl DocumentAssembler for AtomicAssembler {
    fn schema(&self) -> OutputSchema {
        OutputSchema::Atomic
    }

    fn assemble(&self, document: &Document) -> Value {
        let content = document
            .content
            .iter()
            .map(|widget| self.element(widget, 0))
            .collect();
        let mut root = document_envelope(document, content);
        root.insert("page_settings".to_string(), json!([]));
        Value::Object(root)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyAssembler;

impl LegacyAssembler {
    fn widget(&self, widget: &TargetWidget) -> Value {
        let settings = match widget.kind {
            ElementKind::Heading => heading_settings(widget),
            ElementKind::Paragraph => paragraph_settings(widget),
            ElementKind::Button => button_settings(widget),
            ElementKind::Image => image_settings(widget),
            ElementKind::Vector => vector_settings(widget),
            ElementKind::Container | ElementKind::Block => box_settings(widget),
        };

        json!({
            "id": widget.id,
            "elType": "widget",
            "widgetType": legacy_widget_type(widget.kind),
            "settings": settings,
            "elements": [],
        })
    }
}

fn legacy_widget_type(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Heading => "heading",
        ElementKind::Paragraph => "paragraph",
        ElementKind::Button => "button",
        ElementKind::Image => "image",
        ElementKind::Vector => "icon",
        ElementKind::Container | ElementKind::Block => "div-block",
    }
}

impl DocumentAssembler for LegacyAssembler {
    fn schema(&self) -> OutputSchema {
        OutputSchema::Legacy
    }

    fn assemble(&self, document: &Document) -> Value {
        if document.content.is_empty() {
            return Value::Object(document_envelope(document, Vec::new()));
        }

        let mut widgets = Vec::new();
        document.walk(&mut |widget, _| widgets.push(self.widget(widget)));

        let column = json!({
            "id": stable_suffix("column", &NodePath::root(0)),
            "elType": "column",
            "settings": {"_column_size": 100},
            "elements": widgets,
        });
        let section = json!({
            "id": stable_suffix("section", &NodePath::root(0)),
            "elType": "section",
            "settings": {"layout": "boxed", "gap": "default"},
            "elements": [column],
        });
        Value::Object(document_envelope(document, vec![section]))
    }
}

/// Strip the typed wrapper down to the plain value legacy settings expect
fn plain(value: &TypedValue) -> Value {
    match value {
        TypedValue::Color(s) | TypedValue::String(s) => json!(s),
        TypedValue::Size(size) => json!({"unit": size.unit, "size": number_value(size.size)}),
        TypedValue::Dimensions(dims) => legacy_box(dims, false),
        TypedValue::Number(n) => number_value(*n),
        TypedValue::Classes(classes) => json!(classes),
        TypedValue::Link(link) => json!({
            "url": link.url,
            "is_external": link.target == "_blank",
        }),
    }
}

fn legacy_box(dims: &BoxDimensions, linked: bool) -> Value {
    let sides = [&dims.top, &dims.right, &dims.bottom, &dims.left];
    // Legacy boxes carry one unit; mixed units are converted to px
    let mixed = sides.iter().any(|side| side.unit != dims.top.unit);
    let (unit, [top, right, bottom, left]) = if mixed {
        log::debug!("Mixed spacing units converted to px");
        ("px", sides.map(Size::to_px))
    } else {
        (dims.top.unit.as_str(), sides.map(|side| side.size))
    };
    json!({
        "unit": unit,
        "top": number_value(top),
        "right": number_value(right),
        "bottom": number_value(bottom),
        "left": number_value(left),
        "isLinked": linked,
    })
}

/// Box spacing as a legacy four-sided object, linked when it came in as one size
fn legacy_spacing(value: &TypedValue) -> Option<Value> {
    let dims = value.as_dimensions()?;
    Some(legacy_box(&dims, value.is_linked_spacing()))
}

fn prop_str<'a>(widget: &'a TargetWidget, name: &str, default: &'a str) -> &'a str {
    widget
        .style_prop(name)
        .and_then(TypedValue::as_str)
        .unwrap_or(default)
}

fn setting_str<'a>(widget: &'a TargetWidget, name: &str) -> &'a str {
    widget
        .setting(name)
        .and_then(TypedValue::as_str)
        .unwrap_or_default()
}

fn typography(widget: &TargetWidget, settings: &mut Map<String, Value>) {
    settings.insert("typography_typography".to_string(), json!("custom"));
    if let Some(size) = widget.style_prop("font-size") {
        settings.insert("typography_font_size".to_string(), plain(size));
    }
    if let Some(weight) = widget.style_prop("font-weight") {
        settings.insert("typography_font_weight".to_string(), plain(weight));
    }
    settings.insert(
        "typography_font_family".to_string(),
        json!(prop_str(widget, "font-family", "Default")),
    );
}

fn heading_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert("title".to_string(), json!(setting_str(widget, "title")));
    settings.insert("header_size".to_string(), json!(setting_str(widget, "level")));
    settings.insert(
        "title_color".to_string(),
        json!(prop_str(widget, "color", DEFAULT_FOREGROUND)),
    );
    typography(widget, &mut settings);
    settings.insert(
        "align".to_string(),
        json!(prop_str(widget, "text-align", DEFAULT_TEXT_ALIGN)),
    );
    settings
}

fn paragraph_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert("text".to_string(), json!(setting_str(widget, "paragraph")));
    settings.insert(
        "text_color".to_string(),
        json!(prop_str(widget, "color", DEFAULT_FOREGROUND)),
    );
    typography(widget, &mut settings);
    settings.insert(
        "align".to_string(),
        json!(prop_str(widget, "text-align", DEFAULT_TEXT_ALIGN)),
    );
    settings
}

fn button_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert("text".to_string(), json!(setting_str(widget, "text")));
    settings.insert("size".to_string(), json!("md"));
    settings.insert("button_type".to_string(), json!("default"));
    if let Some(link) = widget.setting("link") {
        settings.insert("link".to_string(), plain(link));
    }
    settings.insert(
        "text_color".to_string(),
        json!(prop_str(widget, "color", DEFAULT_FOREGROUND)),
    );
    settings.insert(
        "background_color".to_string(),
        json!(prop_str(widget, "background-color", DEFAULT_BACKGROUND)),
    );
    insert_radius(widget, &mut settings);
    if let Some(padding) = widget.style_prop("padding").and_then(legacy_spacing) {
        settings.insert("text_padding".to_string(), padding);
    }
    typography(widget, &mut settings);
    settings
}

fn image_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert(
        "image".to_string(),
        json!({"url": setting_str(widget, "src"), "alt": setting_str(widget, "alt")}),
    );
    insert_radius(widget, &mut settings);
    settings
}

fn vector_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert(
        "primary_color".to_string(),
        json!(prop_str(widget, "color", DEFAULT_FOREGROUND)),
    );
    settings
}

fn box_settings(widget: &TargetWidget) -> Map<String, Value> {
    let mut settings = Map::new();
    for dimension in ["width", "height"] {
        if let Some(size) = widget.style_prop(dimension) {
            settings.insert(dimension.to_string(), plain(size));
        }
    }
    if let Some(color) = widget.style_prop("background-color") {
        settings.insert("background_background".to_string(), json!("classic"));
        settings.insert("background_color".to_string(), plain(color));
    }
    insert_radius(widget, &mut settings);
    if let Some(padding) = widget.style_prop("padding").and_then(legacy_spacing) {
        settings.insert("padding".to_string(), padding);
    }
    if let Some(gap) = widget.style_prop("gap") {
        settings.insert("gap".to_string(), plain(gap));
    }
    if let Some(direction) = widget.style_prop("flex-direction") {
        settings.insert("flex_direction".to_string(), plain(direction));
    }
    settings
}

fn insert_radius(widget: &TargetWidget, settings: &mut Map<String, Value>) {
    if let Some(radius) = widget.style_prop("border-radius").and_then(legacy_spacing) {
        settings.insert("border_radius".to_string(), radius);
    }
}
