//! Schema-neutral target widget model
//!
//! The mapper builds this tree; assemblers render it into a concrete
//! page-builder schema.

use crate::value::TypedValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DOCUMENT_VERSION: &str = "0.4";
pub const DOCUMENT_KIND: &str = "page";
pub const DEFAULT_BREAKPOINT: &str = "desktop";
pub const STYLE_LABEL: &str = "local";
pub const STYLE_TYPE: &str = "class";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Container,
    Heading,
    Paragraph,
    Button,
    Block,
    Image,
    Vector,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        Self::Container,
        Self::Heading,
        Self::Paragraph,
        Self::Button,
        Self::Block,
        Self::Image,
        Self::Vector,
    ];

    /// Widgets that lay out child widgets
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container | Self::Block)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Block => "block",
            Self::Image => "image",
            Self::Vector => "vector",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantMeta {
    pub breakpoint: String,
    /// Interaction state; `None` is the resting state
    pub state: Option<String>,
}

impl Default for VariantMeta {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT.to_string(),
            state: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleVariant {
    pub meta: VariantMeta,
    pub props: BTreeMap<String, TypedValue>,
}

impl StyleVariant {
    pub fn desktop(props: BTreeMap<String, TypedValue>) -> Self {
        Self {
            meta: VariantMeta::default(),
            props,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDefinition {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub style_type: String,
    pub variants: Vec<StyleVariant>,
}

impl StyleDefinition {
    pub fn local_class(id: impl Into<String>, variant: StyleVariant) -> Self {
        Self {
            id: id.into(),
            label: STYLE_LABEL.to_string(),
            style_type: STYLE_TYPE.to_string(),
            variants: vec![variant],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetWidget {
    pub id: String,
    pub kind: ElementKind,
    pub settings: BTreeMap<String, TypedValue>,
    /// Keyed by style-class id
    pub style_block: BTreeMap<String, StyleDefinition>,
    pub children: Vec<TargetWidget>,
}

impl TargetWidget {
    pub fn setting(&self, name: &str) -> Option<&TypedValue> {
        self.settings.get(name)
    }

    /// Props of the first variant of the first style class
    pub fn style_props(&self) -> Option<&BTreeMap<String, TypedValue>> {
        self.style_block
            .values()
            .next()
            .and_then(|style| style.variants.first())
            .map(|variant| &variant.props)
    }

    pub fn style_prop(&self, name: &str) -> Option<&TypedValue> {
        self.style_props().and_then(|props| props.get(name))
    }

    /// Pre-order walk over this widget and its descendants
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a TargetWidget, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut dyn FnMut(&'a TargetWidget, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: String,
    pub title: String,
    pub document_kind: String,
    pub content: Vec<TargetWidget>,
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            title: title.into(),
            document_kind: DOCUMENT_KIND.to_string(),
            content: Vec::new(),
            settings: serde_json::Map::new(),
        }
    }

    /// Pre-order walk over every widget with its depth (top level is 0)
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a TargetWidget, usize)) {
        for widget in &self.content {
            widget.walk(visit);
        }
    }
}
