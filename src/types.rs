//! Core source-side types: the design node grammar

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Open bag of visual attributes attached to a source node
pub type StyleBag = Map<String, Value>;

/// Default document title when the design carries no name
pub const DEFAULT_TITLE: &str = "Figma Design";

/// Coarse node kind tag from the design tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Text,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Container,
    Instance,
    Image,
    Vector,
    Rectangle,
    Ellipse,
    Other(String),
}

impl NodeType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Self::Text,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "SECTION" => Self::Section,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            "CONTAINER" | "STACK" => Self::Container,
            "INSTANCE" => Self::Instance,
            "IMAGE" => Self::Image,
            "VECTOR" | "BOOLEAN_OPERATION" | "STAR" | "LINE" | "POLYGON" => Self::Vector,
            "RECTANGLE" => Self::Rectangle,
            "ELLIPSE" => Self::Ellipse,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Frame, group and other box-like nodes that lay out children
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Frame
                | Self::Group
                | Self::Section
                | Self::Component
                | Self::ComponentSet
                | Self::Container
        )
    }

    pub fn is_instance(&self) -> bool {
        matches!(self, Self::Instance)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "TEXT",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Container => "CONTAINER",
            Self::Instance => "INSTANCE",
            Self::Image => "IMAGE",
            Self::Vector => "VECTOR",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Other(name) => name,
        };
        f.write_str(name)
    }
}

/// One element of the input design tree
#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    /// Identifier from the design tool; may contain characters like `:`
    pub id: String,
    pub name: String,
    pub node_type: NodeType,
    /// Text payload, only meaningful on text leaves
    pub content: Option<String>,
    pub styles: StyleBag,
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            node_type,
            content: None,
            styles: StyleBag::new(),
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: Value) -> Self {
        self.styles.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn style(&self, key: &str) -> Option<&Value> {
        self.styles.get(key).filter(|v| !v.is_null())
    }

    /// Text content of this node or the first text leaf beneath it
    pub fn first_text(&self) -> Option<&str> {
        if self.node_type.is_text() {
            if let Some(content) = self.content.as_deref().filter(|c| !c.is_empty()) {
                return Some(content);
            }
        }
        self.children.iter().find_map(|child| child.first_text())
    }
}

/// Optional top-level metadata supplied with the node list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: Option<String>,
}

impl DesignMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
