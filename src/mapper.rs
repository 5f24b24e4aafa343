//! Recursive mapping of source nodes onto target widgets

use crate::classify::{classify, Classification, DEFAULT_BODY_FONT_SIZE, DEFAULT_HEADING_FONT_SIZE};
use crate::ids::{IdGenerator, NodePath};
use crate::normalizer::{StyleNormalizer, StyleTarget};
use crate::types::SourceNode;
use crate::value::{Link, Size, TypedValue};
use crate::widget::{StyleDefinition, StyleVariant, TargetWidget};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_BUTTON_LABEL: &str = "Button";
pub const DEFAULT_BUTTON_FONT_WEIGHT: &str = "500";

/// Source keys whose defaults every widget of a kind carries
fn default_style_keys(classification: &Classification) -> &'static [&'static str] {
    match classification {
        Classification::Container => &["backgroundColor", "padding", "gap", "flexDirection"],
        Classification::Block => &["backgroundColor", "padding"],
        Classification::Heading(_) | Classification::Paragraph => {
            &["color", "fontSize", "fontWeight", "textAlign"]
        }
        Classification::Button => &[
            "color",
            "backgroundColor",
            "fontSize",
            "fontWeight",
            "borderRadius",
            "padding",
        ],
        Classification::Image => &["borderRadius"],
        Classification::Vector => &["color"],
    }
}

pub struct TreeMapper {
    normalizer: StyleNormalizer,
    ids: IdGenerator,
}

impl TreeMapper {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            normalizer: StyleNormalizer::new(),
            ids,
        }
    }

    pub fn normalizer(&self) -> &StyleNormalizer {
        &self.normalizer
    }

    /// Map a list of root nodes, keeping their order
    pub fn map_nodes(&mut self, nodes: &[SourceNode]) -> Vec<TargetWidget> {
        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| self.map_node(node, &NodePath::root(index)))
            .collect()
    }

    pub fn map_node(&mut self, node: &SourceNode, path: &NodePath) -> TargetWidget {
        let classification = classify(node, &self.normalizer);
        log::debug!(
            "{} {} '{}' -> {}",
            path,
            node.node_type,
            node.name,
            classification
        );

        let id = self.ids.widget_id(&node.id, path);
        let class_id = self.ids.class_id(&id, &node.id, path);

        let settings = self.build_settings(node, &classification, &class_id);
        let props = self.build_props(node, &classification);
        let mut style_block = BTreeMap::new();
        style_block.insert(
            class_id.clone(),
            StyleDefinition::local_class(class_id, StyleVariant::desktop(props)),
        );

        let children = node
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| self.map_node(child, &path.child(index)))
            .collect();

        TargetWidget {
            id,
            kind: classification.element_kind(),
            settings,
            style_block,
            children,
        }
    }

    fn build_settings(
        &self,
        node: &SourceNode,
        classification: &Classification,
        class_id: &str,
    ) -> BTreeMap<String, TypedValue> {
        let mut settings = BTreeMap::new();
        settings.insert(
            "classes".to_string(),
            TypedValue::Classes(vec![class_id.to_string()]),
        );

        let content = node.content.clone().unwrap_or_default();
        match classification {
            Classification::Heading(level) => {
                settings.insert("title".to_string(), TypedValue::String(content));
                settings.insert("level".to_string(), TypedValue::string(level.as_str()));
            }
            Classification::Paragraph => {
                settings.insert("paragraph".to_string(), TypedValue::String(content));
            }
            Classification::Button => {
                let label = node
                    .content
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .or_else(|| node.first_text())
                    .or_else(|| Some(node.name.as_str()).filter(|n| !n.is_empty()))
                    .unwrap_or(DEFAULT_BUTTON_LABEL);
                settings.insert("text".to_string(), TypedValue::string(label));
                settings.insert("link".to_string(), TypedValue::Link(button_link(node)));
            }
            Classification::Image => {
                let src = ["imageUrl", "backgroundImage"]
                    .iter()
                    .find_map(|key| node.style(key).and_then(Value::as_str))
                    .map(str::to_string)
                    .unwrap_or(content);
                settings.insert("src".to_string(), TypedValue::String(src));
                settings.insert("alt".to_string(), TypedValue::string(node.name.as_str()));
            }
            Classification::Container | Classification::Block | Classification::Vector => {}
        }
        settings
    }

    fn build_props(
        &self,
        node: &SourceNode,
        classification: &Classification,
    ) -> BTreeMap<String, TypedValue> {
        let target = if node.node_type.is_text() || *classification == Classification::Vector {
            StyleTarget::Text
        } else {
            StyleTarget::Box
        };

        let mut props = BTreeMap::new();
        for key in default_style_keys(classification) {
            let (prop, value) = self.normalizer.default_for(key, target);
            props.insert(prop, value);
        }

        let default_font_size = match classification {
            Classification::Heading(_) => Some(DEFAULT_HEADING_FONT_SIZE),
            Classification::Paragraph | Classification::Button => Some(DEFAULT_BODY_FONT_SIZE),
            _ => None,
        };
        if let Some(size) = default_font_size {
            props.insert("font-size".to_string(), TypedValue::Size(Size::px(size)));
        }
        if *classification == Classification::Button {
            props.insert(
                "font-weight".to_string(),
                TypedValue::string(DEFAULT_BUTTON_FONT_WEIGHT),
            );
        }

        props.extend(self.normalizer.normalize_styles(&node.styles, target));

        // An unreadable font size keeps the default the kind was classified with
        if let Some(size) = default_font_size {
            if self.normalizer.font_size_px(&node.styles).is_none() {
                props.insert("font-size".to_string(), TypedValue::Size(Size::px(size)));
            }
        }
        props
    }
}

fn button_link(node: &SourceNode) -> Link {
    let mut link = Link::default();
    match node.style("link").or_else(|| node.style("url")) {
        Some(Value::String(url)) => link.url = url.clone(),
        Some(Value::Object(map)) => {
            if let Some(url) = map.get("url").and_then(Value::as_str) {
                link.url = url.to_string();
            }
            if let Some(target) = map.get("target").and_then(Value::as_str) {
                link.target = target.to_string();
            }
        }
        _ => {}
    }
    link
}
