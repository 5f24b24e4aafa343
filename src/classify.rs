//! Heuristic classification of source nodes into widget kinds

use crate::normalizer::{font_weight_value, StyleNormalizer};
use crate::types::SourceNode;
use crate::widget::ElementKind;
use std::fmt;

/// Text larger than this is a heading
pub const HEADING_FONT_SIZE_THRESHOLD: f64 = 20.0;
/// Text at least this heavy is a heading
pub const HEADING_FONT_WEIGHT_THRESHOLD: f64 = 600.0;
/// Size assumed for headings that carry no font size
pub const DEFAULT_HEADING_FONT_SIZE: f64 = 24.0;
pub const DEFAULT_BODY_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn from_font_size(px: f64) -> Self {
        if px >= 32.0 {
            Self::H1
        } else if px >= 28.0 {
            Self::H2
        } else if px >= 24.0 {
            Self::H3
        } else if px >= 20.0 {
            Self::H4
        } else if px >= 18.0 {
            Self::H5
        } else {
            Self::H6
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Heading(HeadingLevel),
    Paragraph,
    Button,
    Container,
    Image,
    Vector,
    Block,
}

impl Classification {
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Self::Heading(_) => ElementKind::Heading,
            Self::Paragraph => ElementKind::Paragraph,
            Self::Button => ElementKind::Button,
            Self::Container => ElementKind::Container,
            Self::Image => ElementKind::Image,
            Self::Vector => ElementKind::Vector,
            Self::Block => ElementKind::Block,
        }
    }

    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self {
            Self::Heading(level) => Some(*level),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(level) => write!(f, "heading({})", level),
            other => f.write_str(other.element_kind().label()),
        }
    }
}

/// First matching rule wins:
/// 1. large, heavy or heading-named text is a heading
/// 2. other text is a paragraph
/// 3. button-named nodes and component instances are buttons
/// 4. frames, groups and containers are containers
/// 5. images and vectors keep their own kinds
/// 6. everything else is a generic block
///
/// Rule 3 also catches component instances that are not buttons; the input
/// carries nothing that tells them apart.
pub fn classify(node: &SourceNode, normalizer: &StyleNormalizer) -> Classification {
    let name = node.name.to_lowercase();

    if node.node_type.is_text() {
        let font_size = normalizer.font_size_px(&node.styles);
        let font_weight = node
            .style("fontWeight")
            .and_then(font_weight_value)
            .unwrap_or(400.0);

        let is_heading = font_size.unwrap_or(DEFAULT_BODY_FONT_SIZE) > HEADING_FONT_SIZE_THRESHOLD
            || font_weight >= HEADING_FONT_WEIGHT_THRESHOLD
            || name.contains("heading")
            || name.contains("title");

        return if is_heading {
            let size = font_size.unwrap_or(DEFAULT_HEADING_FONT_SIZE);
            Classification::Heading(HeadingLevel::from_font_size(size))
        } else {
            Classification::Paragraph
        };
    }

    if name.contains("button") || name.contains("btn") || node.node_type.is_instance() {
        Classification::Button
    } else if node.node_type.is_container() {
        Classification::Container
    } else if node.node_type.is_image() {
        Classification::Image
    } else if node.node_type.is_vector() {
        Classification::Vector
    } else {
        Classification::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeType;
    use serde_json::json;

    fn text(name: &str) -> SourceNode {
        SourceNode::new("1:1", NodeType::Text).with_name(name).with_content("x")
    }

    fn run(node: &SourceNode) -> Classification {
        classify(node, &StyleNormalizer::new())
    }

    #[test]
    fn test_large_text_is_h1_regardless_of_other_attributes() {
        let node = text("body copy")
            .with_style("fontSize", json!(32))
            .with_style("fontWeight", json!(300));
        assert_eq!(run(&node), Classification::Heading(HeadingLevel::H1));
    }

    #[test]
    fn test_body_text_is_paragraph() {
        let node = text("body copy")
            .with_style("fontSize", json!(14))
            .with_style("fontWeight", json!(400));
        assert_eq!(run(&node), Classification::Paragraph);
    }

    #[test]
    fn test_heavy_or_named_text_is_heading() {
        let heavy = text("label")
            .with_style("fontSize", json!(16))
            .with_style("fontWeight", json!("bold"));
        assert_eq!(run(&heavy), Classification::Heading(HeadingLevel::H6));

        let named = text("Section Title");
        assert_eq!(run(&named), Classification::Heading(HeadingLevel::H3));
    }

    #[test]
    fn test_heading_thresholds() {
        let cases = [
            (32.0, HeadingLevel::H1),
            (28.0, HeadingLevel::H2),
            (24.0, HeadingLevel::H3),
            (20.0, HeadingLevel::H4),
            (18.0, HeadingLevel::H5),
            (12.0, HeadingLevel::H6),
        ];
        for (size, level) in cases {
            assert_eq!(HeadingLevel::from_font_size(size), level, "size {}", size);
        }
    }

    #[test]
    fn test_font_size_strings_and_em() {
        let node = text("x").with_style("fontSize", json!("2em"));
        assert_eq!(run(&node), Classification::Heading(HeadingLevel::H1));

        let node = text("x").with_style("fontSize", json!("28px"));
        assert_eq!(run(&node), Classification::Heading(HeadingLevel::H2));
    }

    #[test]
    fn test_text_named_button_stays_text() {
        let node = text("button label").with_style("fontSize", json!(14));
        assert_eq!(run(&node), Classification::Paragraph);
    }

    #[test]
    fn test_buttons() {
        let named = SourceNode::new("2", NodeType::Frame).with_name("Primary Btn");
        assert_eq!(run(&named), Classification::Button);

        let instance = SourceNode::new("3", NodeType::Instance).with_name("Card");
        assert_eq!(run(&instance), Classification::Button);
    }

    #[test]
    fn test_containers_and_fallbacks() {
        assert_eq!(run(&SourceNode::new("1", NodeType::Group)), Classification::Container);
        assert_eq!(run(&SourceNode::new("1", NodeType::Image)), Classification::Image);
        assert_eq!(run(&SourceNode::new("1", NodeType::Vector)), Classification::Vector);
        assert_eq!(run(&SourceNode::new("1", NodeType::Rectangle)), Classification::Block);
        assert_eq!(
            run(&SourceNode::new("1", NodeType::Other("WIDGET".into()))),
            Classification::Block
        );
    }
}
