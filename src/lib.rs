//! Figpress
//!
//! Converts design-tool node trees into page-builder documents, keeping the
//! visual intent (text, color, spacing, layout direction) across the two
//! schemas.
//!
//! # Basic Usage
//!
//! ```no_run
//! use figpress::{convert_file, ConversionOptions, Result};
//!
//! fn main() -> Result<()> {
//!     convert_file("design.json", "page.json", &ConversionOptions::default())?;
//!     Ok(())
//! }
//! ```
//!
//! # Conversion Pipeline
//!
//! 1. **Input**: validate the loose JSON input into [`SourceNode`]s
//! 2. **Mapper**: classify every node, normalize its styles and build the
//!    schema-neutral widget tree
//! 3. **Assembler**: render the widget tree into the atomic or legacy
//!    page-builder schema

pub mod assembler;
pub mod classify;
pub mod cli;
pub mod error;
pub mod ids;
pub mod input;
pub mod mapper;
pub mod normalizer;
pub mod types;
pub mod value;
pub mod widget;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub use assembler::{
    assembler_for, AtomicAssembler, DocumentAssembler, LegacyAssembler, OutputSchema,
};
pub use classify::{classify, Classification, HeadingLevel};
pub use error::{ConvertError, Result};
pub use ids::{IdGenerator, IdStrategy, NodePath, DEFAULT_CLASS_PREFIX};
pub use input::{parse_input, parse_nodes};
pub use mapper::TreeMapper;
pub use normalizer::{StyleNormalizer, StyleTarget};
pub use types::{DesignMetadata, NodeType, SourceNode, StyleBag, DEFAULT_TITLE};
pub use value::{BoxDimensions, Link, Size, TypedValue};
pub use widget::{Document, ElementKind, StyleDefinition, StyleVariant, TargetWidget};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Conversion options and settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// External schema the document is rendered into
    pub schema: OutputSchema,

    /// How style-class id suffixes are generated
    pub id_strategy: IdStrategy,

    /// Prefix of every style-class id
    pub class_prefix: String,

    /// Document title; falls back to the input metadata name
    pub title: Option<String>,

    /// Seed for random id suffixes
    pub seed: Option<u64>,

    /// Pretty-print written JSON
    pub pretty: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            schema: OutputSchema::Atomic,
            id_strategy: IdStrategy::Random,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            title: None,
            seed: None,
            pretty: true,
        }
    }
}

impl ConversionOptions {
    fn id_generator(&self) -> IdGenerator {
        match self.seed {
            Some(seed) => IdGenerator::with_seed(self.id_strategy, self.class_prefix.clone(), seed),
            None => IdGenerator::new(self.id_strategy, self.class_prefix.clone()),
        }
    }
}

/// Conversion statistics and metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionStats {
    /// Number of widgets produced, one per source node
    pub node_count: usize,

    /// Widgets per element kind
    pub widget_counts: BTreeMap<String, usize>,

    /// Deepest nesting level (a lone top-level widget is 1)
    pub max_depth: usize,

    /// Style props across all style variants
    pub style_count: usize,

    /// Written output size in bytes
    pub output_size: u64,

    pub convert_time_ms: u64,
}

impl ConversionStats {
    pub fn from_document(document: &Document) -> Self {
        let mut stats = Self::default();
        document.walk(&mut |widget, depth| {
            stats.node_count += 1;
            *stats
                .widget_counts
                .entry(widget.kind.label().to_string())
                .or_insert(0) += 1;
            stats.max_depth = stats.max_depth.max(depth + 1);
            stats.style_count += widget
                .style_block
                .values()
                .flat_map(|style| style.variants.iter())
                .map(|variant| variant.props.len())
                .sum::<usize>();
        });
        stats
    }
}

/// Map a validated node list into a document. Never fails.
pub fn convert_nodes(
    nodes: &[SourceNode],
    metadata: &DesignMetadata,
    options: &ConversionOptions,
) -> Document {
    let title = options
        .title
        .clone()
        .or_else(|| metadata.name.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    log::debug!(
        "Converting {} top-level nodes into '{}' ({:?} ids)",
        nodes.len(),
        title,
        options.id_strategy
    );

    let mut mapper = TreeMapper::new(options.id_generator());
    let mut document = Document::new(title);
    document.content = mapper.map_nodes(nodes);
    document
}

/// Validate loose JSON input and convert it
pub fn convert_value(input: &serde_json::Value, options: &ConversionOptions) -> Result<Document> {
    let (nodes, metadata) = parse_input(input)?;
    Ok(convert_nodes(&nodes, &metadata, options))
}

pub fn render_document(document: &Document, schema: OutputSchema) -> serde_json::Value {
    assembler_for(schema).assemble(document)
}

/// Parse JSON text with no nesting limit
pub fn parse_json(source: &str) -> Result<serde_json::Value> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    deserializer.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Convert JSON text into a rendered document
pub fn convert_str(
    source: &str,
    options: &ConversionOptions,
) -> Result<(serde_json::Value, ConversionStats)> {
    let input = parse_json(source)?;
    let document = convert_value(&input, options)?;
    let stats = ConversionStats::from_document(&document);
    Ok((render_document(&document, options.schema), stats))
}

pub fn to_json_string(value: &serde_json::Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Read a design file, convert it and write the rendered document
pub fn convert_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<ConversionStats> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let start_time = Instant::now();

    log::info!(
        "Converting '{}' to '{}' ({} schema)",
        input_path.display(),
        output_path.display(),
        options.schema
    );

    let source = fs::read_to_string(input_path).map_err(|e| ConvertError::FileNotFound {
        path: format!("{}: {}", input_path.display(), e),
    })?;

    let (rendered, mut stats) = convert_str(&source, options)?;
    let text = to_json_string(&rendered, options.pretty)?;
    fs::write(output_path, &text)?;

    stats.output_size = text.len() as u64;
    stats.convert_time_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Converted {} nodes (max depth {}, {} style props) in {}ms",
        stats.node_count,
        stats.max_depth,
        stats.style_count,
        stats.convert_time_ms
    );
    log::debug!("Full stats: {:?}", stats);

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn deterministic() -> ConversionOptions {
        ConversionOptions {
            id_strategy: IdStrategy::Deterministic,
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_heading() {
        let input = json!([{
            "id": "1:2",
            "type": "TEXT",
            "name": "Title",
            "content": "Hello",
            "styles": {"fontSize": 32, "fontWeight": 700}
        }]);
        let document = convert_value(&input, &ConversionOptions::default()).unwrap();

        assert_eq!(document.content.len(), 1);
        let widget = &document.content[0];
        assert_eq!(widget.kind, ElementKind::Heading);
        assert_eq!(widget.setting("level"), Some(&TypedValue::string("h1")));
        assert_eq!(widget.setting("title"), Some(&TypedValue::string("Hello")));
        assert_eq!(
            widget.style_prop("font-size"),
            Some(&TypedValue::Size(Size::px(32.0)))
        );

        let rendered = render_document(&document, OutputSchema::Atomic);
        let element = &rendered["content"][0];
        assert_eq!(element["widgetType"], "e-heading");
        assert_eq!(element["settings"]["title"]["value"], "Hello");
        assert!(!element["id"].as_str().unwrap().contains(':'));
    }

    #[test]
    fn test_empty_and_unstyled_input_converts() {
        let document = convert_value(&json!([]), &ConversionOptions::default()).unwrap();
        assert!(document.content.is_empty());
        assert_eq!(document.title, DEFAULT_TITLE);

        let input = json!([{"id": "1", "type": "FRAME", "children": [
            {"id": "2", "type": "FRAME", "children": [
                {"id": "3", "type": "FRAME", "children": [{"id": "4", "type": "TEXT"}]}
            ]}
        ]}]);
        let document = convert_value(&input, &ConversionOptions::default()).unwrap();
        let stats = ConversionStats::from_document(&document);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.widget_counts["container"], 3);
        assert_eq!(stats.widget_counts["paragraph"], 1);
    }

    #[test]
    fn test_structural_errors_abort() {
        let err = convert_value(&json!({"foo": 1}), &ConversionOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidInput { .. }));

        let err = convert_value(&json!([{"id": "1"}]), &ConversionOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingField { .. }));

        let err = convert_str("[{", &ConversionOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Json(_)));
    }

    #[test]
    fn test_repeated_runs_have_identical_shape() {
        let input = json!({"name": "Landing", "blocks": [
            {"id": "1:1", "type": "FRAME", "name": "Hero", "styles": {"padding": "32px 20px"}, "children": [
                {"id": "1:2", "type": "TEXT", "content": "Welcome", "styles": {"fontSize": 40}},
                {"id": "1:3", "type": "INSTANCE", "name": "CTA"}
            ]}
        ]});
        let first = convert_value(&input, &ConversionOptions::default()).unwrap();
        let second = convert_value(&input, &ConversionOptions::default()).unwrap();

        let mut shape_a = Vec::new();
        first.walk(&mut |w, depth| shape_a.push((w.kind, depth, w.style_props().cloned())));
        let mut shape_b = Vec::new();
        second.walk(&mut |w, depth| shape_b.push((w.kind, depth, w.style_props().cloned())));
        assert_eq!(shape_a, shape_b);
        assert_eq!(first.title, "Landing");
    }

    #[test]
    fn test_deterministic_ids_are_byte_identical() {
        let source = r#"[{"id": "7:1", "type": "FRAME", "children": [{"id": "7:2", "type": "TEXT", "content": "x"}]}]"#;
        let (a, _) = convert_str(source, &deterministic()).unwrap();
        let (b, _) = convert_str(source, &deterministic()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deeply_nested_text_converts() {
        let depth = 120;
        let mut source = String::from(r#"{"id": "leaf", "type": "TEXT", "content": "deep"}"#);
        for level in (0..depth).rev() {
            source = format!(
                r#"{{"id": "{}:0", "type": "FRAME", "children": [{}]}}"#,
                level, source
            );
        }
        let source = format!("[{}]", source);

        let (rendered, stats) = convert_str(&source, &deterministic()).unwrap();
        assert_eq!(stats.node_count, depth + 1);
        assert_eq!(stats.max_depth, depth + 1);
        assert_eq!(rendered["content"][0]["elType"], "e-flexbox");
    }

    #[test]
    fn test_parse_json_rejects_trailing_data() {
        assert!(parse_json("[] []").is_err());
        assert_eq!(parse_json(" [1] ").unwrap(), json!([1]));
    }

    #[test]
    fn test_class_prefix_is_sanitized() {
        let options = ConversionOptions {
            class_prefix: "e:".to_string(),
            ..deterministic()
        };
        let input = json!([{"id": "1:1", "type": "FRAME", "children": [{"id": "1:2", "type": "TEXT"}]}]);
        let document = convert_value(&input, &options).unwrap();

        let mut class_ids = Vec::new();
        document.walk(&mut |w, _| class_ids.extend(w.style_block.keys().cloned()));
        assert_eq!(class_ids.len(), 2);
        assert!(class_ids.iter().all(|id| id.starts_with("e11") || id.starts_with("e12")));
        assert!(class_ids.iter().all(|id| !id.contains(':')));
    }

    #[test]
    fn test_title_override() {
        let options = ConversionOptions {
            title: Some("Override".to_string()),
            ..Default::default()
        };
        let input = json!({"nodes": [], "metadata": {"name": "From input"}});
        assert_eq!(convert_value(&input, &options).unwrap().title, "Override");
        let document = convert_value(&input, &ConversionOptions::default()).unwrap();
        assert_eq!(document.title, "From input");
    }

    #[test]
    fn test_convert_file_legacy() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("design.json");
        let output_path = temp_dir.path().join("page.json");
        fs::write(
            &input_path,
            r#"[{"id": "1", "type": "FRAME", "children": [
                {"id": "2", "type": "TEXT", "name": "Heading", "content": "Hi"},
                {"id": "3", "type": "TEXT", "content": "Body", "styles": {"fontSize": 14}}
            ]}]"#,
        )
        .unwrap();

        let options = ConversionOptions {
            schema: OutputSchema::Legacy,
            pretty: false,
            ..Default::default()
        };
        let stats = convert_file(&input_path, &output_path, &options).unwrap();
        assert_eq!(stats.node_count, 3);

        let written = fs::read_to_string(&output_path).unwrap();
        assert_eq!(stats.output_size, written.len() as u64);
        assert!(!written.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        let widgets = &value["content"][0]["elements"][0]["elements"];
        assert_eq!(widgets[0]["widgetType"], "div-block");
        assert_eq!(widgets[1]["widgetType"], "heading");
        assert_eq!(widgets[2]["widgetType"], "paragraph");
        assert_eq!(widgets[2]["settings"]["text"], "Body");
    }

    #[test]
    fn test_convert_file_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let err = convert_file(
            temp_dir.path().join("nope.json"),
            temp_dir.path().join("out.json"),
            &ConversionOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound { .. }));
    }
}
