//! Structural validation of loosely-typed input into source nodes

use crate::error::{ConvertError, Result};
use crate::types::{DesignMetadata, NodeType, SourceNode, StyleBag};
use serde_json::Value;

/// Parse any accepted top-level input shape.
///
/// Accepted shapes are a bare list of nodes, `{ "nodes": [...], "metadata": { "name": ... } }`
/// and `{ "blocks": [...], "name": ... }`. Anything else is rejected as a whole.
pub fn parse_input(input: &Value) -> Result<(Vec<SourceNode>, DesignMetadata)> {
    match input {
        Value::Array(items) => Ok((parse_node_list(items, "")?, DesignMetadata::default())),
        Value::Object(map) => {
            let (list, name) = if let Some(nodes) = map.get("nodes") {
                let name = map
                    .get("metadata")
                    .and_then(|m| m.get("name"))
                    .and_then(Value::as_str);
                (nodes, name)
            } else if let Some(blocks) = map.get("blocks") {
                (blocks, map.get("name").and_then(Value::as_str))
            } else {
                return Err(ConvertError::invalid_input(
                    "expected a list of nodes or an object with 'nodes' or 'blocks'",
                ));
            };

            let items = list.as_array().ok_or_else(|| {
                ConvertError::invalid_input("node collection must be a list")
            })?;

            let metadata = DesignMetadata {
                name: name.map(str::to_string),
            };
            Ok((parse_node_list(items, "")?, metadata))
        }
        other => Err(ConvertError::invalid_input(format!(
            "expected a list of nodes, found {}",
            json_kind(other)
        ))),
    }
}

/// Parse a bare node list
pub fn parse_nodes(input: &Value) -> Result<Vec<SourceNode>> {
    let items = input.as_array().ok_or_else(|| {
        ConvertError::invalid_input(format!(
            "expected a list of nodes, found {}",
            json_kind(input)
        ))
    })?;
    parse_node_list(items, "")
}

fn parse_node_list(items: &[Value], parent_path: &str) -> Result<Vec<SourceNode>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path = if parent_path.is_empty() {
                format!("[{}]", index)
            } else {
                format!("{}.children[{}]", parent_path, index)
            };
            parse_node(item, &path)
        })
        .collect()
}

fn parse_node(item: &Value, path: &str) -> Result<SourceNode> {
    let map = item
        .as_object()
        .ok_or_else(|| ConvertError::missing_field(path, "type"))?;

    let node_type = map
        .get("type")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .map(NodeType::from_name)
        .ok_or_else(|| ConvertError::missing_field(path, "type"))?;

    let id = match map.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let content = ["content", "characters", "text"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_string);

    let mut styles = match map.get("styles") {
        Some(Value::Object(bag)) => bag.clone(),
        None | Some(Value::Null) => StyleBag::new(),
        Some(other) => {
            log::warn!(
                "{}: ignoring non-object styles ({})",
                path,
                json_kind(other)
            );
            StyleBag::new()
        }
    };

    for key in ["width", "height"] {
        if let Some(value) = map.get(key).filter(|v| v.is_number()) {
            styles.entry(key.to_string()).or_insert_with(|| value.clone());
        }
    }

    let children = match map.get("children") {
        Some(Value::Array(items)) => parse_node_list(items, path)?,
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            log::warn!(
                "{}: ignoring non-list children ({})",
                path,
                json_kind(other)
            );
            Vec::new()
        }
    };

    Ok(SourceNode {
        id,
        name,
        node_type,
        content,
        styles,
        children,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
