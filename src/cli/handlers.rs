use super::{required, Cli};
use crate::classify::{classify, Classification};
use crate::error::{ConvertError, Result};
use crate::normalizer::StyleNormalizer;
use crate::types::SourceNode;
use crate::{
    convert_file, convert_nodes, convert_str, parse_input, parse_json, to_json_string,
    ConversionStats,
};
use std::fs;
use std::path::Path;
use std::time::Instant;

// --- CONVERT ---
pub fn handle_convert_command(cli: &Cli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required(matches, "input")?;
    let options = cli.build_options(matches)?;

    let stats = match matches.get_one::<String>("output") {
        Some(output_path) => {
            println!("🔨 Converting {} -> {}", input_path, output_path);
            let convert_start = Instant::now();
            let stats = convert_file(input_path, output_path, &options)?;
            println!("✅ Conversion successful!");
            println!("   Widgets: {}", stats.node_count);
            println!("   Output: {} bytes", stats.output_size);
            println!("   Time: {}ms", convert_start.elapsed().as_millis());
            stats
        }
        None => {
            let source = read_input(input_path)?;
            let (rendered, stats) = convert_str(&source, &options)?;
            println!("{}", to_json_string(&rendered, options.pretty)?);
            stats
        }
    };

    if matches.get_flag("stats") {
        // stdout may be carrying the document itself
        eprintln!("{}", format_stats(&stats));
        log::debug!("Total run time: {}ms", cli.elapsed_ms());
    }
    Ok(())
}

fn read_input(input_path: &str) -> Result<String> {
    fs::read_to_string(input_path).map_err(|e| ConvertError::FileNotFound {
        path: format!("{}: {}", input_path, e),
    })
}

fn format_stats(stats: &ConversionStats) -> String {
    let mut lines = vec![
        "📊 Conversion Statistics:".to_string(),
        format!("   Widgets: {}", stats.node_count),
        format!("   Max depth: {}", stats.max_depth),
        format!("   Style props: {}", stats.style_count),
    ];
    for (kind, count) in &stats.widget_counts {
        lines.push(format!("   {:<10} {}", kind, count));
    }
    lines.join("\n")
}

// --- CHECK ---
pub fn handle_check_command(matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required(matches, "input")?;
    let recursive = matches.get_flag("recursive");

    if recursive && Path::new(input_path).is_dir() {
        check_directory_recursive(input_path)
    } else {
        check_single_file(input_path).map(|_| ())
    }
}

/// Structural validation only; returns the number of nodes found
fn check_single_file(input_path: &str) -> Result<usize> {
    println!("🔍 Checking {}", input_path);
    let result = read_input(input_path)
        .and_then(|source| parse_json(&source))
        .and_then(|value| parse_input(&value));

    match result {
        Ok((nodes, _)) => {
            let count = nodes.iter().map(count_nodes).sum();
            println!("✅ {} - {} nodes, no issues found", input_path, count);
            Ok(count)
        }
        Err(e) => {
            println!("❌ {} - {}", input_path, e);
            Err(e)
        }
    }
}

fn count_nodes(node: &SourceNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

fn check_directory_recursive(dir_path: &str) -> Result<()> {
    let mut total_files = 0;
    let mut error_files = 0;

    for entry in walkdir::WalkDir::new(dir_path) {
        let entry = entry.map_err(|e| {
            ConvertError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Directory traversal error: {}", e),
            ))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().map_or(false, |ext| ext == "json") {
            total_files += 1;
            let path = entry.path().to_string_lossy();
            if check_single_file(&path).is_err() {
                error_files += 1;
            }
        }
    }

    println!("\n📊 Check Summary:");
    println!("   Total files: {}", total_files);
    println!("   Files with errors: {}", error_files);
    if total_files > 0 {
        println!(
            "   Success rate: {:.1}%",
            (total_files - error_files) as f64 / total_files as f64 * 100.0
        );
    }

    if error_files > 0 {
        Err(ConvertError::invalid_input(format!(
            "{} files have errors",
            error_files
        )))
    } else {
        Ok(())
    }
}

// --- INSPECT ---
pub fn handle_inspect_command(cli: &Cli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required(matches, "input")?;
    let options = cli.build_options(matches)?;

    let source = read_input(input_path)?;
    let value = parse_json(&source)?;
    let (nodes, metadata) = parse_input(&value)?;

    println!("🔬 Inspecting {}", input_path);
    let normalizer = StyleNormalizer::new();
    let mut lines = Vec::new();
    for node in &nodes {
        classification_tree(node, &normalizer, 0, &mut lines);
    }
    for line in &lines {
        println!("{}", line);
    }

    let document = convert_nodes(&nodes, &metadata, &options);
    println!("\nTitle: {}", document.title);
    println!("{}", format_stats(&ConversionStats::from_document(&document)));
    Ok(())
}

fn classification_tree(
    node: &SourceNode,
    normalizer: &StyleNormalizer,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let classification = classify(node, normalizer);
    let label = match classification {
        Classification::Heading(level) => format!("heading {}", level),
        other => other.to_string(),
    };
    let name = if node.name.is_empty() { &node.id } else { &node.name };
    lines.push(format!(
        "{}{} [{}] {}",
        "  ".repeat(depth),
        label,
        node.node_type,
        name
    ));
    for child in &node.children {
        classification_tree(child, normalizer, depth + 1, lines);
    }
}
