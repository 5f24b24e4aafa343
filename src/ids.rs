//! Widget and style-class identifier generation

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CLASS_PREFIX: &str = "e-";
const SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How style-class suffixes are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Fresh random suffix on every conversion
    #[default]
    Random,
    /// Hash of node id and tree path; stable across runs
    Deterministic,
}

impl IdStrategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Some(Self::Random),
            "deterministic" | "stable" => Some(Self::Deterministic),
            _ => None,
        }
    }
}

/// Child-index path from the root list, e.g. `0.2.1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

/// Keep only characters the target schema accepts in identifiers
pub fn sanitize_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Stable short hash of a node's id and position
pub fn stable_suffix(node_id: &str, path: &NodePath) -> String {
    let digest = md5::compute(format!("{}@{}", node_id, path));
    let mut encoded = hex::encode(digest.0);
    encoded.truncate(SUFFIX_LEN);
    encoded
}

/// Per-conversion generator; owns its own RNG so calls never share state
pub struct IdGenerator {
    strategy: IdStrategy,
    prefix: String,
    rng: SmallRng,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy, prefix: impl Into<String>) -> Self {
        Self {
            strategy,
            prefix: sanitize_id(&prefix.into()),
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn with_seed(strategy: IdStrategy, prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            strategy,
            prefix: sanitize_id(&prefix.into()),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Sanitized node id, or a hash-derived id when nothing survives sanitizing
    pub fn widget_id(&self, node_id: &str, path: &NodePath) -> String {
        let sanitized = sanitize_id(node_id);
        if sanitized.is_empty() {
            format!("n{}", stable_suffix(node_id, path))
        } else {
            sanitized
        }
    }

    /// Prefix, widget id and a short suffix
    pub fn class_id(&mut self, widget_id: &str, node_id: &str, path: &NodePath) -> String {
        let suffix = match self.strategy {
            IdStrategy::Random => self.random_suffix(),
            IdStrategy::Deterministic => stable_suffix(node_id, path),
        };
        format!("{}{}-{}", self.prefix, widget_id, suffix)
    }

    fn random_suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| BASE36[self.rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}
