//! Nested, case-insensitive registry of deployed contract data.
//!
//! Deployment steps write paths such as `Contracts.Comptroller` or
//! `Tokens.XVS.address`; scenario lookups read them back with any casing and
//! surrounding whitespace on either the stored keys or the requested segments.

use crate::error::{Found, LookupError, LookupResult};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolNode {
    Leaf(String),
    Node(SymbolMap),
}

impl SymbolNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            SymbolNode::Leaf(value) => Some(value.as_str()),
            SymbolNode::Node(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&SymbolMap> {
        match self {
            SymbolNode::Leaf(_) => None,
            SymbolNode::Node(map) => Some(map),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(SymbolNode::Leaf(s.clone())),
            Value::Number(n) => Some(SymbolNode::Leaf(n.to_string())),
            Value::Bool(b) => Some(SymbolNode::Leaf(b.to_string())),
            Value::Object(entries) => {
                let mut map = SymbolMap::default();
                for (key, child) in entries {
                    match SymbolNode::from_json(child) {
                        Some(node) => map.entries.push((key.clone(), node)),
                        None => tracing::debug!(
                            "[LOOKUP] dropping non-scalar contract data entry `{}`",
                            key
                        ),
                    }
                }
                Some(SymbolNode::Node(map))
            }
            Value::Null | Value::Array(_) => None,
        }
    }
}

impl From<&str> for SymbolNode {
    fn from(value: &str) -> Self {
        SymbolNode::Leaf(value.to_string())
    }
}

impl From<String> for SymbolNode {
    fn from(value: String) -> Self {
        SymbolNode::Leaf(value)
    }
}

impl From<SymbolMap> for SymbolNode {
    fn from(value: SymbolMap) -> Self {
        SymbolNode::Node(value)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Insertion-ordered map whose keys compare trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    entries: Vec<(String, SymbolNode)>,
}

impl SymbolMap {
    /// First entry whose key matches `key` case-insensitively.
    pub fn get(&self, key: &str) -> Option<&SymbolNode> {
        let wanted = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| normalize_key(k) == wanted)
            .map(|(_, node)| node)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut SymbolNode> {
        let wanted = normalize_key(key);
        self.entries
            .iter_mut()
            .find(|(k, _)| normalize_key(k) == wanted)
            .map(|(_, node)| node)
    }

    /// Replaces the value of an existing key (matched case-insensitively,
    /// stored spelling kept) or appends a new entry.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<SymbolNode>) {
        let key = key.into();
        let node = node.into();
        match self.get_mut(&key) {
            Some(slot) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders candidate paths for diagnostics, e.g. `[["Contracts","Foo"]]`.
pub fn render_paths<S: AsRef<str>>(candidates: &[Vec<S>]) -> String {
    let owned: Vec<Vec<&str>> = candidates
        .iter()
        .map(|path| path.iter().map(|seg| seg.as_ref()).collect())
        .collect();
    serde_json::to_string(&owned).unwrap_or_else(|_| format!("{owned:?}"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    root: SymbolMap,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a deployment document. Objects become nested maps,
    /// strings, numbers and booleans become leaves; nulls and arrays are dropped.
    /// Keys differing only in case are all kept in document order, so the
    /// first one wins on lookup.
    pub fn from_json(value: &Value) -> Self {
        match SymbolNode::from_json(value) {
            Some(SymbolNode::Node(root)) => Self { root },
            _ => {
                tracing::warn!("[LOOKUP] contract data document is not an object; starting empty");
                Self::default()
            }
        }
    }

    pub fn root(&self) -> &SymbolMap {
        &self.root
    }

    pub fn top_level_keys(&self) -> Vec<String> {
        self.root.keys().map(str::to_string).collect()
    }

    /// Writes `value` at `path`, creating intermediate maps. A leaf sitting where
    /// an intermediate map is needed gets replaced.
    pub fn set_path<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<SymbolNode>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut map = &mut self.root;
        for seg in parents {
            let seg = seg.as_ref();
            if !matches!(map.get(seg), Some(SymbolNode::Node(_))) {
                map.insert(seg, SymbolMap::default());
            }
            map = match map.get_mut(seg) {
                Some(SymbolNode::Node(child)) => child,
                _ => return,
            };
        }
        map.insert(last.as_ref(), value);
    }

    /// Walks a single candidate path. Reaching a leaf before the path is
    /// exhausted ends the walk on that leaf.
    pub fn walk<S: AsRef<str>>(&self, path: &[S]) -> Option<&SymbolNode> {
        let mut map = &self.root;
        let mut found = None;
        for seg in path {
            let child = map.get(seg.as_ref())?;
            match child {
                SymbolNode::Leaf(_) => return Some(child),
                SymbolNode::Node(next) => {
                    map = next;
                    found = Some(child);
                }
            }
        }
        found
    }

    /// First non-empty leaf over the candidates, tried in order. Nested maps and
    /// empty leaves count as misses.
    pub fn first_leaf<S: AsRef<str>>(&self, candidates: &[Vec<S>]) -> Option<&str> {
        self.first_leaf_or_miss(candidates).ok()
    }

    fn first_leaf_or_miss<S: AsRef<str>>(&self, candidates: &[Vec<S>]) -> Result<&str, Found> {
        let mut last_miss = Found::Nothing;
        for path in candidates {
            match self.walk(path) {
                Some(SymbolNode::Leaf(value)) if !value.is_empty() => return Ok(value.as_str()),
                Some(SymbolNode::Leaf(_)) => last_miss = Found::EmptyLeaf,
                Some(SymbolNode::Node(_)) => last_miss = Found::NestedMap,
                None => last_miss = Found::Nothing,
            }
            tracing::debug!(
                "[LOOKUP] candidate {} missed ({})",
                render_paths(std::slice::from_ref(path)),
                last_miss
            );
        }
        Err(last_miss)
    }

    /// String-required lookup: fails with the attempted paths and the
    /// table's top-level keys.
    pub fn require_string<S: AsRef<str>>(&self, candidates: &[Vec<S>]) -> LookupResult<&str> {
        match self.first_leaf_or_miss(candidates) {
            Ok(value) => Ok(value),
            Err(found) => {
                let paths = render_paths(candidates);
                tracing::warn!("[LOOKUP] no string value for {}", paths);
                Err(LookupError::ResolutionNotFound {
                    paths,
                    found,
                    available: self.top_level_keys(),
                })
            }
        }
    }

    /// Nested map at `path`, if any. Used for informational metadata where a
    /// miss is not an error.
    pub fn node_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&SymbolMap> {
        self.walk(path).and_then(SymbolNode::as_map)
    }
}
