//! Configuration document tree and loader
//!
//! Parses a YAML file into an untyped [`ConfigNode`] tree. The tree is built
//! once per input file, is immutable after load, and is traversed tolerantly:
//! every accessor returns an `Option`, so an absent key or a type mismatch is
//! an ordinary value, never a panic.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// A parsed configuration value.
///
/// Mappings preserve document key order so that diagnostics come out in
/// traversal order on every run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<ConfigNode>),
    Mapping(Vec<(String, ConfigNode)>),
}

impl ConfigNode {
    /// Look up a key in a mapping node. Returns `None` for absent keys and
    /// for non-mapping nodes.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Mapping(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigNode]> {
        match self {
            ConfigNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, ConfigNode)]> {
        match self {
            ConfigNode::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigNode::Null)
    }

    /// Whether the node carries no content: null, or an empty string,
    /// sequence, or mapping.
    pub fn is_empty(&self) -> bool {
        match self {
            ConfigNode::Null => true,
            ConfigNode::String(s) => s.is_empty(),
            ConfigNode::Sequence(items) => items.is_empty(),
            ConfigNode::Mapping(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// YAML-flavored type name, for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigNode::Null => "null",
            ConfigNode::Bool(_) => "boolean",
            ConfigNode::Number(_) => "number",
            ConfigNode::String(_) => "string",
            ConfigNode::Sequence(_) => "sequence",
            ConfigNode::Mapping(_) => "mapping",
        }
    }

    /// Render a node for use inside a diagnostic message. Scalars render as
    /// their YAML form; containers render as their type name.
    pub fn render(&self) -> String {
        match self {
            ConfigNode::Null => "null".to_string(),
            ConfigNode::Bool(b) => b.to_string(),
            ConfigNode::Number(n) => n.to_string(),
            ConfigNode::String(s) => s.clone(),
            ConfigNode::Sequence(_) | ConfigNode::Mapping(_) => {
                format!("<{}>", self.type_name())
            }
        }
    }
}

impl From<serde_yaml::Value> for ConfigNode {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ConfigNode::Null,
            serde_yaml::Value::Bool(b) => ConfigNode::Bool(b),
            serde_yaml::Value::Number(n) => ConfigNode::Number(n.as_f64().unwrap_or_default()),
            serde_yaml::Value::String(s) => ConfigNode::String(s),
            serde_yaml::Value::Sequence(items) => {
                ConfigNode::Sequence(items.into_iter().map(ConfigNode::from).collect())
            }
            serde_yaml::Value::Mapping(entries) => ConfigNode::Mapping(
                entries
                    .into_iter()
                    .filter_map(|(key, value)| {
                        mapping_key(key).map(|key| (key, ConfigNode::from(value)))
                    })
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => ConfigNode::from(tagged.value),
        }
    }
}

/// Mapping keys are expected to be strings; scalar keys are stringified and
/// container keys are dropped.
fn mapping_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a file and parse exactly one YAML document into a [`ConfigNode`]
/// tree, classifying terminal load failures.
pub fn load_document(path: &Path) -> Result<ConfigNode, LoadError> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    })?;

    let value: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let node = ConfigNode::from(value);
    if node.is_empty() {
        return Err(LoadError::EmptyConfig {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loaded configuration document");
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ConfigNode {
        ConfigNode::from(serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap())
    }

    #[test]
    fn test_get_on_mapping() {
        let node = parse("name: test\nvalue: 42");
        assert_eq!(node.get("name").and_then(ConfigNode::as_str), Some("test"));
        assert!(node.get("missing").is_none());
    }

    #[test]
    fn test_get_on_non_mapping_is_none() {
        let node = parse("- a\n- b");
        assert!(node.get("anything").is_none());
    }

    #[test]
    fn test_mapping_preserves_document_order() {
        let node = parse("zebra: 1\nalpha: 2\nmike: 3");
        let keys: Vec<&str> = node
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mike"]);
    }

    #[test]
    fn test_nested_traversal() {
        let node = parse("app:\n  branding:\n    fullLogo: /logo.svg");
        let logo = node
            .get("app")
            .and_then(|app| app.get("branding"))
            .and_then(|branding| branding.get("fullLogo"))
            .and_then(ConfigNode::as_str);
        assert_eq!(logo, Some("/logo.svg"));
    }

    #[test]
    fn test_is_empty() {
        assert!(parse("null").is_empty());
        assert!(parse("{}").is_empty());
        assert!(parse("[]").is_empty());
        assert!(!parse("key: value").is_empty());
        assert!(!parse("false").is_empty());
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(parse("42").render(), "42");
        assert_eq!(parse("1.5").render(), "1.5");
        assert_eq!(parse("true").render(), "true");
        assert_eq!(parse("null").render(), "null");
        assert_eq!(parse("hello").render(), "hello");
        assert_eq!(parse("[1, 2]").render(), "<sequence>");
    }

    #[test]
    fn test_numeric_mapping_keys_are_stringified() {
        let node = parse("404: not-found");
        assert_eq!(
            node.get("404").and_then(ConfigNode::as_str),
            Some("not-found")
        );
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_document_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "key: [unclosed").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_load_document_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::EmptyConfig { .. }));
    }

    #[test]
    fn test_load_document_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "dynamicPlugins:\n  frontend: {}\n").unwrap();
        let node = load_document(&path).unwrap();
        assert!(node.get("dynamicPlugins").is_some());
    }
}
