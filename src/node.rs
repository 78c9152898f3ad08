use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::error::I18nError;

/// One entry of a translation tree.
///
/// # Examples
///
/// Leaf:
/// ```json
/// "title": "Generate Image"
/// ```
///
/// Branch:
/// ```json
/// "generate": {
///   "title": "Generate Image",
///   "submit": "Generate"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A translated string, possibly containing `${name}` placeholders
    Leaf(String),
    /// A nested level of keys
    Branch(BTreeMap<String, Node>),
}

impl Node {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(text) => Some(text),
            Node::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(children) => Some(children),
        }
    }
}

/// The full nested text tree for one locale.
///
/// Immutable once built; the root is always a set of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBundle {
    root: BTreeMap<String, Node>,
}

impl LocaleBundle {
    pub fn new(root: BTreeMap<String, Node>) -> Self {
        Self { root }
    }

    /// Builds a bundle from a parsed JSON document.
    ///
    /// Strings become leaves and objects become branches. Any other value
    /// (numbers, booleans, null, arrays) is skipped, so looking it up later
    /// behaves like a missing key.
    pub fn from_json_value(locale: &str, value: Value) -> Result<Self, I18nError> {
        let Value::Object(obj) = value else {
            return Err(I18nError::InvalidBundle {
                locale: locale.to_string(),
                reason: "top-level value must be an object".to_string(),
            });
        };

        let mut root = BTreeMap::new();
        convert_object(locale, "", obj, &mut root);
        Ok(Self { root })
    }

    pub fn from_json_str(locale: &str, src: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(src)?;
        Self::from_json_value(locale, value)
    }

    pub fn root(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Dotted paths of every string leaf, in key order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaf_paths(&self.root, "", &mut out);
        out
    }
}

fn convert_object(
    locale: &str,
    prefix: &str,
    obj: serde_json::Map<String, Value>,
    out: &mut BTreeMap<String, Node>
) {
    for (key, value) in obj {
        let path = join_path(prefix, &key);
        let node = match value {
            Value::String(text) => Node::Leaf(text),
            Value::Object(nested) => {
                let mut children = BTreeMap::new();
                convert_object(locale, &path, nested, &mut children);
                Node::Branch(children)
            }
            other => {
                warn!(locale, key = %path, kind = json_kind(&other), "skipping non-string translation value");
                continue;
            }
        };
        out.insert(key, node);
    }
}

fn collect_leaf_paths(level: &BTreeMap<String, Node>, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in level {
        let path = join_path(prefix, key);
        match node {
            Node::Leaf(_) => out.push(path),
            Node::Branch(children) => collect_leaf_paths(children, &path, out),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() { key.to_string() } else { format!("{prefix}.{key}") }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn strings_and_objects_convert() {
        let bundle = LocaleBundle::from_json_value(
            "en",
            json!({ "generate": { "title": "Create" }, "close": "Close" })
        ).unwrap();

        assert_eq!(bundle.root().get("close"), Some(&Node::Leaf("Close".to_string())));
        let generate = bundle.root().get("generate").and_then(Node::as_branch).unwrap();
        assert_eq!(generate.get("title").and_then(Node::as_leaf), Some("Create"));
    }

    #[test]
    fn non_string_scalars_are_skipped() {
        let bundle = LocaleBundle::from_json_value(
            "en",
            json!({ "count": 3, "flag": true, "none": null, "list": ["a"], "ok": "yes" })
        ).unwrap();

        assert_eq!(bundle.leaf_paths(), vec!["ok".to_string()]);
    }

    #[test]
    fn top_level_must_be_object() {
        let err = LocaleBundle::from_json_value("zh", json!("just text")).unwrap_err();
        assert!(matches!(err, I18nError::InvalidBundle { ref locale, .. } if locale == "zh"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LocaleBundle::from_json_str("en", "{ not json").unwrap_err();
        assert!(matches!(err, I18nError::Json(_)));
    }

    #[test]
    fn emptiness() {
        assert!(LocaleBundle::default().is_empty());
        assert!(LocaleBundle::from_json_str("en", "{}").unwrap().is_empty());
        // skipped values leave nothing behind
        assert!(LocaleBundle::from_json_str("en", r#"{ "n": 1 }"#).unwrap().is_empty());
        assert!(!LocaleBundle::from_json_str("en", r#"{ "a": "b" }"#).unwrap().is_empty());
    }

    #[test]
    fn leaf_paths_are_dotted() {
        let bundle = LocaleBundle::from_json_str(
            "en",
            r#"{ "history": { "title": "History", "cost": { "total": "Total" } }, "mode": { "edit": "Edit" } }"#
        ).unwrap();

        assert_eq!(bundle.leaf_paths(), vec![
            "history.cost.total".to_string(),
            "history.title".to_string(),
            "mode.edit".to_string(),
        ]);
    }
}
