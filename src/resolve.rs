use crate::node::{ LocaleBundle, Node };

/// Walks a dotted key path through `bundle` and returns the string leaf it names.
///
/// Returns `None` when a segment is missing, when a leaf is reached before
/// the path is exhausted, or when the path ends on a branch.
pub fn lookup<'a>(bundle: &'a LocaleBundle, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    // `split` always yields at least one segment
    let first = segments.next()?;
    let mut node = bundle.root().get(first)?;

    for segment in segments {
        node = match node {
            Node::Branch(children) => children.get(segment)?,
            Node::Leaf(_) => return None,
        };
    }

    node.as_leaf()
}

/// Resolves `path` in `bundle`, echoing the path itself when it cannot be resolved.
///
/// An empty leaf counts as unresolved.
///
/// # Example
///
/// ```rust
/// use genpanel_intl::{ LocaleBundle, resolve };
///
/// let bundle = LocaleBundle::from_json_str("en", r#"{ "generate": { "title": "Create" } }"#).unwrap();
/// assert_eq!(resolve(&bundle, "generate.title"), "Create");
/// assert_eq!(resolve(&bundle, "generate.subtitle"), "generate.subtitle");
/// ```
pub fn resolve<'a>(bundle: &'a LocaleBundle, path: &'a str) -> &'a str {
    match lookup(bundle, path) {
        Some(text) if !text.is_empty() => text,
        _ => path,
    }
}
