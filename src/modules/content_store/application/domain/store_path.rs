use serde_json::{Map, Value};
use std::fmt;

/// Slash-separated location inside the content store (`portfolio/experiences`,
/// `articles/<id>`). The first segment selects the root document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorePath {
    segments: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorePathError {
    #[error("Path cannot be empty")]
    Empty,

    #[error("Path segment '{0}' contains a forbidden character")]
    ForbiddenCharacter(String),

    #[error("Cannot write '{0}' below a value that is not an object")]
    NotAnObject(String),
}

const FORBIDDEN: &[char] = &['.', '#', '$', '[', ']'];

impl StorePath {
    pub fn parse(raw: &str) -> Result<Self, StorePathError> {
        let segments: Vec<String> = raw
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(StorePathError::Empty);
        }

        if let Some(bad) = segments.iter().find(|s| s.contains(FORBIDDEN)) {
            return Err(StorePathError::ForbiddenCharacter(bad.clone()));
        }

        Ok(Self { segments })
    }

    pub fn child(&self, segment: &str) -> Result<Self, StorePathError> {
        let mut joined = self.to_string();
        joined.push('/');
        joined.push_str(segment);
        Self::parse(&joined)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// Segments below the root document.
    pub fn rest(&self) -> &[String] {
        &self.segments[1..]
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn last(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

// ──────────────────────────────────────────────────────────
// Tree operations on a root document
// ──────────────────────────────────────────────────────────

pub fn read_at<'a>(tree: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut node = tree;
    for seg in segments {
        node = node.as_object()?.get(seg)?;
    }
    if node.is_null() {
        None
    } else {
        Some(node)
    }
}

/// Replaces the subtree at `segments`, creating intermediate objects.
/// Writing `null` removes the key. Existing scalars or arrays on the way are left
/// untouched and reported as `NotAnObject`.
pub fn write_at(tree: &mut Value, segments: &[String], value: Value) -> Result<(), StorePathError> {
    let Some((last, parents)) = segments.split_last() else {
        *tree = value;
        return Ok(());
    };

    if value.is_null() {
        remove_at(tree, segments);
        return Ok(());
    }

    check_containers(tree, segments, parents.len())?;

    let mut node = tree;
    for seg in parents {
        node = ensure_object(node)
            .entry(seg.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(last.clone(), value);
    Ok(())
}

/// Shallow merge: each top-level key of `fields` replaces the same key at `segments`.
pub fn merge_at(
    tree: &mut Value,
    segments: &[String],
    fields: Map<String, Value>,
) -> Result<(), StorePathError> {
    check_containers(tree, segments, segments.len())?;

    let mut node = tree;
    for seg in segments {
        node = ensure_object(node)
            .entry(seg.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let target = ensure_object(node);
    for (key, value) in fields {
        if value.is_null() {
            target.remove(&key);
        } else {
            target.insert(key, value);
        }
    }
    Ok(())
}

/// Returns whether something was removed.
pub fn remove_at(tree: &mut Value, segments: &[String]) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        let existed = !tree.is_null();
        *tree = Value::Null;
        return existed;
    };

    let mut node = tree;
    for seg in parents {
        match node.as_object_mut().and_then(|o| o.get_mut(seg)) {
            Some(next) => node = next,
            None => return false,
        }
    }

    node.as_object_mut()
        .map(|o| o.remove(last).is_some())
        .unwrap_or(false)
}

/// Every existing node from the tree root down to `segments[..depth]` must be
/// an object or null, so a write can descend through it.
fn check_containers(tree: &Value, segments: &[String], depth: usize) -> Result<(), StorePathError> {
    let mut node = tree;
    for i in 0..=depth {
        let map = match node {
            Value::Null => return Ok(()),
            Value::Object(map) => map,
            _ => {
                let blocked = if i == 0 { "/".to_string() } else { segments[..i].join("/") };
                return Err(StorePathError::NotAnObject(blocked));
            }
        };
        if i == depth {
            break;
        }
        match map.get(&segments[i]) {
            Some(next) => node = next,
            None => return Ok(()),
        }
    }
    Ok(())
}

/// Turns a null node into an empty object; callers run `check_containers` first.
fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just made an object"),
    }
}

/// Ids handed out by `push`: time-ordered prefix plus random suffix.
pub fn new_push_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{:012x}{}", millis, &random[..12])
}
