//! Traversal and update of YAML metadata along a field path.

use anyhow::anyhow;
use serde_yaml::{Mapping, Value};

use crate::bind::FieldPath;
use crate::error::Result;

/// Walk `root` along `path`.
///
/// A missing key, an index out of range or a scalar in the middle of the
/// path all yield `None`.
pub fn traverse<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Mapping(map) => map.get(segment),
        Value::Sequence(seq) => segment.parse::<usize>().ok().and_then(|i| seq.get(i)),
        _ => None,
    }
}

/// Write `value` at `path` inside `root`, creating mappings on the way.
///
/// A scalar (or null) in the way is replaced by a mapping. Writing into a
/// sequence requires an existing index.
pub fn write_path(root: &mut Value, path: &FieldPath, value: Value) -> Result<()> {
    let Some((last, parents)) = path.segments().split_last() else {
        *root = value;
        return Ok(());
    };

    let mut current = root;
    for segment in parents {
        current = child_mut(current, segment, path)?;
    }

    match current {
        Value::Sequence(seq) => {
            let slot = segment_index(last)
                .and_then(|i| seq.get_mut(i))
                .ok_or_else(|| anyhow!("index '{}' out of range in '{}'", last, path))?;
            *slot = value;
        }
        Value::Mapping(map) => {
            map.insert(Value::String(last.clone()), value);
        }
        other => {
            let mut map = Mapping::new();
            map.insert(Value::String(last.clone()), value);
            *other = Value::Mapping(map);
        }
    }
    Ok(())
}

fn child_mut<'a>(current: &'a mut Value, segment: &str, path: &FieldPath) -> Result<&'a mut Value> {
    if !matches!(current, Value::Mapping(_) | Value::Sequence(_)) {
        *current = Value::Mapping(Mapping::new());
    }
    match current {
        Value::Sequence(seq) => Ok(segment_index(segment)
            .and_then(|i| seq.get_mut(i))
            .ok_or_else(|| anyhow!("index '{}' out of range in '{}'", segment, path))?),
        Value::Mapping(map) => Ok(map
            .entry(Value::String(segment.to_string()))
            .or_insert(Value::Null)),
        _ => unreachable!("non-container values were replaced above"),
    }
}

fn segment_index(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()
}

/// Short, single-line rendering of a value for display.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => seq.iter().map(display_value).collect::<Vec<_>>().join(", "),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().replace('\n', " "))
            .unwrap_or_default(),
    }
}
