// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structural skeleton of a record: keys and list lengths, leaf values erased.

use std::collections::BTreeMap;

use serde_json::Value;

/// The shape of a JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Any scalar or null.
    Leaf,
    List(Vec<Shape>),
    Record(BTreeMap<String, Shape>),
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(items) => Shape::List(items.iter().map(Shape::of).collect()),
            Value::Object(map) => Shape::Record(
                map.iter()
                    .map(|(key, value)| (key.clone(), Shape::of(value)))
                    .collect(),
            ),
            _ => Shape::Leaf,
        }
    }

    /// Whether `self` contains everything `other` has: every key of every
    /// record, and lists of equal length with covering elements.
    ///
    /// A leaf in `other` is covered by anything, so a missing section that was
    /// filled in with an empty container still counts.
    pub fn covers(&self, other: &Shape) -> bool {
        match (self, other) {
            (_, Shape::Leaf) => true,
            (Shape::List(mine), Shape::List(theirs)) => {
                mine.len() == theirs.len() && mine.iter().zip(theirs).all(|(a, b)| a.covers(b))
            }
            (Shape::Record(mine), Shape::Record(theirs)) => theirs
                .iter()
                .all(|(key, shape)| mine.get(key).is_some_and(|m| m.covers(shape))),
            _ => false,
        }
    }
}

/// Every scalar leaf of `value` with its JSON pointer.
pub fn leaves(value: &Value) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    collect_leaves(value, String::new(), &mut out);
    out
}

fn collect_leaves<'a>(value: &'a Value, pointer: String, out: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_leaves(item, format!("{}/{}", pointer, index), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let escaped = key.replace('~', "~0").replace('/', "~1");
                collect_leaves(item, format!("{}/{}", pointer, escaped), out);
            }
        }
        _ => out.push((pointer, value)),
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_ignores_leaf_values() {
        let a = json!({"name": "Ada", "tags": ["x", "y"], "meta": {"n": 1}});
        let b = json!({"name": null, "tags": [true, 3], "meta": {"n": "z"}});
        assert_eq!(Shape::of(&a), Shape::of(&b));
    }

    #[test]
    fn shape_sees_list_length_and_keys() {
        assert_ne!(Shape::of(&json!({"a": [1, 2]})), Shape::of(&json!({"a": [1]})));
        assert_ne!(Shape::of(&json!({"a": 1})), Shape::of(&json!({"b": 1})));
    }

    /// Filling an absent or null section with an empty container still covers.
    #[test]
    fn covers_allows_added_keys_and_filled_leaves() {
        let input = Shape::of(&json!({"skills": null, "title": "x"}));
        let output = Shape::of(&json!({"skills": [], "title": "", "experience": []}));
        assert!(output.covers(&input));
        assert!(!input.covers(&output));
    }

    #[test]
    fn covers_rejects_length_change() {
        let input = Shape::of(&json!({"skills": ["a", "b"]}));
        let output = Shape::of(&json!({"skills": ["a"]}));
        assert!(!output.covers(&input));
    }

    #[test]
    fn leaves_yield_json_pointers() {
        let value = json!({"a": [{"b": 1}, 2], "c/d": "e"});
        let found = leaves(&value);
        let pointers: Vec<&str> = found.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(pointers, vec!["/a/0/b", "/a/1", "/c~1d"]);
        for (pointer, leaf) in &found {
            assert_eq!(value.pointer(pointer), Some(*leaf));
        }
    }
}
