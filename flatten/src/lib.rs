//! Flattening of arbitrarily nested arrays.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flattens a JSON array of arrays and values into a new vector.
///
/// Any input that is not an array yields an empty vector. The input is
/// never modified.
pub fn flatten(input: &Value) -> Vec<Value> {
    let mut flattened = Vec::new();
    if let Value::Array(items) = input {
        extend_flat(items, &mut flattened);
    }
    flattened
}

fn extend_flat(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(nested) => extend_flat(nested, out),
            other => out.push(other.clone()),
        }
    }
}

/// A typed nested list: either a single item or a list of nested lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T: Clone> Nested<T> {
    pub fn flatten(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<T>) {
        match self {
            Nested::Item(item) => out.push(item.clone()),
            Nested::List(list) => list.iter().for_each(|nested| nested.collect_into(out)),
        }
    }
}
