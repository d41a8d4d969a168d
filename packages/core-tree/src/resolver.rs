//! The segment resolver: total operations against a nested tree.
//!
//! Every function here takes a tree and a normalized segment slice (from
//! [`Key::segments`](crate::Key::segments)) and walks it shape-agnostically.
//! Nothing in this module fails: absent paths read as `None`/`false`,
//! writes create what they need, and kind mismatches resolve by policy
//! rather than by error. Key-shape validation happens before normalization,
//! never here.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::Value;

/// Set `value` at the location the segments address, overwriting whatever
/// is there.
///
/// Intermediate slots are created as empty maps when absent. A leaf sitting
/// mid-path is overwritten with a fresh map so the walk can continue: `set`
/// is last-writer-wins at every level. Arrays along the path accept
/// in-bounds numeric segments (descend) and one-past-the-end (append); any
/// other segment replaces the array with a map keyed by that segment.
///
/// A zero-segment key is a no-op.
pub fn set(store: &mut Value, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut slot = store;
    for segment in parents {
        slot = child_slot(slot, segment);
    }
    set_terminal(slot, last, value);
}

/// Like [`set`], but merge into an occupied terminal slot instead of
/// overwriting it.
///
/// The merge policy, from the outside in:
///
/// - vacant terminal: plain set, returns `true`;
/// - two maps: union merge - vacant keys are inserted, colliding children
///   merge recursively, an existing *leaf* child is replaced by the incoming
///   one, and a leaf never displaces an existing subtree;
/// - two arrays: incoming elements are appended;
/// - any other pairing (leaf/leaf, leaf/structure, map/array): the existing
///   value is kept untouched.
///
/// Returns `true` when the terminal slot was newly filled, `false` when an
/// occupant was merged into or kept. Note the asymmetry: the slot itself is
/// never stolen from (`add` never destroys data it did not create), while
/// *inside* a union the newer leaf wins.
pub fn add(store: &mut Value, segments: &[String], value: Value) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut slot = store;
    for segment in parents {
        slot = child_slot(slot, segment);
    }
    add_terminal(slot, last, value)
}

/// Resolve the segments to a reference, if the full path exists.
///
/// A terminal slot holding `Null` is present and resolves to `Some(&Null)`.
/// Walking into a leaf, a missing map key, or an unusable array index
/// yields `None`. No mutation.
pub fn get<'a>(store: &'a Value, segments: &[String]) -> Option<&'a Value> {
    if segments.is_empty() {
        return None;
    }

    let mut current = store;
    for segment in segments {
        current = match current {
            Value::Map(entries) => entries.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// True when the full path resolves, even to a `Null` value.
pub fn has(store: &Value, segments: &[String]) -> bool {
    get(store, segments).is_some()
}

/// Resolve like [`get`], then detach and return the terminal value.
///
/// Map entries are removed; array elements are removed with a shift. An
/// absent path returns `None` and mutates nothing.
pub fn pull(store: &mut Value, segments: &[String]) -> Option<Value> {
    let (last, parents) = segments.split_last()?;

    let mut parent = store;
    for segment in parents {
        parent = match parent {
            Value::Map(entries) => entries.get_mut(segment)?,
            Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match parent {
        Value::Map(entries) => entries.remove(last),
        Value::Array(items) => {
            let index = last.parse::<usize>().ok()?;
            if index < items.len() {
                Some(items.remove(index))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Delete the terminal slot if the path resolves; no-op otherwise.
pub fn remove(store: &mut Value, segments: &[String]) {
    let _ = pull(store, segments);
}

/// Replace the tree's contents with an empty map.
pub fn flush(store: &mut Value) {
    *store = Value::map();
}

/// Walk one step down for a write, creating or rewriting as needed.
///
/// Arrays keep their shape for usable numeric segments (in-bounds descends,
/// one-past-the-end appends a placeholder); everything else is forced into
/// a map and the segment's slot handed back, with `Null` standing in for a
/// vacant child until the next step claims it.
fn child_slot<'a>(parent: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = array_index(parent, segment);
    match (parent, index) {
        (Value::Array(items), Some(index)) => {
            if index == items.len() {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        (parent, _) => ensure_map(parent).entry(segment.to_owned()).or_insert(Value::Null),
    }
}

/// The index a write may use on an array: in bounds, or one past the end.
fn array_index(parent: &Value, segment: &str) -> Option<usize> {
    let Value::Array(items) = parent else {
        return None;
    };
    let index = segment.parse::<usize>().ok()?;
    (index <= items.len()).then_some(index)
}

/// Overwrite the terminal slot under `parent` with `value`.
fn set_terminal(parent: &mut Value, segment: &str, value: Value) {
    if let Value::Array(items) = parent {
        if let Ok(index) = segment.parse::<usize>() {
            if index < items.len() {
                items[index] = value;
                return;
            }
            if index == items.len() {
                items.push(value);
                return;
            }
        }
    }

    ensure_map(parent).insert(segment.to_owned(), value);
}

/// Fill or merge the terminal slot under `parent` with `value`.
///
/// Returns `true` only when the slot was vacant.
fn add_terminal(parent: &mut Value, segment: &str, value: Value) -> bool {
    if let Value::Array(items) = parent {
        if let Ok(index) = segment.parse::<usize>() {
            if index < items.len() {
                merge(&mut items[index], value);
                return false;
            }
            if index == items.len() {
                items.push(value);
                return true;
            }
        }
    }

    match ensure_map(parent).entry(segment.to_owned()) {
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
        Entry::Occupied(slot) => {
            merge(slot.into_mut(), value);
            false
        }
    }
}

/// Rewrite `slot` into an empty map unless it already is one.
///
/// This is where a leaf or an unusable array loses to the path being
/// written through it.
fn ensure_map(slot: &mut Value) -> &mut BTreeMap<String, Value> {
    if !slot.is_map() {
        *slot = Value::map();
    }
    match slot {
        Value::Map(entries) => entries,
        _ => unreachable!("slot was just rewritten as a map"),
    }
}

/// Merge `incoming` into an occupied terminal slot.
///
/// Maps union, arrays concatenate, and every other pairing keeps the
/// existing value.
fn merge(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Map(current), Value::Map(new_entries)) => union_entries(current, new_entries),
        (Value::Array(current), Value::Array(new_items)) => current.extend(new_items),
        _ => {}
    }
}

fn union_entries(current: &mut BTreeMap<String, Value>, new_entries: BTreeMap<String, Value>) {
    for (key, new_value) in new_entries {
        match current.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(new_value);
            }
            Entry::Occupied(slot) => union_child(slot.into_mut(), new_value),
        }
    }
}

/// Collision rule inside a union: same-kind structures merge, a newer value
/// replaces an existing leaf, and a leaf never displaces a subtree.
fn union_child(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Map(current), Value::Map(new_entries)) => union_entries(current, new_entries),
        (Value::Array(current), Value::Array(new_items)) => current.extend(new_items),
        (existing, incoming) if existing.is_leaf() => *existing = incoming,
        _ => {}
    }
}
