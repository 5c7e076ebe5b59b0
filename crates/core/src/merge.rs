//! Leaf-merge deep update over parsed JSON values.

use serde_json::{Map, Value};

/// Merge the leaf keys of `leaves` into `base`, returning the merged value.
///
/// Objects merge recursively: only the keys named in `leaves` are touched,
/// sibling keys of `base` are preserved. Everything else — scalars, arrays,
/// null — is a leaf and overwrites unconditionally; arrays in particular are
/// replaced wholesale, never merged element-wise. An object in `leaves` also
/// replaces a non-object value in `base` wholesale.
///
/// Both arguments are expected to be objects; for any other `base` a clone
/// of it is returned unchanged. The caller's `base` is never mutated.
#[must_use]
pub fn update_leaves(base: &Value, leaves: &Value) -> Value {
    let mut result = base.clone();
    if let (Value::Object(base_map), Value::Object(overlay)) = (&mut result, leaves) {
        update_leaves_impl(base_map, overlay);
    }
    result
}

fn update_leaves_impl(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            // Shared object key: recurse, touching only the overlay's keys.
            (Some(Value::Object(child)), Value::Object(nested)) => {
                update_leaves_impl(child, nested);
            }
            // Leaf overlay value, or object overlay over a non-object child:
            // overwrite wholesale.
            (Some(slot), _) => *slot = value.clone(),
            // No child with this name; add it.
            (None, _) => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
