//! Deep merge of JSON values.
//!
//! Objects merge key by key, recursively. Arrays concatenate: overlay
//! entries are appended after the base entries, duplicates included. An
//! overlay `null` keeps the base value. Any other overlay value replaces
//! the base.

use serde_json::{Map, Value};

/// Merges `overlay` into `base`.
///
/// # Example
///
/// ```
/// use post_to_slack::message::deep_merge;
/// use serde_json::json;
///
/// let mut base = json!({"color": "good", "fields": [{"title": "Lane"}]});
/// deep_merge(&mut base, json!({"color": "#36a64f", "fields": [{"title": "Mine"}]}));
///
/// assert_eq!(base, json!({
///     "color": "#36a64f",
///     "fields": [{"title": "Lane"}, {"title": "Mine"}],
/// }));
/// ```
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(overlay)) => merge_maps(base, overlay),
        (Value::Array(base), Value::Array(overlay)) => base.extend(overlay),
        (base, overlay) => *base = overlay,
    }
}

/// Merges the entries of `overlay` into `base` with [`deep_merge`] semantics.
///
/// Keys missing from `base` are inserted as-is (including `null`s) and end
/// up after the existing keys.
pub fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}
