//! JSON bodies in the shape the portal returns.

use serde_json::{json, Map, Value};

/// Wraps `data` in a successful `{code, msg, data}` envelope.
pub fn success(data: Value) -> Value {
    json!({ "code": 200, "msg": "success", "data": data })
}

/// A failure envelope with `data: null`.
pub fn failure(code: i64, msg: &str) -> Value {
    json!({ "code": code, "msg": msg, "data": null })
}

/// Names payload keyed by the stringified ID, as the names endpoint sends it.
pub fn names(entries: &[(i64, &str)]) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(id, name)| (id.to_string(), Value::String(name.to_string())))
        .collect();

    Value::Object(map)
}
