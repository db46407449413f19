use serde_json::Value;

/// Best-effort human-readable message from a failed response body.
///
/// Order: `error` field (a string, or an object carrying `message`), then
/// `message` field, then the raw body when it is not a JSON document.
pub(crate) fn extract(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => structured(&value),
        Err(_) => Some(trimmed.to_string()),
    }
}

fn structured(value: &Value) -> Option<String> {
    let error = value.get("error").and_then(|error| match error {
        Value::String(s) => non_empty(s),
        Value::Object(_) => error
            .get("message")
            .and_then(Value::as_str)
            .and_then(non_empty),
        _ => None,
    });

    error.or_else(|| {
        value
            .get("message")
            .and_then(Value::as_str)
            .and_then(non_empty)
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
