use serde_json::Value;

/// A required text field counts as present only when it is non-empty
pub fn has_text(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |s| !s.is_empty())
}

/// Truthiness of a free-form JSON value: `null`, `false`, `0` and `""` are missing
pub fn has_value(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
        Some(_) => true,
    }
}
