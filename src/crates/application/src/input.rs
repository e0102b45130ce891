//! Turns raw path segments and JSON bodies into typed values. Presence rules
//! follow JSON "truthiness": `null`, `false`, `0` and `""` all count as absent.

use crate::error::AppError;
use serde_json::Value;

pub fn parse_id(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidInput(format!("{} must be an integer", field)))
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextField {
    Absent,
    Text(String),
    NotText,
}

pub fn text_field(body: &Value, key: &str) -> TextField {
    match body.get(key) {
        None => TextField::Absent,
        Some(v) if !is_truthy(v) => TextField::Absent,
        Some(Value::String(s)) => TextField::Text(s.clone()),
        Some(_) => TextField::NotText,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdField {
    Absent,
    Id(i64),
    /// Present and truthy but not an integer. Keeps the raw text so it can be
    /// echoed back as an id that names nothing.
    NotId(String),
}

/// Reads an id from a body field. Integer numbers and integer strings are
/// accepted; an absent or falsy field is `Absent`.
pub fn id_field(body: &Value, key: &str) -> IdField {
    let value = match body.get(key) {
        Some(v) if is_truthy(v) => v,
        _ => return IdField::Absent,
    };
    let id = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match (id, value) {
        (Some(id), _) => IdField::Id(id),
        (None, Value::String(s)) => IdField::NotId(s.clone()),
        (None, other) => IdField::NotId(other.to_string()),
    }
}
