use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// ===============================
/// Typed extraction out of raw JSON payloads
/// ===============================
///
/// Full-record updates and attendance records require every key to be
/// present in the payload, while still allowing null values for nullable
/// columns. serde's `Option` fields cannot distinguish a missing key from
/// an explicit null, so those handlers take `web::Json<Value>` and pull
/// fields out through these helpers.

pub fn as_object(payload: &Value) -> Result<&Map<String, Value>, ApiError> {
    payload
        .as_object()
        .ok_or_else(|| ApiError::Validation("Payload must be a JSON object".to_string()))
}

pub fn require<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ApiError> {
    obj.get(key)
        .ok_or_else(|| ApiError::Validation(format!("missing field '{key}'")))
}

/// Key must exist; value may be null.
pub fn string_field(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, ApiError> {
    match require(obj, key)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ApiError::Validation(format!(
            "field '{key}' must be a string"
        ))),
    }
}

pub fn f64_field(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>, ApiError> {
    match require(obj, key)? {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| {
            ApiError::Validation(format!("field '{key}' is out of range for a number"))
        }),
        _ => Err(ApiError::Validation(format!(
            "field '{key}' must be a number"
        ))),
    }
}

pub fn date_field(obj: &Map<String, Value>, key: &str) -> Result<Option<NaiveDate>, ApiError> {
    match require(obj, key)? {
        Value::Null => Ok(None),
        Value::String(s) => parse_date(s, key).map(Some),
        _ => Err(ApiError::Validation(format!(
            "field '{key}' must be a date string"
        ))),
    }
}

/// Key must exist and hold a non-null string.
pub fn required_string(obj: &Map<String, Value>, key: &str) -> Result<String, ApiError> {
    string_field(obj, key)?
        .ok_or_else(|| ApiError::Validation(format!("field '{key}' must not be null")))
}

pub fn required_date(obj: &Map<String, Value>, key: &str) -> Result<NaiveDate, ApiError> {
    date_field(obj, key)?
        .ok_or_else(|| ApiError::Validation(format!("field '{key}' must not be null")))
}

/// Accepts an integer or a numeric string, mirroring `int(...)` coercion.
pub fn int_field(obj: &Map<String, Value>, key: &str) -> Result<i32, ApiError> {
    let bad = || ApiError::Validation(format!("field '{key}' must be an integer"));
    match require(obj, key)? {
        Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(bad),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| bad()),
        _ => Err(bad()),
    }
}

fn parse_date(raw: &str, key: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ApiError::Validation(format!("field '{key}' must be an ISO date (YYYY-MM-DD)"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let payload = obj(json!({ "name": "Ada" }));
        let err = require(&payload, "salary").unwrap_err();
        assert_eq!(err.to_string(), "missing field 'salary'");
    }

    #[test]
    fn string_field_distinguishes_null_from_missing() {
        let payload = obj(json!({ "email": null }));
        assert_eq!(string_field(&payload, "email").unwrap(), None);
        assert!(string_field(&payload, "phone").is_err());
    }

    #[test]
    fn f64_field_accepts_integers_and_floats() {
        let payload = obj(json!({ "salary": 52000, "bonus": 1500.5 }));
        assert_eq!(f64_field(&payload, "salary").unwrap(), Some(52000.0));
        assert_eq!(f64_field(&payload, "bonus").unwrap(), Some(1500.5));
    }

    #[test]
    fn int_field_coerces_numeric_strings() {
        let payload = obj(json!({ "a": 7, "b": "12", "c": " 3 ", "d": "x" }));
        assert_eq!(int_field(&payload, "a").unwrap(), 7);
        assert_eq!(int_field(&payload, "b").unwrap(), 12);
        assert_eq!(int_field(&payload, "c").unwrap(), 3);
        assert!(int_field(&payload, "d").is_err());
    }

    #[test]
    fn date_field_rejects_non_iso_strings() {
        let payload = obj(json!({ "join_date": "2025-01-15", "bad": "15/01/2025" }));
        assert_eq!(
            date_field(&payload, "join_date").unwrap().unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(date_field(&payload, "bad").is_err());
    }

    #[test]
    fn required_string_rejects_null() {
        let payload = obj(json!({ "name": null }));
        assert!(required_string(&payload, "name").is_err());
    }
}
