//! Request validation for the product routes.
//!
//! Each route has one pure function that takes the raw path segment and/or JSON body and
//! returns either the typed input or every violation found. Field checks run in a fixed
//! order and never stop at the first failure.

use crate::model::{NewProduct, ProductChanges};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use utoipa::ToSchema;

pub const INVALID_ID: &str = "Id no válido";
pub const EMPTY_NAME: &str = "El nombre de producto no puede ir vacio";
pub const NOT_NUMERIC: &str = "Valor no válido";
pub const EMPTY_PRICE: &str = "El precio de producto no puede ir vacio";
pub const INVALID_PRICE: &str = "Precio no válido";
pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";

/// Where the offending value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub kind: String,
    #[schema(value_type = Object)]
    pub value: Value,
    #[schema(example = "Id no válido")]
    pub msg: String,
    #[schema(example = "id")]
    pub path: String,
    pub location: Location,
}

impl Violation {
    pub fn new(location: Location, path: &str, value: Value, msg: &str) -> Self {
        Violation {
            kind: "field".to_string(),
            value,
            msg: msg.to_string(),
            path: path.to_string(),
            location,
        }
    }
}

fn integer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").expect("integer pattern compiles"))
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-+]?(?:[0-9]*\.)?[0-9]+$").expect("numeric pattern compiles"))
}

/// `GET`, `PATCH` and `DELETE /api/products/:id`.
pub fn validate_id(raw_id: &str) -> Result<i64, Vec<Violation>> {
    let mut violations = Vec::new();
    match check_id(raw_id, &mut violations) {
        Some(id) => Ok(id),
        None => Err(violations),
    }
}

/// `POST /api/products`.
pub fn validate_create(body: &Value) -> Result<NewProduct, Vec<Violation>> {
    let mut violations = Vec::new();
    let name = check_name(body, &mut violations);
    let price = check_price(body, &mut violations);
    match (name, price) {
        (Some(name), Some(price)) => Ok(NewProduct {
            name,
            price,
            availability: body.get("availability").and_then(Value::as_bool).unwrap_or(true),
        }),
        _ => Err(violations),
    }
}

/// `PUT /api/products/:id`. Id and body violations are reported together.
pub fn validate_update(raw_id: &str, body: &Value) -> Result<(i64, ProductChanges), Vec<Violation>> {
    let mut violations = Vec::new();
    let id = check_id(raw_id, &mut violations);
    let name = check_name(body, &mut violations);
    let price = check_price(body, &mut violations);
    let availability = check_availability(body, &mut violations);
    match (id, name, price, availability) {
        (Some(id), Some(name), Some(price), Some(availability)) => Ok((
            id,
            ProductChanges {
                name,
                price,
                availability,
            },
        )),
        _ => Err(violations),
    }
}

fn check_id(raw: &str, violations: &mut Vec<Violation>) -> Option<i64> {
    let parsed = if integer_pattern().is_match(raw) {
        raw.parse::<i64>().ok()
    } else {
        None
    };
    if parsed.is_none() {
        violations.push(Violation::new(
            Location::Params,
            "id",
            Value::String(raw.to_string()),
            INVALID_ID,
        ));
    }
    parsed
}

fn check_name(body: &Value, violations: &mut Vec<Violation>) -> Option<String> {
    let raw = body.get("name");
    match raw.and_then(as_text) {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            violations.push(body_violation("name", raw, EMPTY_NAME));
            None
        }
    }
}

/// Type check first, then presence, then positivity; positivity is only judged on numbers.
fn check_price(body: &Value, violations: &mut Vec<Violation>) -> Option<f64> {
    let raw = body.get("price");
    match raw.filter(|v| !is_blank(v)) {
        None => {
            violations.push(body_violation("price", raw, NOT_NUMERIC));
            violations.push(body_violation("price", raw, EMPTY_PRICE));
            None
        }
        Some(value) => match as_number(value) {
            None => {
                violations.push(body_violation("price", raw, NOT_NUMERIC));
                None
            }
            Some(price) if price > 0.0 => Some(price),
            Some(_) => {
                violations.push(body_violation("price", raw, INVALID_PRICE));
                None
            }
        },
    }
}

fn check_availability(body: &Value, violations: &mut Vec<Violation>) -> Option<bool> {
    let raw = body.get("availability");
    let parsed = raw.and_then(as_bool);
    if parsed.is_none() {
        violations.push(body_violation("availability", raw, INVALID_AVAILABILITY));
    }
    parsed
}

fn body_violation(path: &str, raw: Option<&Value>, msg: &str) -> Violation {
    Violation::new(Location::Body, path, raw.cloned().unwrap_or(Value::Null), msg)
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if numeric_pattern().is_match(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn as_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.msg.as_str()).collect()
    }

    #[test]
    fn id_accepts_signed_integers() {
        assert_eq!(validate_id("1"), Ok(1));
        assert_eq!(validate_id("+42"), Ok(42));
        assert_eq!(validate_id("-3"), Ok(-3));
        assert_eq!(validate_id("0"), Ok(0));
    }

    #[test]
    fn id_rejects_non_integers() {
        for raw in ["abc", "1.5", "01", "", "1e3", "99999999999999999999"] {
            let violations = validate_id(raw).unwrap_err();
            assert_eq!(messages(&violations), vec![INVALID_ID], "input {raw:?}");
            assert_eq!(violations[0].location, Location::Params);
            assert_eq!(violations[0].value, json!(raw));
        }
    }

    #[test]
    fn create_defaults_availability_to_true() {
        let input = validate_create(&json!({ "name": "Monitor", "price": 300 })).unwrap();
        assert_eq!(
            input,
            NewProduct {
                name: "Monitor".into(),
                price: 300.0,
                availability: true,
            }
        );
    }

    #[test]
    fn create_honours_explicit_availability() {
        let input = validate_create(&json!({ "name": "Mouse", "price": 20, "availability": false })).unwrap();
        assert!(!input.availability);
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let input = validate_create(&json!({ "name": "Teclado", "price": "49.90" })).unwrap();
        assert_eq!(input.price, 49.9);
    }

    #[test]
    fn missing_fields_report_every_rule() {
        let violations = validate_create(&json!({})).unwrap_err();
        assert_eq!(messages(&violations), vec![EMPTY_NAME, NOT_NUMERIC, EMPTY_PRICE]);
    }

    #[test]
    fn non_numeric_price_reports_type_error_only() {
        let violations = validate_create(&json!({ "name": "Monitor", "price": "Hola" })).unwrap_err();
        assert_eq!(messages(&violations), vec![NOT_NUMERIC]);
        assert_eq!(violations[0].value, json!("Hola"));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        for price in [json!(0), json!(-1), json!("-5.5")] {
            let violations = validate_create(&json!({ "name": "Monitor", "price": price })).unwrap_err();
            assert_eq!(messages(&violations), vec![INVALID_PRICE]);
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let violations = validate_create(&json!({ "name": "", "price": 10 })).unwrap_err();
        assert_eq!(messages(&violations), vec![EMPTY_NAME]);
        assert_eq!(violations[0].path, "name");
        assert_eq!(violations[0].location, Location::Body);
    }

    #[test]
    fn non_object_body_is_treated_as_empty() {
        let violations = validate_create(&Value::Null).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn update_requires_availability() {
        let violations = validate_update("1", &json!({ "name": "Monitor", "price": 300 })).unwrap_err();
        assert_eq!(messages(&violations), vec![INVALID_AVAILABILITY]);

        let violations =
            validate_update("1", &json!({ "name": "Monitor", "price": 300, "availability": "si" })).unwrap_err();
        assert_eq!(messages(&violations), vec![INVALID_AVAILABILITY]);
    }

    #[test]
    fn update_accepts_loose_booleans() {
        let (_, changes) =
            validate_update("7", &json!({ "name": "Monitor", "price": 300, "availability": "false" })).unwrap();
        assert!(!changes.availability);
        let (_, changes) = validate_update("7", &json!({ "name": "Monitor", "price": 300, "availability": 1 })).unwrap();
        assert!(changes.availability);
    }

    #[test]
    fn update_collects_id_and_body_violations_together() {
        let violations = validate_update("abc", &json!({ "name": "", "price": 0, "availability": "x" })).unwrap_err();
        assert_eq!(
            messages(&violations),
            vec![INVALID_ID, EMPTY_NAME, INVALID_PRICE, INVALID_AVAILABILITY]
        );
    }

    #[test]
    fn update_returns_typed_changes() {
        let (id, changes) =
            validate_update("3", &json!({ "name": "Monitor", "price": 250.5, "availability": true })).unwrap();
        assert_eq!(id, 3);
        assert_eq!(
            changes,
            ProductChanges {
                name: "Monitor".into(),
                price: 250.5,
                availability: true,
            }
        );
    }
}
