//! Payload validation.
//!
//! Each `validate_*` function inspects a raw JSON body and returns every
//! violated rule, in declaration order. An empty list means the payload is
//! valid. Validators never touch the store and never fail.
//!
//! The `*Input` types are the normalized form handed to the repositories:
//! trimmed identifiers, coerced numbers, and `None` for optional fields that
//! were missing, null or empty.

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Missing keys and explicit nulls are both "absent".
fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    match body.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// Strings as-is, numbers in their JSON spelling; anything else has no text form.
fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text that is present and not blank
fn present_text(value: Option<&Value>) -> Option<String> {
    as_text(value).filter(|s| !s.trim().is_empty())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD`, shape only
fn is_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn is_optional_date(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => s.is_empty() || is_date_shape(s),
        Some(_) => false,
    }
}

/// Loose numeric coercion: JSON numbers, numeric strings (blank counts as
/// zero), and booleans as 0/1. Returns `None` for anything non-numeric.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn coerce_finite(value: Option<&Value>) -> Option<f64> {
    coerce_number(value).filter(|n| n.is_finite())
}

/// Integers beyond this lose precision as `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn coerce_positive_integer(value: Option<&Value>) -> Option<i64> {
    coerce_finite(value)
        .filter(|n| n.fract() == 0.0 && *n > 0.0 && *n <= MAX_SAFE_INTEGER)
        .map(|n| n as i64)
}

/// An optional numeric field is absent when missing, null or blank
fn optional_number_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    match field(body, key) {
        Some(Value::String(s)) if s.trim().is_empty() => None,
        other => other,
    }
}

/// The single boolean-parsing rule for flags: `true`, `1`, `"1"` and
/// `"true"` are true; everything else (including absence) is false.
pub fn parse_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => matches!(s.trim(), "1" | "true"),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

pub fn validate_registration(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_non_empty_string(field(body, "email")) {
        errors.push("Email is required.".to_string());
    }

    let password_ok = match field(body, "password") {
        Some(Value::String(s)) => !s.trim().is_empty() && s.chars().count() >= 6,
        _ => false,
    };
    if !password_ok {
        errors.push("Password is required and must be at least 6 characters.".to_string());
    }

    if !is_non_empty_string(field(body, "displayName")) {
        errors.push("Display name is required.".to_string());
    }

    errors
}

pub fn validate_login(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_non_empty_string(field(body, "email")) {
        errors.push("Email is required.".to_string());
    }
    if !is_non_empty_string(field(body, "password")) {
        errors.push("Password is required.".to_string());
    }

    errors
}

pub fn validate_company(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_non_empty_string(field(body, "name")) {
        errors.push("Company name is required.".to_string());
    }

    match present_text(field(body, "nip")) {
        None => errors.push("NIP is required.".to_string()),
        Some(nip) if !is_digits(nip.trim()) => {
            errors.push("NIP must contain digits 0–9 only.".to_string())
        }
        Some(_) => {}
    }

    if let Some(krs) = present_text(field(body, "krs")) {
        if !is_digits(krs.trim()) {
            errors.push("KRS must contain digits 0–9 only.".to_string());
        }
    }

    if !is_optional_date(field(body, "founded_at")) {
        errors.push("founded_at must be in YYYY-MM-DD format if provided.".to_string());
    }

    if coerce_positive_integer(field(body, "company_type_id")).is_none() {
        errors.push("company_type_id must be a positive integer.".to_string());
    }

    if !coerce_finite(field(body, "share_capital")).is_some_and(|n| n > 0.0) {
        errors.push("share_capital must be a positive number.".to_string());
    }

    if let Some(value) = optional_number_field(body, "last_valuation") {
        if !coerce_finite(Some(value)).is_some_and(|n| n >= 0.0) {
            errors.push("last_valuation must be a non-negative number if provided.".to_string());
        }
    }

    errors
}

pub fn validate_shareholder(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_non_empty_string(field(body, "name")) {
        errors.push("Shareholder name is required.".to_string());
    }

    if !is_non_empty_string(field(body, "last_name")) {
        errors.push("Shareholder last name is required.".to_string());
    }

    if let Some(identifier) = present_text(field(body, "identifier")) {
        if !is_digits(&identifier) {
            errors.push("Identifier must contain digits 0–9 only.".to_string());
        }
    }

    errors
}

pub fn validate_shareholding(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    for key in ["company_id", "shareholder_id", "shares_owned"] {
        if coerce_positive_integer(field(body, key)).is_none() {
            errors.push(format!("{key} must be a positive integer."));
        }
    }

    if !is_optional_date(field(body, "acquired_at")) {
        errors.push("acquired_at must be in YYYY-MM-DD format if provided.".to_string());
    }

    errors
}

// ---------------------------------------------------------------------------
// Normalized inputs
// ---------------------------------------------------------------------------

fn optional_text(body: &Value, key: &str) -> Option<String> {
    present_text(field(body, key))
}

fn required_text(body: &Value, key: &str) -> String {
    as_text(field(body, key)).unwrap_or_default()
}

fn run(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl RegistrationInput {
    pub fn from_payload(body: &Value) -> Result<Self, Vec<String>> {
        run(validate_registration(body))?;
        Ok(Self {
            email: required_text(body, "email"),
            password: required_text(body, "password"),
            display_name: required_text(body, "displayName"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn from_payload(body: &Value) -> Result<Self, Vec<String>> {
        run(validate_login(body))?;
        Ok(Self {
            email: required_text(body, "email"),
            password: required_text(body, "password"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyInput {
    pub name: String,
    pub nip: String,
    pub krs: Option<String>,
    pub founded_at: Option<String>,
    pub company_type_id: i64,
    pub share_capital: f64,
    pub last_valuation: Option<f64>,
    pub is_restricted: bool,
    pub notes: Option<String>,
}

impl CompanyInput {
    pub fn from_payload(body: &Value) -> Result<Self, Vec<String>> {
        run(validate_company(body))?;
        Ok(Self {
            name: required_text(body, "name"),
            nip: required_text(body, "nip").trim().to_string(),
            krs: optional_text(body, "krs").map(|s| s.trim().to_string()),
            founded_at: optional_text(body, "founded_at"),
            company_type_id: coerce_positive_integer(field(body, "company_type_id")).unwrap_or_default(),
            share_capital: coerce_finite(field(body, "share_capital")).unwrap_or_default(),
            last_valuation: optional_number_field(body, "last_valuation")
                .and_then(|value| coerce_finite(Some(value))),
            is_restricted: parse_flag(field(body, "is_restricted")),
            notes: optional_text(body, "notes"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareholderInput {
    pub name: String,
    pub last_name: String,
    pub identifier: Option<String>,
    pub notes: Option<String>,
}

impl ShareholderInput {
    pub fn from_payload(body: &Value) -> Result<Self, Vec<String>> {
        run(validate_shareholder(body))?;
        Ok(Self {
            name: required_text(body, "name"),
            last_name: required_text(body, "last_name"),
            identifier: optional_text(body, "identifier"),
            notes: optional_text(body, "notes"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareholdingInput {
    pub company_id: i64,
    pub shareholder_id: i64,
    pub shares_owned: i64,
    pub acquired_at: Option<String>,
    pub source: Option<String>,
}

impl ShareholdingInput {
    pub fn from_payload(body: &Value) -> Result<Self, Vec<String>> {
        run(validate_shareholding(body))?;
        Ok(Self {
            company_id: coerce_positive_integer(field(body, "company_id")).unwrap_or_default(),
            shareholder_id: coerce_positive_integer(field(body, "shareholder_id")).unwrap_or_default(),
            shares_owned: coerce_positive_integer(field(body, "shares_owned")).unwrap_or_default(),
            acquired_at: optional_text(body, "acquired_at"),
            source: optional_text(body, "source"),
        })
    }
}

/// Overlays `incoming` onto `existing`, key by key, then pins `pinned` keys
/// back to their existing values. Used so partial updates are validated as a
/// whole row.
pub fn merge_payload(existing: &Value, incoming: &Value, pinned: &[&str]) -> Value {
    let mut merged: Map<String, Value> = existing.as_object().cloned().unwrap_or_default();

    if let Some(incoming) = incoming.as_object() {
        for (key, value) in incoming {
            merged.insert(key.clone(), value.clone());
        }
    }

    for key in pinned {
        match existing.get(*key) {
            Some(value) => {
                merged.insert((*key).to_string(), value.clone());
            }
            None => {
                merged.remove(*key);
            }
        }
    }

    Value::Object(merged)
}
