//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Uses both custom validators and the `validator` crate for derive macros.

use std::num::IntErrorKind;
use validator::ValidationErrors;

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    Ok(())
}

/// Parse a duration in minutes from its raw field value
pub fn parse_duration_minutes(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("duration is required".to_string());
    }
    let minutes = trimmed
        .parse::<f64>()
        .map_err(|_| format!("Invalid duration: \"{}\" is not a number", raw))?;
    validate_duration_minutes(minutes)?;
    Ok(minutes)
}

/// Parse the optional `limit` of a log query.
///
/// Blank and zero both mean "no limit"; values past `i64::MAX` saturate.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, String> {
    let trimmed = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };
    let limit = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return Err(format!("Invalid limit: \"{}\"", trimmed)),
    };
    match limit {
        0 => Ok(None),
        n if n < 0 => Err("limit cannot be negative".to_string()),
        n => Ok(Some(n)),
    }
}

/// Flatten derive-generated errors into a single message
pub fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
