//! API request and response types

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::Validate;

// ============================================================================
// Requests
// ============================================================================

/// User creation request (form or JSON body)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,
}

/// Exercise logging request (form or JSON body)
///
/// Any `username` sent by the caller is ignored; the stored one is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LogExerciseRequest {
    #[serde(default)]
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description is required")
    )]
    pub description: Option<String>,
    /// Raw minutes; forms send text, JSON clients usually send a number
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "duration is required"))]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for the exercise log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseLogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// User as returned by creation and listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

/// Logged exercise, flattened with its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    pub description: String,
}

/// Single entry of an exercise log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    pub date: String,
}

/// Filtered exercise log of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogResponse {
    pub id: String,
    pub username: String,
    /// Number of entries in `log`, after filtering and limiting
    pub count: usize,
    pub log: Vec<ExerciseLogEntry>,
}

/// API error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Helpers
// ============================================================================

/// Whole minutes go out as integers (`30`, not `30.0`)
fn serialize_minutes<S>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let whole = minutes.fract() == 0.0 && minutes.abs() < i64::MAX as f64;
    if whole {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

/// Accept either a string or a JSON number, keeping the textual form
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> de::Visitor<'de> for StringOrNumber {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
