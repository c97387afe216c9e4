//! Export and import of session progress as a JSON document.
//!
//! The document has two top-level fields, `attempts` and `points`. Import
//! checks that shape before decoding anything, so a rejected file never
//! partially applies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use practice_core::model::Attempt;

use crate::error::ImportError;

/// Decoded progress file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDocument {
    pub attempts: Vec<Attempt>,
    pub points: i64,
}

#[derive(Serialize)]
struct ProgressDocumentRef<'a> {
    attempts: &'a [Attempt],
    points: i64,
}

/// Encode history and points as a pretty-printed progress document.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if encoding fails.
pub fn export_document(history: &[Attempt], points: i64) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ProgressDocumentRef {
        attempts: history,
        points,
    })
}

/// Validate and decode a progress document.
///
/// `attempts` must be an array of attempts with non-decreasing timestamps and
/// `points` an integral number that fits in `i64`. Unknown top-level fields
/// are ignored.
///
/// # Errors
///
/// Returns `ImportError` describing the first shape violation found.
pub fn import_document(text: &str) -> Result<ProgressDocument, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::NotJson)?;
    let Value::Object(mut fields) = value else {
        return Err(ImportError::NotAnObject);
    };

    let attempts = fields
        .remove("attempts")
        .ok_or(ImportError::MissingField("attempts"))?;
    if !attempts.is_array() {
        return Err(ImportError::AttemptsNotArray);
    }

    let points = fields
        .get("points")
        .ok_or(ImportError::MissingField("points"))?;
    let points = integral_points(points)?;

    let attempts: Vec<Attempt> =
        serde_json::from_value(attempts).map_err(ImportError::InvalidAttempt)?;
    if let Some(index) = attempts
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        return Err(ImportError::TimestampsOutOfOrder { index: index + 1 });
    }

    Ok(ProgressDocument { attempts, points })
}

/// 2^63, the first whole number past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn integral_points(value: &Value) -> Result<i64, ImportError> {
    let Value::Number(number) = value else {
        return Err(ImportError::PointsNotNumeric);
    };
    if let Some(points) = number.as_i64() {
        return Ok(points);
    }
    match number.as_f64() {
        Some(f) if f.fract() != 0.0 => Err(ImportError::PointsNotInteger(f)),
        Some(f) if f < -I64_LIMIT || f >= I64_LIMIT => {
            Err(ImportError::PointsOutOfRange(number.to_string()))
        }
        Some(f) => Ok(f as i64),
        None => Err(ImportError::PointsNotNumeric),
    }
}
