use serde_json::Value;

use crate::models::NewSchool;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields (name, address, latitude, longitude) are required")]
    MissingField,

    #[error("Name and address must be strings")]
    TextExpected,

    #[error("Latitude and longitude must be numbers")]
    NumberExpected,

    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange,

    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    #[error("Latitude and longitude must be numbers")]
    UnparsableCoordinate,
}

/// Validate a loose JSON request body into a `NewSchool`.
///
/// Checks run in order: presence, type, range. An empty string counts as
/// missing, not as a type violation.
pub fn parse_new_school(body: &Value) -> Result<NewSchool, ValidationError> {
    let name = required_text(body.get("name"))?;
    let address = required_text(body.get("address"))?;
    let latitude = required_number(body.get("latitude"))?;
    let longitude = required_number(body.get("longitude"))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange);
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange);
    }

    Ok(NewSchool {
        name,
        address,
        latitude,
        longitude,
    })
}

/// Parse the reference point supplied as `latitude`/`longitude` query
/// parameters.
///
/// Parsing is strict: the whole parameter must be a finite number, so
/// `"45abc"` is rejected rather than truncated to 45. The reference point is
/// deliberately not range-checked; it only anchors the distance ordering.
pub fn parse_reference_point(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<(f64, f64), ValidationError> {
    let lat = coordinate_param(latitude)?;
    let lng = coordinate_param(longitude)?;
    Ok((lat, lng))
}

fn required_text(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingField),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::TextExpected),
    }
}

fn required_number(value: Option<&Value>) -> Result<f64, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField),
        Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::NumberExpected),
        Some(_) => Err(ValidationError::NumberExpected),
    }
}

fn coordinate_param(value: Option<&str>) -> Result<f64, ValidationError> {
    let raw = match value {
        None | Some("") => return Err(ValidationError::MissingCoordinates),
        Some(raw) => raw,
    };

    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(ValidationError::UnparsableCoordinate),
    }
}
