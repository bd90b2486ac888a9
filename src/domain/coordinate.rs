use thiserror::Error;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("invalid coordinate {field}: {value}, {reason}")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub fn validate_latitude(latitude: f64) -> Result<f64, CoordinateError> {
    validate_range("latitude", latitude, MIN_LATITUDE, MAX_LATITUDE, "must be between -90 and 90")
}

pub fn validate_longitude(longitude: f64) -> Result<f64, CoordinateError> {
    validate_range("longitude", longitude, MIN_LONGITUDE, MAX_LONGITUDE, "must be between -180 and 180")
}

pub fn validate_altitude(altitude: f64) -> Result<f64, CoordinateError> {
    validate_finite("altitude", altitude)
}

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::InvalidCoordinate {
            field,
            value,
            reason: "must be a finite number",
        });
    }

    Ok(value)
}

fn validate_range(field: &'static str, value: f64, min: f64, max: f64, reason: &'static str) -> Result<f64, CoordinateError> {
    let value = validate_finite(field, value)?;
    if !(min..=max).contains(&value) {
        return Err(CoordinateError::InvalidCoordinate { field, value, reason });
    }

    Ok(value)
}
