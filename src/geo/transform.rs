use crate::domain::{GeoOrigin, GeoSample, LocalOffset};

/// WGS84 equatorial radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Maps a WGS84 sample to an East-North-Up offset from `origin`, optionally rotated about the
/// vertical axis by `rotation_degrees` (positive is counter-clockwise).
///
/// Uses the equirectangular small-area approximation, which is accurate for a test field a few
/// kilometers across. Inputs are not validated: non-finite input gives non-finite output, and an
/// origin at a pole collapses the east axis to zero.
pub fn transform(sample: &GeoSample, origin: &GeoOrigin, rotation_degrees: f64) -> LocalOffset {
    let d_lat = (sample.lat - origin.lat).to_radians();
    let d_lon = (sample.lon - origin.lon).to_radians();

    let east = d_lon * EARTH_RADIUS_M * origin.lat.to_radians().cos();
    let north = d_lat * EARTH_RADIUS_M;
    let up = sample.altitude_or_zero() - origin.alt;

    let (east, north) = if rotation_degrees != 0.0 {
        rotate(east, north, rotation_degrees)
    } else {
        (east, north)
    };

    LocalOffset { east, north, up }
}

/// Rotates a planar `(east, north)` vector counter-clockwise by `degrees`.
pub fn rotate(east: f64, north: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (east * cos - north * sin, east * sin + north * cos)
}
