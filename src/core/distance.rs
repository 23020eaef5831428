use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Coordinate tolerance below which two points count as the same place,
/// roughly 1.1 km at French latitudes.
const SAME_LOCATION_TOLERANCE_DEG: f64 = 0.01;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Check whether two points are close enough to count as the same location
/// (within 0.01 degrees on both axes).
#[inline]
pub fn coordinates_match(a: GeoPoint, b: GeoPoint) -> bool {
    (a.lat - b.lat).abs() < SAME_LOCATION_TOLERANCE_DEG
        && (a.lng - b.lng).abs() < SAME_LOCATION_TOLERANCE_DEG
}
