use crate::core::distance::{coordinates_match, haversine_distance};
use crate::models::GeoPoint;

/// Fallback centroid when a location name cannot be resolved.
pub const PARIS: GeoPoint = GeoPoint { lat: 48.8566, lng: 2.3522 };

/// Approximate centroids of the largest French cities, matched by substring
/// against normalized location names ("Lyon 3e" resolves to Lyon).
const CITY_CENTROIDS: &[(&str, GeoPoint)] = &[
    ("paris", PARIS),
    ("lyon", GeoPoint { lat: 45.7578, lng: 4.8320 }),
    ("marseille", GeoPoint { lat: 43.2965, lng: 5.3698 }),
    ("toulouse", GeoPoint { lat: 43.6047, lng: 1.4442 }),
    ("nice", GeoPoint { lat: 43.7102, lng: 7.2620 }),
    ("nantes", GeoPoint { lat: 47.2184, lng: -1.5536 }),
    ("strasbourg", GeoPoint { lat: 48.5734, lng: 7.7521 }),
    ("montpellier", GeoPoint { lat: 43.6108, lng: 3.8767 }),
    ("bordeaux", GeoPoint { lat: 44.8378, lng: -0.5792 }),
    ("lille", GeoPoint { lat: 50.6292, lng: 3.0573 }),
    ("rennes", GeoPoint { lat: 48.1173, lng: -1.6778 }),
    ("reims", GeoPoint { lat: 49.2583, lng: 4.0317 }),
    ("saint-etienne", GeoPoint { lat: 45.4397, lng: 4.3872 }),
    ("toulon", GeoPoint { lat: 43.1242, lng: 5.9280 }),
    ("grenoble", GeoPoint { lat: 45.1885, lng: 5.7245 }),
    ("angers", GeoPoint { lat: 47.4784, lng: -0.5632 }),
    ("dijon", GeoPoint { lat: 47.3220, lng: 5.0415 }),
    ("nîmes", GeoPoint { lat: 43.8367, lng: 4.3601 }),
    ("le mans", GeoPoint { lat: 48.0061, lng: 0.1996 }),
];

/// Resolve a location name to approximate coordinates. Unknown names default
/// to Paris.
pub fn resolve_city(name: &str) -> GeoPoint {
    let normalized = name.trim().to_lowercase();

    for (city, coords) in CITY_CENTROIDS {
        if normalized.contains(city) {
            return *coords;
        }
    }

    PARIS
}

/// Location sub-score in [0, 1] together with the commute distance when both
/// sides are resolved.
///
/// Fully-remote offers score high no matter where the candidate lives.
/// Otherwise identical coordinates are a perfect match and the score follows
/// commute-distance bands; beyond 100 km the candidate's willingness to
/// relocate decides. Either side unresolved is neutral.
pub fn score_location(
    candidate: Option<GeoPoint>,
    willing_to_relocate: bool,
    offer: Option<GeoPoint>,
    offer_fully_remote: bool,
) -> (f64, Option<f64>) {
    match (candidate, offer) {
        (Some(home), Some(workplace)) => {
            let distance = haversine_distance(home.lat, home.lng, workplace.lat, workplace.lng);

            if offer_fully_remote {
                return (0.9, Some(distance));
            }
            if coordinates_match(home, workplace) {
                return (1.0, Some(distance));
            }

            let score = if distance <= 10.0 {
                0.95
            } else if distance <= 30.0 {
                0.8
            } else if distance <= 50.0 {
                0.6
            } else if distance <= 100.0 {
                0.4
            } else if willing_to_relocate {
                0.7
            } else {
                0.2
            };
            (score, Some(distance))
        }
        _ => {
            if offer_fully_remote {
                (0.9, None)
            } else {
                (0.5, None)
            }
        }
    }
}
