//! Great-circle distance on a spherical Earth.
//!
//! The endpoint-distance heuristic and the drawing layer both assume the
//! classic haversine formula with a 6371 km radius, so the formula is spelled
//! out here instead of delegating to `geo`'s mean-radius implementation.

use geo::Point;

/// Spherical Earth radius, kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Points follow the geo convention (x longitude, y latitude, degrees).
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let half_dlat = (b.y() - a.y()).to_radians() / 2.0;
    let half_dlon = (b.x() - a.x()).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    // Clamp guards against rounding pushing h past 1 for near-antipodal pairs.
    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}
