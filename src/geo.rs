/// Spherical-earth radius in meters, matching the radius the rest of the
/// pipeline was calibrated against.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters (haversine).
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// 3-D segment distance: great-circle distance combined with the vertical
/// delta. Either elevation missing means the segment measures planar-only.
pub fn distance_3d(
    lat1: f64,
    lon1: f64,
    ele1: Option<f64>,
    lat2: f64,
    lon2: f64,
    ele2: Option<f64>,
) -> f64 {
    let planar = haversine_distance(lat1, lon1, lat2, lon2);
    match (ele1, ele2) {
        (Some(e1), Some(e2)) => (planar.powi(2) + (e2 - e1).powi(2)).sqrt(),
        _ => planar,
    }
}
