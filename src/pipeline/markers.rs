use crate::error::MarkerError;
use crate::types::marker::{DistanceMarker, MarkerOptions};
use crate::types::track::DistancePoint;

/// Emits one marker for every whole interval of distance the path covers,
/// positioned by linear interpolation between the two bracketing points.
///
/// A path with fewer than two points yields no markers.
pub fn place_markers(
    path: &[DistancePoint],
    options: &MarkerOptions,
) -> Result<Vec<DistanceMarker>, MarkerError> {
    // Also rejects NaN.
    if !(options.interval > 0.0) {
        return Err(MarkerError::NonPositiveInterval(options.interval));
    }

    let interval_m = options.interval_meters();
    let mut markers = Vec::new();
    let mut k: u64 = 1;

    for pair in path.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);

        // Emit every interval multiple this segment reaches, including one
        // landing exactly on its far end.
        loop {
            let target_m = k as f64 * interval_m;
            if target_m > b.distance_m {
                break;
            }

            let span = b.distance_m - a.distance_m;
            let fraction = if span > 0.0 {
                (target_m - a.distance_m) / span
            } else {
                0.0
            };

            markers.push(DistanceMarker {
                lat: a.point.lat + (b.point.lat - a.point.lat) * fraction,
                lon: a.point.lon + (b.point.lon - a.point.lon) * fraction,
                distance_m: target_m,
                label: format!(
                    "{} {}",
                    format_quantity(k as f64 * options.interval),
                    options.unit.abbrev()
                ),
            });
            k += 1;
        }
    }

    tracing::debug!("Placed {} markers at {:.0} m spacing", markers.len(), interval_m);

    Ok(markers)
}

/// Drops a redundant trailing ".0" so whole counts read "3 km", not "3.0 km".
fn format_quantity(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
