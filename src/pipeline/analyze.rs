use crate::config::AnalyzeConfig;
use crate::geo;
use crate::types::point::TrackPoint;
use crate::types::track::{AnalyzedTrack, DistancePoint, TrackMetrics};

/// Walks the point list once, front to back, accumulating every metric and
/// recording the cumulative 3-D distance against each point.
///
/// Never fails: an empty list yields zeroed totals, `None` for every average
/// and extremum, and an empty path.
pub fn analyze(points: &[TrackPoint], config: &AnalyzeConfig) -> AnalyzedTrack {
    let mut distance_m = 0.0;
    let mut elevation_gain_m = 0.0;
    let mut elevation_loss_m = 0.0;
    let mut elevation_max_m: Option<f64> = None;
    let mut elevation_min_m: Option<f64> = None;
    let mut duration_total_ms: i64 = 0;
    let mut duration_moving_ms: i64 = 0;
    let mut start_time = None;
    let mut end_time = None;
    let mut max_speed_ms: f64 = 0.0;

    let mut hr_sum: u64 = 0;
    let mut hr_count: u64 = 0;
    let mut cadence_sum: u64 = 0;
    let mut cadence_count: u64 = 0;
    let mut temperature_sum: f64 = 0.0;
    let mut temperature_count: u64 = 0;

    let mut path = Vec::with_capacity(points.len());
    // Previous point's (lat, lon, effective elevation, sentinel-resolved
    // timestamp in ms).
    let mut prev: Option<(f64, f64, Option<f64>, i64)> = None;

    for point in points {
        // A point without elevation inherits the previous point's reading.
        let elevation = point.elevation.or(prev.and_then(|(_, _, ele, _)| ele));
        // Missing timestamps degrade to the epoch sentinel for delta math.
        let time_ms = point.time.map(|t| t.timestamp_millis()).unwrap_or(0);

        if let Some(ele) = elevation {
            elevation_max_m = Some(elevation_max_m.map_or(ele, |max| max.max(ele)));
            elevation_min_m = Some(elevation_min_m.map_or(ele, |min| min.min(ele)));
        }

        match prev {
            Some((prev_lat, prev_lon, prev_ele, prev_time_ms)) => {
                let segment_m =
                    geo::distance_3d(prev_lat, prev_lon, prev_ele, point.lat, point.lon, elevation);
                distance_m += segment_m;

                if let (Some(a), Some(b)) = (prev_ele, elevation) {
                    let delta = b - a;
                    if delta > 0.0 {
                        elevation_gain_m += delta;
                    } else {
                        elevation_loss_m += delta.abs();
                    }
                }

                let delta_ms = (time_ms - prev_time_ms).abs();
                duration_total_ms += delta_ms;
                if delta_ms < config.max_point_interval_ms {
                    duration_moving_ms += delta_ms;
                }

                let speed = point.speed.unwrap_or(if delta_ms > 0 {
                    segment_m / delta_ms as f64 * 1000.0
                } else {
                    0.0
                });
                max_speed_ms = max_speed_ms.max(speed);
            }
            None => {
                start_time = point.time;
                if let Some(speed) = point.speed {
                    max_speed_ms = max_speed_ms.max(speed);
                }
            }
        }
        end_time = point.time;

        if let Some(hr) = point.heart_rate {
            hr_sum += u64::from(hr);
            hr_count += 1;
        }
        if let Some(cadence) = point.cadence {
            cadence_sum += u64::from(cadence);
            cadence_count += 1;
        }
        if let Some(temperature) = point.temperature {
            temperature_sum += f64::from(temperature);
            temperature_count += 1;
        }

        path.push(DistancePoint {
            distance_m,
            point: point.clone(),
        });
        prev = Some((point.lat, point.lon, elevation, time_ms));
    }

    let metrics = TrackMetrics {
        distance_m,
        elevation_gain_m,
        elevation_loss_m,
        elevation_max_m,
        elevation_min_m,
        duration_total_ms,
        duration_moving_ms,
        start_time,
        end_time,
        max_speed_ms,
        avg_heart_rate: average(hr_sum as f64, hr_count).map(|v| v as u16),
        avg_cadence: average(cadence_sum as f64, cadence_count).map(|v| v as u16),
        avg_temperature: average(temperature_sum, temperature_count).map(|v| v as i16),
    };

    tracing::debug!(
        "Analyzed {} points: {:.1} m, {} ms total / {} ms moving",
        points.len(),
        metrics.distance_m,
        metrics.duration_total_ms,
        metrics.duration_moving_ms
    );

    AnalyzedTrack { metrics, path }
}

/// Rounded arithmetic mean; `None` when there were no samples, so a missing
/// sensor never reads as a zero average.
fn average(sum: f64, count: u64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some((sum / count as f64).round())
}
