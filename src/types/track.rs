use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::point::TrackPoint;
use crate::units::DistanceUnit;

const HOUR_MS: f64 = 3_600_000.0;

/// Cumulative metrics over one trajectory. Averages and extrema are `None`
/// when no point ever carried the underlying field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetrics {
    /// Total 3-D distance in meters.
    pub distance_m: f64,
    pub elevation_gain_m: f64,
    pub elevation_loss_m: f64,
    pub elevation_max_m: Option<f64>,
    pub elevation_min_m: Option<f64>,
    pub duration_total_ms: i64,
    pub duration_moving_ms: i64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Running maximum of per-point speed in m/s.
    pub max_speed_ms: f64,
    pub avg_heart_rate: Option<u16>,
    pub avg_cadence: Option<u16>,
    pub avg_temperature: Option<i16>,
}

impl TrackMetrics {
    /// Average speed over moving time, in `unit` per hour. 0 when the track
    /// has no moving time.
    pub fn moving_speed(&self, unit: DistanceUnit) -> f64 {
        if self.duration_moving_ms == 0 {
            return 0.0;
        }
        (self.distance_m / unit.meters()) / (self.duration_moving_ms as f64 / HOUR_MS)
    }

    /// Average speed over total elapsed time, in `unit` per hour.
    pub fn total_speed(&self, unit: DistanceUnit) -> f64 {
        if self.duration_total_ms == 0 {
            return 0.0;
        }
        (self.distance_m / unit.meters()) / (self.duration_total_ms as f64 / HOUR_MS)
    }

    /// Moving pace: milliseconds spent per one `unit` of distance. 0 when no
    /// distance was covered.
    pub fn moving_pace(&self, unit: DistanceUnit) -> f64 {
        let distance = self.distance_m / unit.meters();
        if distance == 0.0 {
            return 0.0;
        }
        self.duration_moving_ms as f64 / distance
    }
}

/// One entry of the distance-indexed path: the cumulative 3-D distance from
/// the trajectory start up to and including this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistancePoint {
    pub distance_m: f64,
    pub point: TrackPoint,
}

/// A sample of some per-point quantity indexed by cumulative distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub distance_m: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedTrack {
    pub metrics: TrackMetrics,
    pub path: Vec<DistancePoint>,
}

impl AnalyzedTrack {
    /// Distance-indexed elevation series over the points that carried an
    /// elevation reading.
    pub fn elevation_profile(&self) -> Vec<ProfileSample> {
        self.path
            .iter()
            .filter_map(|dp| {
                dp.point.elevation.map(|ele| ProfileSample {
                    distance_m: dp.distance_m,
                    value: ele,
                })
            })
            .collect()
    }

    /// Distance-indexed heart-rate series over the points that carried a
    /// heart-rate reading.
    pub fn heart_rate_profile(&self) -> Vec<ProfileSample> {
        self.path
            .iter()
            .filter_map(|dp| {
                dp.point.heart_rate.map(|hr| ProfileSample {
                    distance_m: dp.distance_m,
                    value: hr as f64,
                })
            })
            .collect()
    }
}
