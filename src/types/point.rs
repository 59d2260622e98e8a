use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed track sample. Optional fields stay `None` when the source
/// carried no reading; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    pub time: Option<DateTime<Utc>>,
    pub heart_rate: Option<u16>,
    pub cadence: Option<u16>,
    pub temperature: Option<f32>,
    /// Instantaneous speed in m/s, when the recording device supplied one.
    pub speed: Option<f64>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: None,
            time: None,
            heart_rate: None,
            cadence: None,
            temperature: None,
            speed: None,
        }
    }
}
