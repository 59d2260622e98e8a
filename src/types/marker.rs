use serde::{Deserialize, Serialize};

use crate::error::MarkerError;
use crate::units::DistanceUnit;

/// A synthetic point interpolated onto the trajectory at an exact multiple of
/// the configured interval. Produced fresh on every placement call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMarker {
    pub lat: f64,
    pub lon: f64,
    /// Cumulative distance along the path, in meters.
    pub distance_m: f64,
    /// Human-readable label, e.g. "3 km" or "0.5 mi".
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct MarkerOptions {
    /// Marker spacing, expressed in `unit`.
    pub interval: f64,
    pub unit: DistanceUnit,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            interval: 1.0,
            unit: DistanceUnit::Kilometers,
        }
    }
}

impl MarkerOptions {
    /// Validating constructor for caller-supplied configuration.
    pub fn parse(interval: f64, unit: &str) -> Result<Self, MarkerError> {
        // Also rejects NaN.
        if !(interval > 0.0) {
            return Err(MarkerError::NonPositiveInterval(interval));
        }
        let unit =
            DistanceUnit::from_str(unit).ok_or_else(|| MarkerError::UnknownUnit(unit.to_string()))?;
        Ok(Self { interval, unit })
    }

    /// Marker spacing converted to meters.
    pub fn interval_meters(&self) -> f64 {
        self.interval * self.unit.meters()
    }
}
