//! Trajectory metrics and distance-marker placement over ordered GPS track
//! points: one pass accumulates 3-D distance, elevation, duration, speed and
//! sensor averages; a second walk places interpolated markers at fixed
//! distance intervals along the accumulated path.

pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod pipeline;
pub mod types;
pub mod units;

pub use config::AnalyzeConfig;
pub use error::MarkerError;
pub use pipeline::{analyze, place_markers};
pub use types::marker::{DistanceMarker, MarkerOptions};
pub use types::point::TrackPoint;
pub use types::track::{AnalyzedTrack, DistancePoint, ProfileSample, TrackMetrics};
pub use units::DistanceUnit;
