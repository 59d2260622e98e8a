/// Time deltas at or above this threshold count as a stop or GPS gap and are
/// excluded from moving time.
const DEFAULT_MAX_POINT_INTERVAL_MS: i64 = 15_000;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub max_point_interval_ms: i64,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            max_point_interval_ms: DEFAULT_MAX_POINT_INTERVAL_MS,
        }
    }
}

impl AnalyzeConfig {
    pub fn from_env() -> Self {
        let max_point_interval_ms = std::env::var("MAX_POINT_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_POINT_INTERVAL_MS);

        Self {
            max_point_interval_ms,
        }
    }
}
