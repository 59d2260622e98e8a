#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Marker interval must be a positive number (got {0})")]
    NonPositiveInterval(f64),
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),
}
