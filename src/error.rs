use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("expected 5 fields in location record, found {found}")]
    FieldCount { found: usize },

    #[error("invalid location id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("coordinate ({latitude}, {longitude}) is out of range")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("location JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
