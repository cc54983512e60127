use crate::math::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Coordinates of the office every customer distance is measured from.
pub const OFFICE_LOCATION: GeoPoint = GeoPoint::new(53.339428, -6.257664);

/// Radius around the office a customer must lie within (in metres).
pub const DEFAULT_RADIUS_M: f64 = 100.0 * 1000.0;

/// Shared configuration for the radius filter and the pipeline driving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub reference: GeoPoint,
    pub radius_m: f64,
}

impl FilterConfig {
    pub fn with_radius(radius_m: f64) -> Self {
        Self {
            radius_m,
            ..Default::default()
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reference: OFFICE_LOCATION,
            radius_m: DEFAULT_RADIUS_M,
        }
    }
}

/// Common error type for reading, parsing and rendering customer data.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    #[error("Customer data file '{path}' does not exist.")]
    FileNotFound { path: String },
    #[error("Unable to parse customer data, invalid input.")]
    DataFormat(#[source] serde_json::Error),
    #[error("unable to encode csv row: {0}")]
    Encoding(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type FinderResult<T> = Result<T, FinderError>;
