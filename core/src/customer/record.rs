use crate::customer::coerce::parse_float_prefix;
use crate::math::geo::GeoPoint;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// One decoded customer entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub user_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CustomerRecord {
    pub fn new(user_id: i64, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            user_id,
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn has_valid_coordinates(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }

    pub fn summary(&self) -> CustomerSummary {
        CustomerSummary {
            user_id: self.user_id,
            name: self.name.clone(),
        }
    }
}

/// The `{ user_id, name }` projection written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub user_id: i64,
    pub name: String,
}

/// Coordinates arrive either as JSON strings or as JSON numbers. Any other
/// JSON value is accepted and coerces to `NaN` instead of failing the line.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CoordinateField {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl CoordinateField {
    fn coerce(field: Option<&CoordinateField>) -> f64 {
        match field {
            Some(CoordinateField::Number(value)) => *value,
            Some(CoordinateField::Text(text)) => parse_float_prefix(text),
            Some(CoordinateField::Other(_)) | None => f64::NAN,
        }
    }
}

/// Wire shape of a single input line before coordinate coercion.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCustomer {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<CoordinateField>,
    #[serde(default)]
    pub longitude: Option<CoordinateField>,
}

impl From<RawCustomer> for CustomerRecord {
    fn from(raw: RawCustomer) -> Self {
        Self {
            latitude: CoordinateField::coerce(raw.latitude.as_ref()),
            longitude: CoordinateField::coerce(raw.longitude.as_ref()),
            user_id: raw.user_id,
            name: raw.name,
        }
    }
}
