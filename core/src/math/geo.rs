use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Circumference of the earth used for every distance (in metres).
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075.0 * 1000.0;

/// A latitude/longitude pair expressed in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }
}

/// Radius of the sphere derived from [`EARTH_CIRCUMFERENCE_M`].
pub fn earth_radius_m() -> f64 {
    EARTH_CIRCUMFERENCE_M / (2.0 * PI)
}

pub fn to_radian(degree: f64) -> f64 {
    (PI / 180.0) * degree
}

/// Great-circle distance in metres between `p` and `q`, using the spherical
/// law of cosines:
///
/// ```text
/// d = R * acos(sin(p_lat) * sin(q_lat) + cos(p_lat) * cos(q_lat) * cos(|p_lon - q_lon|))
/// ```
///
/// Rounding can push the cosine marginally outside `[-1, 1]` for (near)
/// identical or antipodal points, so it is clamped before `acos`.
pub fn distance(p: &GeoPoint, q: &GeoPoint) -> f64 {
    // acos is ill-conditioned next to 1.0; identical points are exactly 0 apart.
    if p == q {
        return 0.0;
    }

    let p_lat = to_radian(p.latitude);
    let p_lon = to_radian(p.longitude);
    let q_lat = to_radian(q.latitude);
    let q_lon = to_radian(q.longitude);

    let cosine =
        p_lat.sin() * q_lat.sin() + p_lat.cos() * q_lat.cos() * (p_lon - q_lon).abs().cos();

    // clamp() keeps NaN as NaN, which the radius filter then rejects.
    earth_radius_m() * cosine.clamp(-1.0, 1.0).acos()
}
