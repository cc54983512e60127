pub mod geo;

pub use geo::{distance, earth_radius_m, to_radian, GeoPoint, EARTH_CIRCUMFERENCE_M};
