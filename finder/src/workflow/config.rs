use anyhow::Context;
use custcore::math::GeoPoint;
use custcore::prelude::{FilterConfig, DEFAULT_RADIUS_M, OFFICE_LOCATION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Radius around the office in metres.
    pub radius_m: f64,
    pub office: GeoPoint,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            office: OFFICE_LOCATION,
        }
    }
}

impl FinderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading finder config {}", path_ref.display()))?;
        let config: FinderConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing finder config {}", path_ref.display()))?;
        anyhow::ensure!(
            config.radius_m >= 0.0,
            "radius_m must be non-negative, got {}",
            config.radius_m
        );
        Ok(config)
    }

    pub fn from_args(radius_m: f64) -> Self {
        Self {
            radius_m,
            ..Default::default()
        }
    }

    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            reference: self.office,
            radius_m: self.radius_m,
        }
    }
}
