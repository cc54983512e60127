use crate::customer::record::CustomerRecord;
use crate::math::geo::{distance, GeoPoint};
use crate::prelude::FilterConfig;
use crate::telemetry::log::LogManager;

/// Keeps the records lying strictly closer than `radius` metres to
/// `reference`, preserving input order. Records whose distance is `NaN`
/// never qualify.
pub fn within_radius(
    records: &[CustomerRecord],
    reference: &GeoPoint,
    radius: f64,
) -> Vec<CustomerRecord> {
    records
        .iter()
        .filter(|record| distance(reference, &record.location()) < radius)
        .cloned()
        .collect()
}

/// Radius-filter stage bound to a fixed reference point.
pub struct RadiusFilter {
    config: FilterConfig,
    logger: LogManager,
}

impl RadiusFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            logger: LogManager::new("radius"),
        }
    }

    pub fn apply(&self, records: &[CustomerRecord]) -> Vec<CustomerRecord> {
        let retained = within_radius(records, &self.config.reference, self.config.radius_m);
        self.logger.record(&format!(
            "retained {} of {} customers within {:.0} m",
            retained.len(),
            records.len(),
            self.config.radius_m
        ));
        retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::OFFICE_LOCATION;

    fn sample_customers() -> Vec<CustomerRecord> {
        vec![
            CustomerRecord::new(12, "Christina McArdle", 52.986375, -6.043701),
            CustomerRecord::new(1, "Alice Cahill", 51.92893, -10.27699),
            CustomerRecord::new(2, "Ian McArdle", 51.8856167, -10.4240951),
        ]
    }

    #[test]
    fn returns_customers_within_radius() {
        let customers = sample_customers();
        let picked = within_radius(&customers, &OFFICE_LOCATION, 100.0 * 1000.0);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0], customers[0]);
        assert_eq!(customers.len(), 3);
    }

    #[test]
    fn boundary_distance_is_excluded() {
        let customers = sample_customers();
        let exact = distance(&OFFICE_LOCATION, &customers[0].location());

        assert!(within_radius(&customers[..1], &OFFICE_LOCATION, exact).is_empty());
        assert_eq!(
            within_radius(&customers[..1], &OFFICE_LOCATION, exact + 1.0).len(),
            1
        );
    }

    #[test]
    fn nan_coordinates_are_never_within_radius() {
        let customers = vec![CustomerRecord::new(3, "Lost", f64::NAN, -6.0)];
        assert!(within_radius(&customers, &OFFICE_LOCATION, f64::INFINITY).is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let customers = vec![
            CustomerRecord::new(9, "Office B", 53.34, -6.26),
            CustomerRecord::new(4, "Office A", 53.3394, -6.2577),
        ];
        let filter = RadiusFilter::new(FilterConfig::with_radius(1000.0));
        let picked = filter.apply(&customers);
        let ids: Vec<i64> = picked.iter().map(|c| c.user_id).collect();
        assert_eq!(ids, vec![9, 4]);
    }
}
