use crate::workflow::config::FinderConfig;
use anyhow::Context;
use custcore::processing::CustomerFinder;
use log::info;
use std::path::Path;
use tokio::runtime::Builder;

#[derive(Clone)]
pub struct Runner {
    config: FinderConfig,
}

impl Runner {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Runs the customer pipeline on a current-thread runtime and returns the
    /// rendered CSV.
    pub fn execute(&self, path: &Path) -> anyhow::Result<String> {
        let finder = CustomerFinder::new(self.config.to_filter_config());
        info!(
            "searching {} for customers within {:.0} m of {:?}",
            path.display(),
            self.config.radius_m,
            self.config.office
        );
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for customer lookup")?;

        // Core errors already carry the user-facing message.
        let csv = runtime.block_on(finder.execute(path))?;
        Ok(csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_log() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/customers.log")
    }

    #[test]
    fn runner_lists_customers_within_default_radius() {
        let runner = Runner::new(FinderConfig::default());
        let csv = runner.execute(&sample_log()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "name,user_id");
        assert_eq!(lines[1], "\"Ian Kehoe\",4");
        assert_eq!(lines.last().copied(), Some("\"Lisa Ahearn\",39"));
        assert_eq!(lines.len(), 17);
    }

    #[test]
    fn runner_respects_configured_radius() {
        let runner = Runner::new(FinderConfig::from_args(20.0 * 1000.0));
        let csv = runner.execute(&sample_log()).unwrap();
        assert_eq!(csv, "name,user_id\n\"Ian Kehoe\",4");
    }

    #[test]
    fn runner_keeps_core_error_message() {
        let runner = Runner::new(FinderConfig::default());
        let err = runner.execute(Path::new("foobar")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Customer data file 'foobar' does not exist."
        );
    }
}
