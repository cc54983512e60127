use crate::customer::parser::parse;
use crate::customer::record::{CustomerRecord, CustomerSummary};
use crate::encoding::csv::to_csv_records;
use crate::prelude::{FilterConfig, FinderError, FinderResult};
use crate::processing::radius::RadiusFilter;
use crate::telemetry::log::LogManager;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole customer file, mapping a missing file to
/// [`FinderError::FileNotFound`] with the path exactly as supplied.
pub async fn read_customer_file(path: &Path) -> FinderResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            FinderError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            FinderError::Io(err)
        }
    })
}

/// Reads and parses the customer file and keeps the customers inside the
/// configured radius, in file order.
pub async fn read_customers_within_radius(
    path: &Path,
    config: &FilterConfig,
) -> FinderResult<Vec<CustomerRecord>> {
    let raw = read_customer_file(path).await?;
    let customers = parse(&raw)?;
    Ok(RadiusFilter::new(*config).apply(&customers))
}

/// Projects records to `{ user_id, name }` and stable-sorts them by id.
pub fn summarize(records: &[CustomerRecord]) -> Vec<CustomerSummary> {
    let mut summaries: Vec<CustomerSummary> =
        records.iter().map(CustomerRecord::summary).collect();
    summaries.sort_by_key(|summary| summary.user_id);
    summaries
}

pub async fn find_customers(
    path: &Path,
    config: &FilterConfig,
) -> FinderResult<Vec<CustomerSummary>> {
    let retained = read_customers_within_radius(path, config).await?;
    Ok(summarize(&retained))
}

pub fn render_summaries(summaries: &[CustomerSummary]) -> FinderResult<String> {
    to_csv_records(summaries)
}

/// End-to-end driver: file in, CSV text out.
#[derive(Debug, Clone)]
pub struct CustomerFinder {
    config: FilterConfig,
}

impl CustomerFinder {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, path: &Path) -> FinderResult<String> {
        let logger = LogManager::new("finder");
        logger.detail(&format!("reading customers from {}", path.display()));

        let summaries = find_customers(path, &self.config).await?;
        logger.record(&format!("selected {} customers", summaries.len()));

        render_summaries(&summaries)
    }
}

impl Default for CustomerFinder {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
