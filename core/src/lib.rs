//! Core of the customer radius finder.
//!
//! Parses line-delimited customer records, keeps those within a great-circle
//! radius of the office and renders the selection as CSV.

pub mod customer;
pub mod encoding;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use customer::{CustomerRecord, CustomerSummary};
pub use math::GeoPoint;
pub use prelude::{FilterConfig, FinderError, FinderResult};
pub use processing::CustomerFinder;
