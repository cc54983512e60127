pub mod coerce;
pub mod parser;
pub mod record;

pub use coerce::parse_float_prefix;
pub use parser::parse;
pub use record::{CustomerRecord, CustomerSummary};
