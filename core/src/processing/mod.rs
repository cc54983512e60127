pub mod finder;
pub mod radius;

pub use finder::{
    find_customers, read_customer_file, read_customers_within_radius, render_summaries,
    summarize, CustomerFinder,
};
pub use radius::{within_radius, RadiusFilter};
