pub mod config;
pub mod domain;

pub use domain::customer::Customer;
pub use domain::filter::FilterField;
