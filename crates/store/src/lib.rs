pub mod fixtures;
pub mod repositories;

pub use fixtures::{load_from_path, SeedError};
pub use repositories::{CustomerRepository, InMemoryCustomerRepository, StoreError};
