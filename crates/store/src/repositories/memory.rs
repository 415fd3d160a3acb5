use tokio::sync::RwLock;

use clientele_core::{Customer, FilterField};

use super::{CustomerRepository, StoreError};

/// Lock-guarded in-memory collection. Reads take the shared lock, mutations
/// the exclusive lock; every operation is a single lock-scoped linear scan.
///
/// The backing `Vec` stays unindexed: first-match-wins resolution over
/// insertion order is observable behavior that callers test against.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    records: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn with_records(records: Vec<Customer>) -> Self {
        Self { records: RwLock::new(records) }
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, record: Customer) {
        let mut records = self.records.write().await;
        records.push(record);
    }

    async fn list_all(&self) -> Vec<Customer> {
        let records = self.records.read().await;
        records.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Customer> {
        let records = self.records.read().await;
        records.iter().find(|record| record.id == id).cloned()
    }

    async fn update_by_id(&self, id: &str, replacement: Customer) -> bool {
        let mut records = self.records.write().await;
        match records.iter().position(|record| record.id == id) {
            Some(index) => {
                records[index] = replacement;
                true
            }
            None => false,
        }
    }

    async fn delete_by_id(&self, id: &str) -> Option<Customer> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|record| record.id == id)?;
        Some(records.remove(index))
    }

    async fn filter_by(&self, field: &str, value: &str) -> Result<Vec<Customer>, StoreError> {
        let field = FilterField::parse(field)
            .ok_or_else(|| StoreError::UnsupportedFilter(field.to_string()))?;

        let records = self.records.read().await;
        Ok(records.iter().filter(|record| field.matches(record, value)).cloned().collect())
    }
}
