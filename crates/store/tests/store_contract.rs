//! End-to-end contract over the store's public surface: seed, list, delete,
//! re-delete, mirroring the way the service exercises it at runtime.

use std::fs;

use tempfile::TempDir;

use clientele_core::Customer;
use clientele_store::{load_from_path, CustomerRepository, InMemoryCustomerRepository};

#[tokio::test]
async fn seeded_store_supports_the_full_delete_lifecycle() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("customers.json");
    fs::write(
        &path,
        r#"[
            {"id": "1", "name": "B", "city": "Honu"},
            {"id": "2", "name": "C", "city": "Zandu"}
        ]"#,
    )
    .expect("write seed");

    let records = load_from_path(&path).expect("seed loads");
    let repo = InMemoryCustomerRepository::with_records(records);

    let all = repo.list_all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "1");
    assert_eq!(all[1].id, "2");

    let removed = repo.delete_by_id("1").await.expect("id 1 is present");
    assert_eq!(removed.name, "B");
    assert_eq!(removed.city, "Honu");

    let remaining = repo.list_all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");

    assert_eq!(repo.delete_by_id("1").await, None, "second delete is a miss");
}

#[tokio::test]
async fn created_records_are_visible_to_lookup_and_filter() {
    let repo = InMemoryCustomerRepository::default();

    repo.create(Customer {
        id: "7".to_string(),
        name: "Hale".to_string(),
        city: "Honu".to_string(),
        ..Customer::default()
    })
    .await;

    assert_eq!(repo.list_all().await.len(), 1);
    assert_eq!(repo.find_by_id("7").await.expect("present").name, "Hale");

    let matches = repo.filter_by("city", "Honu").await.expect("city is filterable");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "7");
}
