use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use clientele_store::CustomerRepository;

#[derive(Clone)]
pub struct HealthState {
    repository: Arc<dyn CustomerRepository>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: HealthCheck,
    pub checked_at: String,
}

pub fn router(repository: Arc<dyn CustomerRepository>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { repository })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let resident = state.repository.list_all().await.len();

    let payload = HealthResponse {
        status: "ready",
        store: HealthCheck {
            status: "ready",
            detail: format!("{resident} customer records resident"),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};

    use clientele_core::Customer;
    use clientele_store::InMemoryCustomerRepository;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_the_resident_record_count() {
        let repository = Arc::new(InMemoryCustomerRepository::with_records(vec![
            Customer { id: "1".to_string(), ..Customer::default() },
            Customer { id: "2".to_string(), ..Customer::default() },
        ]));

        let (status, Json(payload)) = health(State(HealthState { repository })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.store.detail, "2 customer records resident");
    }

    #[tokio::test]
    async fn health_is_ready_even_when_the_store_is_empty() {
        let repository = Arc::new(InMemoryCustomerRepository::default());

        let (status, Json(payload)) = health(State(HealthState { repository })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.store.detail, "0 customer records resident");
    }
}
