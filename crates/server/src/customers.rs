//! Customer collection endpoints.
//!
//! - `GET    /customers`                        — list in insertion order
//! - `POST   /customers`                        — append a decoded record
//! - `GET    /customers/{id}`                   — first record with that id
//! - `PUT    /customers/{id}`                   — full-record replace by path id
//! - `DELETE /customers/{id}`                   — remove first match
//! - `GET    /customers/filter/{field}/{value}` — equality filter
//!
//! Status signaling is the only boundary responsibility: the store reports
//! found/not-found and the handlers translate that into 200/201/304/404,
//! with 400 reserved for queries the store refuses outright.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::info;

use clientele_core::Customer;
use clientele_store::CustomerRepository;

#[derive(Clone)]
pub struct CustomersState {
    repository: Arc<dyn CustomerRepository>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(repository: Arc<dyn CustomerRepository>) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/customers/filter/{field}/{value}", get(filter_customers))
        .layer(middleware::from_fn(log_requests))
        .with_state(CustomersState { repository })
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        event_name = "http.request.completed",
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}

async fn list_customers(State(state): State<CustomersState>) -> Json<Vec<Customer>> {
    Json(state.repository.list_all().await)
}

async fn get_customer(
    Path(id): Path<String>,
    State(state): State<CustomersState>,
) -> (StatusCode, Json<Customer>) {
    match state.repository.find_by_id(&id).await {
        Some(record) => (StatusCode::OK, Json(record)),
        // Not-found carries an empty record body; the status code is the
        // signal, since a genuinely empty record is indistinguishable.
        None => (StatusCode::NOT_FOUND, Json(Customer::default())),
    }
}

async fn create_customer(
    State(state): State<CustomersState>,
    Json(record): Json<Customer>,
) -> (StatusCode, Json<ActionResponse>) {
    let id = record.id.clone();
    state.repository.create(record).await;

    (
        StatusCode::CREATED,
        Json(ActionResponse { message: format!("customer `{id}` successfully created") }),
    )
}

async fn update_customer(
    Path(id): Path<String>,
    State(state): State<CustomersState>,
    Json(replacement): Json<Customer>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<ApiError>)> {
    if state.repository.update_by_id(&id, replacement).await {
        Ok(Json(ActionResponse { message: format!("customer `{id}` replaced") }))
    } else {
        Err((
            StatusCode::NOT_MODIFIED,
            Json(ApiError { error: format!("no customer with id `{id}` found") }),
        ))
    }
}

async fn delete_customer(
    Path(id): Path<String>,
    State(state): State<CustomersState>,
) -> Result<Json<Customer>, (StatusCode, Json<ApiError>)> {
    match state.repository.delete_by_id(&id).await {
        Some(removed) => Ok(Json(removed)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError { error: format!("no customer with id `{id}` found") }),
        )),
    }
}

async fn filter_customers(
    Path((field, value)): Path<(String, String)>,
    State(state): State<CustomersState>,
) -> Result<Json<Vec<Customer>>, (StatusCode, Json<ApiError>)> {
    match state.repository.filter_by(&field, &value).await {
        Ok(matches) => Ok(Json(matches)),
        Err(error) => Err((StatusCode::BAD_REQUEST, Json(ApiError { error: error.to_string() }))),
    }
}
