use crate::db::memory::MemoryStore;
use crate::AppState;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;

/// The full application router over a fresh in-memory store.
pub fn memory_app() -> Router {
    let store: AppState = Arc::new(MemoryStore::new());
    crate::app(store)
}

/// Build a request for [`tower::ServiceExt::oneshot`], JSON body optional.
pub fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
