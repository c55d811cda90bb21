pub mod home;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (everything outside /recipes)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home::home))
}

#[derive(OpenApi)]
#[openapi(paths(home::home))]
pub struct ApiDoc;
