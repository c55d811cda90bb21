use crate::api::ErrorResponse;
use crate::models::RecipeResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, in store order", body = [RecipeResponse]),
        (status = 500, description = "Store operation failed", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> impl IntoResponse {
    match store.list().await {
        Ok(recipes) => {
            let recipes: Vec<RecipeResponse> =
                recipes.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get all recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get all recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
