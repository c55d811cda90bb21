use crate::api::ErrorResponse;
use crate::models::RecipeResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "The recipe, or null if no recipe has this id", body = RecipeResponse),
        (status = 500, description = "Store operation failed (including malformed ids)", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(store): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match store.find_by_id(&id).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe.map(RecipeResponse::from))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
