use crate::api::ErrorResponse;
use crate::models::{RecipeDocument, RecipeResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Candidate fields for a new recipe. Nothing is required at this layer; the
/// store is the only place recipe content is constrained.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub level: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub image: Option<String>,
    pub duration: Option<f64>,
    pub is_archived: Option<bool>,
    pub created: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 500, description = "Store operation failed", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    let draft = RecipeDocument {
        id: None,
        title: request.title,
        instructions: request.instructions,
        level: request.level,
        ingredients: request.ingredients,
        image: request.image,
        duration: request.duration,
        is_archived: request.is_archived,
        created: request.created,
    };

    match store.insert(draft).await {
        Ok(recipe) => (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
