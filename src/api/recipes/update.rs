use crate::api::ErrorResponse;
use crate::models::{RecipeResponse, RecipeUpdate};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    request_body = RecipeUpdate,
    responses(
        (status = 200, description = "Post-update recipe state, or null if no recipe has this id", body = RecipeResponse),
        (status = 500, description = "Store operation failed (including malformed ids)", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RecipeUpdate>,
) -> impl IntoResponse {
    match store.update_by_id(&id, request).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe.map(RecipeResponse::from))).into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{body_json, memory_app, request};
    use axum::http::StatusCode;
    use mongodb::bson::oid::ObjectId;
    use tower::ServiceExt;

    #[tokio::test]
    async fn update_overwrites_submitted_fields_and_keeps_the_id() {
        let app = memory_app();
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/recipes",
                Some(serde_json::json!({
                    "title": "Pancakes",
                    "level": "Easy Peasy",
                    "duration": 20
                })),
            ))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/recipes/{id}"),
                Some(serde_json::json!({ "title": "Crepes" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Crepes");
        assert_eq!(body["level"], "Easy Peasy");
        assert_eq!(body["duration"], 20.0);
        assert_eq!(body["id"], created["id"]);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_null() {
        let id = ObjectId::new().to_hex();
        let response = memory_app()
            .oneshot(request(
                "PUT",
                &format!("/recipes/{id}"),
                Some(serde_json::json!({ "title": "Ghost recipe" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn update_with_empty_body_returns_the_unchanged_recipe() {
        let app = memory_app();
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/recipes",
                Some(serde_json::json!({ "title": "Pancakes" })),
            ))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/recipes/{id}"),
                Some(serde_json::json!({})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn update_malformed_id_returns_500() {
        let response = memory_app()
            .oneshot(request(
                "PUT",
                "/recipes/not-a-valid-id",
                Some(serde_json::json!({ "title": "Nope" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Failed to update recipe"
        );
    }
}
