use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 204, description = "Recipe deleted (or no recipe had this id)"),
        (status = 500, description = "Store operation failed (including malformed ids)", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match store.delete_by_id(&id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete recipe".to_string(),
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
    use http_body_util::BodyExt;
    use mongodb::bson::oid::ObjectId;
    use tower::ServiceExt;

    #[tokio::test]
    async fn delete_returns_204_and_removes_the_recipe() {
        let app = memory_app();
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/recipes",
                Some(serde_json::json!({ "title": "Gazpacho" })),
            ))
            .await
            .unwrap();
        let id = body_json(created).await["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(request("DELETE", &format!("/recipes/{id}"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        let lookup = app
            .clone()
            .oneshot(request("GET", &format!("/recipes/{id}"), None))
            .await
            .unwrap();
        assert_eq!(lookup.status(), StatusCode::OK);
        assert_eq!(body_json(lookup).await, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn delete_unknown_id_still_returns_204() {
        let id = ObjectId::new().to_hex();
        let response = memory_app()
            .oneshot(request("DELETE", &format!("/recipes/{id}"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_malformed_id_returns_500() {
        let response = memory_app()
            .oneshot(request("DELETE", "/recipes/not-a-valid-id", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Failed to delete recipe"
        );
    }
}
