use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "HTML greeting", content_type = "text/html", body = String)
    )
)]
pub async fn home() -> Html<&'static str> {
    Html("<h1>Larder | recipe collection API</h1>")
}

#[cfg(test)]
mod tests {
    use crate::test_util::memory_app;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn home_serves_an_html_greeting() {
        let response = memory_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("<h1>"));
    }
}
