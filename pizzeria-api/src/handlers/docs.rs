use axum::{Json, Router, response::Html, routing::get};
use utoipa::OpenApi;

use super::{ApiDoc, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/openapi.json", get(openapi))
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    use super::super::test_support::*;

    #[tokio::test]
    async fn test_index() {
        let state = setup_state().await;
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(create_test_app(&state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>Code challenge</h1>");
    }

    #[tokio::test]
    async fn test_openapi_lists_every_route() {
        let state = setup_state().await;
        let (status, doc) =
            request_json(create_test_app(&state), "GET", "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/restaurants",
            "/restaurants/{id}",
            "/pizzas",
            "/restaurant_pizzas",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(paths["/restaurants/{id}"].get("delete").is_some());
    }
}
