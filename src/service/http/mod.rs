use axum::{routing::get, Extension, Router};
use helloworld_core::{SearchMode, PERSONS_PATH};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::PersonService;

mod error;
pub mod greeting;
pub mod health;
pub mod person;

pub use error::HttpError;

pub fn http_router(person_service: Arc<PersonService>) -> Router {
    Router::new()
        .route("/", get(greeting::home))
        .route("/hello", get(greeting::hello))
        .route("/info", get(greeting::info))
        .route("/health", get(health::health))
        .route(PERSONS_PATH, get(person::list).post(person::create))
        .route(SearchMode::IgnoreCase.path(), get(person::search))
        .route(SearchMode::Exact.path(), get(person::search_exact))
        .route(SearchMode::Partial.path(), get(person::search_partial))
        .layer(Extension(person_service))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::http_router;
    use crate::models::Person;
    use crate::persistence::memory::MemoryPersistence;
    use crate::seed::seed_persons;
    use crate::services::PersonService;

    pub async fn seeded_router() -> Router {
        let person_service = PersonService::new(Box::new(MemoryPersistence::<Person>::default()));
        seed_persons(&person_service).await.unwrap();

        http_router(Arc::new(person_service))
    }

    pub async fn get(router: Router, uri: &str) -> Response<axum::body::BoxBody> {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response<axum::body::BoxBody>) -> T {
        assert_eq!(response.status(), StatusCode::OK);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

        serde_json::from_slice(&body).unwrap()
    }

    pub async fn read_text(response: Response<axum::body::BoxBody>) -> String {
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get(seeded_router().await, "/api/people").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
