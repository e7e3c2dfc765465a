use axum::{extract::Query, Extension, Json};
use helloworld_core::{NameQuery, PersonMessage};
use std::sync::Arc;

use super::HttpError;
use crate::models::Person;
use crate::services::PersonService;

type PersonsResponse = Result<Json<Vec<PersonMessage>>, HttpError>;

fn to_messages(persons: Vec<Person>) -> Json<Vec<PersonMessage>> {
    Json(persons.into_iter().map(PersonMessage::from).collect())
}

#[tracing::instrument(name = "http::person::list", skip_all)]
pub async fn list(Extension(service): Extension<Arc<PersonService>>) -> PersonsResponse {
    let persons = service.list().await?;

    Ok(to_messages(persons))
}

#[tracing::instrument(name = "http::person::search", skip_all, fields(name = %query.name))]
pub async fn search(
    Extension(service): Extension<Arc<PersonService>>,
    Query(query): Query<NameQuery>,
) -> PersonsResponse {
    let persons = service.get_by_name_ignore_case(&query.name).await?;

    Ok(to_messages(persons))
}

#[tracing::instrument(name = "http::person::search_exact", skip_all, fields(name = %query.name))]
pub async fn search_exact(
    Extension(service): Extension<Arc<PersonService>>,
    Query(query): Query<NameQuery>,
) -> PersonsResponse {
    let persons = service.get_by_name(&query.name).await?;

    Ok(to_messages(persons))
}

#[tracing::instrument(name = "http::person::search_partial", skip_all, fields(name = %query.name))]
pub async fn search_partial(
    Extension(service): Extension<Arc<PersonService>>,
    Query(query): Query<NameQuery>,
) -> PersonsResponse {
    let persons = service.search_by_name(&query.name).await?;

    Ok(to_messages(persons))
}

#[tracing::instrument(name = "http::person::create", skip_all)]
pub async fn create(
    Extension(service): Extension<Arc<PersonService>>,
    Json(person): Json<PersonMessage>,
) -> Result<Json<PersonMessage>, HttpError> {
    let person: Person = person.into();
    let saved = service.upsert(&person).await?;

    Ok(Json(saved.into()))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use helloworld_core::PersonMessage;
    use tower::ServiceExt;

    use crate::http::tests::{get, read_json, seeded_router};

    async fn post_json(router: Router, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/persons")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_list() {
        let response = get(seeded_router().await, "/api/persons").await;
        let persons: Vec<PersonMessage> = read_json(response).await;

        assert_eq!(persons.len(), 5);
        assert!(persons.iter().all(|person| person.id.is_some()));
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let response = get(seeded_router().await, "/api/persons/search?name=john%20doe").await;
        let persons: Vec<PersonMessage> = read_json(response).await;

        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].name, "John Doe");
    }

    #[tokio::test]
    async fn test_search_exact_is_case_sensitive() {
        let response = get(seeded_router().await, "/api/persons/search-exact?name=john%20doe").await;
        let persons: Vec<PersonMessage> = read_json(response).await;
        assert!(persons.is_empty());

        let response = get(seeded_router().await, "/api/persons/search-exact?name=John%20Doe").await;
        let persons: Vec<PersonMessage> = read_json(response).await;
        assert_eq!(persons.len(), 1);
    }

    #[tokio::test]
    async fn test_search_partial() {
        let response = get(seeded_router().await, "/api/persons/search-partial?name=SMITH").await;
        let persons: Vec<PersonMessage> = read_json(response).await;

        let names: Vec<&str> = persons.iter().map(|person| person.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "John Smith"]);
    }

    #[tokio::test]
    async fn test_search_requires_name() {
        let response = get(seeded_router().await, "/api/persons/search").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let router = seeded_router().await;

        let response = post_json(
            router.clone(),
            r#"{"name":"Carol White","email":"carol.white@example.com"}"#.to_owned(),
        )
        .await;
        let saved: PersonMessage = read_json(response).await;

        assert_eq!(saved.id, Some(6));
        assert_eq!(saved.name, "Carol White");

        let response = get(router, "/api/persons/search?name=carol%20white").await;
        let persons: Vec<PersonMessage> = read_json(response).await;
        assert_eq!(persons, vec![saved]);
    }

    #[tokio::test]
    async fn test_create_with_id_updates() {
        let router = seeded_router().await;

        let response = post_json(
            router.clone(),
            r#"{"id":1,"name":"John Doe","email":"jd@example.com"}"#.to_owned(),
        )
        .await;
        let saved: PersonMessage = read_json(response).await;
        assert_eq!(saved.id, Some(1));

        let response = get(router, "/api/persons").await;
        let persons: Vec<PersonMessage> = read_json(response).await;
        assert_eq!(persons.len(), 5);
        assert_eq!(persons[0].email, "jd@example.com");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_body() {
        let response = post_json(seeded_router().await, r#"{"email":"x@example.com"}"#.to_owned()).await;

        assert!(response.status().is_client_error());
    }
}
