use axum::{extract::Query, Json};
use helloworld_core::{AppInfo, HelloQuery};

pub const APP_NAME: &str = "Hello World Application";

#[tracing::instrument(name = "http::home")]
pub async fn home() -> &'static str {
    "Hello World! Welcome to axum with Rust"
}

#[tracing::instrument(name = "http::hello", skip_all)]
pub async fn hello(Query(query): Query<HelloQuery>) -> String {
    let name = query
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "World".to_owned());

    format!("Hello, {name}!")
}

#[tracing::instrument(name = "http::info")]
pub async fn info() -> Json<AppInfo> {
    Json(AppInfo {
        name: APP_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        framework: "axum 0.5".to_owned(),
        language: "Rust".to_owned(),
    })
}
