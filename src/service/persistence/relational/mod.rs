use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

mod person;

pub use person::PersonRelationalPersistence;

/// Opens a connection pool and brings the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Arc<PgPool>> {
    let db = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&db).await?;

    Ok(Arc::new(db))
}
