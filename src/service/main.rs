use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helloworld::config::ServiceConfig;
use helloworld::http::http_router;
use helloworld::models::Person;
use helloworld::persistence::memory::MemoryPersistence;
use helloworld::persistence::relational::{self, PersonRelationalPersistence};
use helloworld::persistence::PersonPersistence;
use helloworld::seed::seed_persons;
use helloworld::services::PersonService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let config = ServiceConfig::from_env()?;

    let persistence: Box<dyn PersonPersistence> = match &config.database_url {
        Some(database_url) => {
            let db = relational::connect(database_url, config.max_connections).await?;

            Box::new(PersonRelationalPersistence { db })
        }
        None => {
            tracing::warn!("DATABASE_URL not set, persons are kept in memory");

            Box::new(MemoryPersistence::<Person>::default())
        }
    };

    let person_service = Arc::new(PersonService::new(persistence));

    if config.seed_data {
        seed_persons(&person_service).await?;
    }

    tracing::info!("http service listening on {}", config.endpoint);

    axum::Server::bind(&config.endpoint)
        .serve(http_router(person_service).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
