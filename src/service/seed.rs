use crate::{models::Person, services::PersonService};

const SAMPLE_PERSONS: [(&str, &str); 5] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Bob Johnson", "bob.johnson@example.com"),
    ("Alice Williams", "alice.williams@example.com"),
    ("John Smith", "john.smith@example.com"),
];

/// Stores the sample persons when the store is empty. Returns how many were created.
#[tracing::instrument(name = "seed::persons", skip_all)]
pub async fn seed_persons(person_service: &PersonService) -> anyhow::Result<usize> {
    if !person_service.list().await?.is_empty() {
        tracing::info!("persons already present, skipping sample data");

        return Ok(0);
    }

    for (name, email) in SAMPLE_PERSONS {
        person_service.upsert(&Person::new(name, email)).await?;
    }

    tracing::info!("sample data initialized: {} persons", SAMPLE_PERSONS.len());

    Ok(SAMPLE_PERSONS.len())
}
