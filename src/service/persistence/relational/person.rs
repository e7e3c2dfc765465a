use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::Person;
use crate::persistence::{PersonPersistence, Persistence};

#[derive(Debug)]
pub struct PersonRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl Persistence<Person> for PersonRelationalPersistence {
    #[tracing::instrument(name = "relational::person::upsert", skip_all)]
    async fn upsert(&self, person: &Person) -> anyhow::Result<Person> {
        let person_id = match person.id {
            Some(person_id) => person_id,
            None => {
                let saved = sqlx::query_as::<_, Person>(
                    r#"
                    INSERT INTO persons
                       (name, email)
                    VALUES
                       ($1, $2)
                    RETURNING id, name, email
                    "#,
                )
                .bind(&person.name)
                .bind(&person.email)
                .fetch_one(&*self.db)
                .await?;

                return Ok(saved);
            }
        };

        let mut transaction = self.db.begin().await?;

        let saved = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons
               (id, name, email)
            VALUES
               ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
               name = $2,
               email = $3
            RETURNING id, name, email
            "#,
        )
        .bind(person_id)
        .bind(&person.name)
        .bind(&person.email)
        .fetch_one(&mut transaction)
        .await?;

        // explicit ids only ever push the sequence forward; the lock keeps two
        // explicit upserts from reading the same last_value
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext('persons_id_seq'))")
            .execute(&mut transaction)
            .await?;

        sqlx::query(
            r#"
            SELECT setval('persons_id_seq', $1)
            FROM persons_id_seq
            WHERE last_value < $1
               OR (NOT is_called AND last_value <= $1)
            "#,
        )
        .bind(person_id)
        .execute(&mut transaction)
        .await?;

        transaction.commit().await?;

        Ok(saved)
    }

    #[tracing::instrument(name = "relational::person::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<Person>> {
        let persons =
            sqlx::query_as::<_, Person>("SELECT id, name, email FROM persons ORDER BY id")
                .fetch_all(&*self.db)
                .await?;

        Ok(persons)
    }
}

#[async_trait]
impl PersonPersistence for PersonRelationalPersistence {
    #[tracing::instrument(name = "relational::person::get_by_name", skip_all)]
    async fn get_by_name(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            r#"
                SELECT id, name, email FROM persons WHERE name = $1 ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&*self.db)
        .await?;

        Ok(persons)
    }

    #[tracing::instrument(name = "relational::person::get_by_name_ignore_case", skip_all)]
    async fn get_by_name_ignore_case(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            r#"
                SELECT id, name, email FROM persons WHERE LOWER(name) = LOWER($1) ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&*self.db)
        .await?;

        Ok(persons)
    }

    #[tracing::instrument(name = "relational::person::search_by_name", skip_all)]
    async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Person>> {
        // STRPOS keeps % and _ in the fragment literal, unlike LIKE
        let persons = sqlx::query_as::<_, Person>(
            r#"
                SELECT id, name, email FROM persons
                WHERE STRPOS(LOWER(name), LOWER($1)) > 0
                ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(&*self.db)
        .await?;

        Ok(persons)
    }
}
