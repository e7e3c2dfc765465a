use crate::{AppInfo, HelloQuery, NameQuery, PersonMessage, SearchMode, PERSONS_PATH};

/// HTTP client for the person and greeting endpoints.
#[derive(Clone, Debug)]
pub struct PersonClient {
    endpoint: String,
    http: reqwest::Client,
}

impl PersonClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    #[tracing::instrument(name = "client::person::list", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<PersonMessage>> {
        let persons = self
            .http
            .get(self.url(PERSONS_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(persons)
    }

    #[tracing::instrument(name = "client::person::search", skip(self))]
    pub async fn search(
        &self,
        name: &str,
        mode: SearchMode,
    ) -> anyhow::Result<Vec<PersonMessage>> {
        let query = NameQuery {
            name: name.to_owned(),
        };

        let persons = self
            .http
            .get(self.url(mode.path()))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(persons)
    }

    #[tracing::instrument(name = "client::person::upsert", skip(self))]
    pub async fn upsert(&self, person: &PersonMessage) -> anyhow::Result<PersonMessage> {
        let saved = self
            .http
            .post(self.url(PERSONS_PATH))
            .json(person)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(saved)
    }

    #[tracing::instrument(name = "client::hello", skip(self))]
    pub async fn hello(&self, name: Option<&str>) -> anyhow::Result<String> {
        let query = HelloQuery {
            name: name.map(str::to_owned),
        };

        let greeting = self
            .http
            .get(self.url("/hello"))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(greeting)
    }

    #[tracing::instrument(name = "client::info", skip(self))]
    pub async fn info(&self) -> anyhow::Result<AppInfo> {
        let info = self
            .http
            .get(self.url("/info"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(info)
    }
}
