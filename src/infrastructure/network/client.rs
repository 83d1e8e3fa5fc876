use crate::domain::error::ExplorerError;
use crate::domain::model::CountryRecord;
use crate::domain::traits::CountryDirectory;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

/// REST Countries client (`/name/{name}?fullText=true`)
pub struct RestCountriesDirectory {
    client: Client,
    base_url: String,
}

impl RestCountriesDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ExplorerError> {
        Ok(Self::new(
            create_client(config)?,
            config.directory.base_url.clone(),
        ))
    }

    /// Build the full-text lookup URL. The name is a single percent-encoded
    /// path segment, so `/` or `?` in user input cannot change the route.
    pub fn name_url(&self, name: &str) -> Result<Url, ExplorerError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ExplorerError::Config(format!("Invalid directory URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ExplorerError::Config(format!(
                    "Directory URL cannot take a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("name")
            .push(name);
        url.query_pairs_mut().append_pair("fullText", "true");

        Ok(url)
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesDirectory {
    async fn find_by_full_name(&self, name: &str) -> Result<Vec<CountryRecord>, ExplorerError> {
        let url = self.name_url(name)?;
        debug!(%url, "querying country directory");

        let response = self.client.get(url).send().await?;

        // The service answers unknown names with 404 and an error object.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let candidates = response
            .error_for_status()?
            .json::<Vec<CountryRecord>>()
            .await?;

        debug!(count = candidates.len(), "country directory answered");
        Ok(candidates)
    }
}
