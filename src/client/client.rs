use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    catalog::RecipeCatalog,
    types::*,
};
use crate::config::Config;
use crate::error::ExplorerError;

pub struct MealDbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl MealDbClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.request_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/json/v1/{}/{}", self.base_url, self.api_key, path)
    }

    async fn get_meals<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ExplorerError> {
        tracing::debug!("Making catalog request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error calling {}: {}", url, e);
                ExplorerError::Network(e)
            })?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Catalog request failed with status {}: {}", status, error_body);
            return Err(ExplorerError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse catalog response from {}: {}", url, e);
            ExplorerError::Parse(e.to_string())
        })?;

        Ok(envelope.into_meals())
    }
}

#[async_trait]
impl RecipeCatalog for MealDbClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, ExplorerError> {
        let url = format!(
            "{}?i={}",
            self.endpoint("filter.php"),
            urlencoding::encode(ingredient)
        );
        let meals: Vec<MealSummary> = self.get_meals(&url).await?;
        tracing::debug!("Ingredient '{}' matched {} meals", ingredient, meals.len());
        Ok(meals)
    }

    async fn random_meal(&self) -> Result<Vec<MealDetail>, ExplorerError> {
        let url = self.endpoint("random.php");
        self.get_meals(&url).await
    }

    async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ExplorerError> {
        let url = format!("{}?i={}", self.endpoint("lookup.php"), urlencoding::encode(id));
        let meals: Vec<MealDetail> = self.get_meals(&url).await?;
        Ok(meals.into_iter().next())
    }
}
