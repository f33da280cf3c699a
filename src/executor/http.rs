//! HTTP executor backed by reqwest.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{ExecutorError, QueryExecutor};
use crate::config::ApiConfig;
use crate::query::QueryArticles;
use crate::utils::HttpClient;

/// Executes queries by posting their parameters as JSON to the service
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: HttpClient,
    host: String,
}

impl HttpExecutor {
    /// Create an executor for `host` (e.g. `https://eventregistry.org`)
    pub fn new(host: impl Into<String>) -> Result<Self, ExecutorError> {
        Self::from_config(&ApiConfig {
            host: host.into(),
            ..ApiConfig::default()
        })
    }

    /// Create an executor from API settings
    pub fn from_config(config: &ApiConfig) -> Result<Self, ExecutorError> {
        let client = HttpClient::from_config(config)?;
        Ok(Self::with_client(client, &config.host))
    }

    /// Create an executor that reuses an existing client
    pub fn with_client(client: HttpClient, host: &str) -> Self {
        Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    async fn exec_query(&self, query: &QueryArticles) -> Result<Value, ExecutorError> {
        let url = self.build_url(query.path());
        let params = query.query_params();
        debug!(
            url = %url,
            result_type = query.requested_result().result_type(),
            "executing query"
        );

        let response = self
            .client
            .client()
            .post(&url)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExecutorError::Api(format!(
                "{} returned status: {}",
                url, status
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
