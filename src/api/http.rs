use super::{HealthReport, QueryAnswer, QueryBackend, QueryError, QueryRequest, QueryResult};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Talks to the placement backend over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    chat_url: String,
    health_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> QueryResult<Self> {
        let builder = Client::builder();
        // reqwest has no client-level timeout in the browser
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            chat_url: config.chat_url(),
            health_url: config.health_url(),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub async fn health(&self) -> QueryResult<HealthReport> {
        let response = self.client.get(&self.health_url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> QueryResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(QueryError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl QueryBackend for HttpBackend {
    async fn ask(&self, request: &QueryRequest) -> QueryResult<QueryAnswer> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }
}
