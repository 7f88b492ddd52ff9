use crate::core::answer::AnswerResult;
use crate::core::ports::TableAnswerer;
use crate::core::table::Table;
use crate::utils::error::{QaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// HuggingFace Table-QA 推論端點（TAPAS 系列模型）的客戶端
#[derive(Debug, Clone)]
pub struct HfTableQaClient {
    client: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct QaPayload<'a> {
    table: &'a Table,
    query: &'a str,
}

impl HfTableQaClient {
    pub fn new(client: Client, endpoint: String, token: String) -> Self {
        Self {
            client,
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl TableAnswerer for HfTableQaClient {
    async fn ask(&self, table: &Table, query: &str) -> Result<AnswerResult> {
        tracing::debug!("📡 Table QA request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&QaPayload { table, query })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Table QA response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QaError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let result: AnswerResult = response.json().await?;
        Ok(result)
    }
}
