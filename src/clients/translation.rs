use crate::core::ports::Translator;
use crate::utils::error::{QaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// HuggingFace 翻譯推論端點的客戶端
#[derive(Debug, Clone)]
pub struct HfTranslationClient {
    client: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct TranslationPayload<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    translation_text: String,
}

impl HfTranslationClient {
    pub fn new(client: Client, endpoint: String, token: String) -> Self {
        Self {
            client,
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl Translator for HfTranslationClient {
    async fn translate(&self, text: &str) -> Result<String> {
        tracing::debug!("🌐 Translation request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&TranslationPayload { inputs: text })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("🌐 Translation response status: {}", status);

        if !status.is_success() {
            // 讀完 body 供診斷，連線也得以歸還連線池
            let body = response.text().await.unwrap_or_default();
            return Err(QaError::TranslationError {
                message: format!("translation endpoint returned status {}: {}", status, body),
            });
        }

        let entries: Vec<TranslationEntry> =
            response
                .json()
                .await
                .map_err(|e| QaError::TranslationError {
                    message: format!("unexpected translation response shape: {}", e),
                })?;

        entries
            .into_iter()
            .next()
            .map(|entry| entry.translation_text)
            .ok_or_else(|| QaError::TranslationError {
                message: "no translation found in response".to_string(),
            })
    }
}
