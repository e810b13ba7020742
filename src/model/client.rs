use super::types::Answer;
use crate::{Result, config::ModelConfig, error::Error};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// The inference handle: maps a (question, context) pair to an answer.
/// Implementations are opaque to the server; absence or failure of the
/// handle are the only failure modes surfaced to callers.
#[async_trait]
pub trait QaModel: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer>;
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

/// Client for a hosted extractive-QA endpoint speaking the
/// `{"inputs": {"question", "context"}}` convention.
pub struct HttpQaModel {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpQaModel {
    pub fn new(config: ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl QaModel for HttpQaModel {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer> {
        debug!("Sending QA request to {}", self.url);

        let mut request = self.client.post(&self.url).json(&QaRequest {
            inputs: QaInputs { question, context },
        });

        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::model(if body.is_empty() {
                format!("Inference backend returned status {}", status)
            } else {
                body
            }));
        }

        let answer: Answer = response
            .json()
            .await
            .map_err(|e| Error::model(format!("Invalid inference response: {}", e)))?;

        debug!(
            "Received answer with score {:?} ({} chars)",
            answer.score,
            answer.answer.len()
        );

        Ok(answer)
    }
}
