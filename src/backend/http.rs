//! HTTP transport for the knowledge-base bot.

use std::time::Duration;

use serde::Serialize;

use super::{
    ADD_QUESTION_PATH, BackendError, ChatBackend, ChatRequest, GET_RESPONSE_PATH, TeachAck, TeachRequest,
    parse_chat_reply, parse_teach_ack,
};
use crate::config::ChatConfig;

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client with the configured connect/request timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if reqwest cannot build the client.
    pub fn new(config: &ChatConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add a question/answer pair to the bot's knowledge base.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, non-2xx status,
    /// malformed body, or an acknowledgement whose status is not `success`.
    pub async fn add_question(&self, question: &str, answer: &str) -> Result<TeachAck, BackendError> {
        let body = TeachRequest { question, response: answer };
        let text = self.send_json(ADD_QUESTION_PATH, &body).await?;
        parse_teach_ack(&text)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpBackend {
    async fn get_response(&self, message: &str) -> Result<String, BackendError> {
        let text = self.send_json(GET_RESPONSE_PATH, &ChatRequest { message }).await?;
        parse_chat_reply(&text)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
