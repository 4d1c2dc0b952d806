use crate::types::{Payload, ResponseRecord};
use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    blocking::{Client, ClientBuilder},
    header::HeaderMap,
};
use std::time::Duration;

pub trait Webhook {
    fn url(&self) -> &str;
    fn post(&self, payload: &Payload) -> Result<ResponseRecord>;
}

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    url: String,
}

impl WebhookClient {
    pub fn new<S: Into<String>>(url: S) -> Result<Self> {
        let http = Self::http_builder()
            .build()
            .with_context(|| "Failed to build http client.")?;
        Ok(Self::with_client(url, http))
    }

    pub fn with_client<S: Into<String>>(url: S, http: Client) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// No request timeout: the call waits for the webhook however long it takes.
    pub fn http_builder() -> ClientBuilder {
        Client::builder().timeout(None::<Duration>)
    }

    fn extract_headers(header_map: &HeaderMap) -> Vec<(String, String)> {
        header_map
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect()
    }
}

impl Webhook for WebhookClient {
    fn url(&self) -> &str {
        &self.url
    }

    fn post(&self, payload: &Payload) -> Result<ResponseRecord> {
        debug!("POST {}", self.url);
        let response = self
            .http
            .post(self.url.as_str())
            .json(payload)
            .send()
            .with_context(|| format!("Failed to send request to {}", self.url))?;
        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = response
            .text()
            .with_context(|| "Failed to read response body.")?;
        debug!("{} answered {} with {} bytes", self.url, status, body.len());
        Ok(ResponseRecord::new(status, headers, body))
    }
}
