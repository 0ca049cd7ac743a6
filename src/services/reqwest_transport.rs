use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::structs::http_request::HttpRequest;
use crate::structs::http_response::HttpResponse;
use crate::traits::http_transport::HttpTransport;

/// A real HTTP transport backed by reqwest.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn with_timeout(timeout: Duration) -> RepoHealthResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> RepoHealthResult<HttpResponse> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RepoHealthError::network_error("GET", Some(&request.url), None, &e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| RepoHealthError::network_error("reading response body", Some(&request.url), Some(status), &e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
