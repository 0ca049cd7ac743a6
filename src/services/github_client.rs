use backon::{ExponentialBuilder, Retryable};
use chrono::Utc;
use crate::config::constants::{sleep_duration_secs, GITHUB_ACCEPT_HEADER, MAX_BACKOFF_SECS};
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::helpers::rate_limit_helper::RateLimitHelper;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::api_config::ApiConfig;
use crate::structs::http_request::HttpRequest;
use crate::structs::http_response::HttpResponse;
use crate::traits::http_transport::HttpTransport;

/// Longest error body excerpt carried into a network error.
const ERROR_BODY_EXCERPT: usize = 200;

/// Authenticated GitHub API access with rate-limit waits and retries.
pub struct GitHubClient<T: HttpTransport> {
    transport: T,
    config: ApiConfig,
    pub(crate) search_limiter: ApiRateLimiter,
}

impl<T: HttpTransport> GitHubClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        let search_limiter = ApiRateLimiter::per_minute(config.search_requests_per_minute);

        Self {
            transport,
            config,
            search_limiter,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `url`, waiting out rate limits and retrying transient failures.
    ///
    /// Failed attempts are repeated after 1, 2, 4 ... seconds, up to
    /// `retry.max_retries` times, after which the last error is returned.
    /// Rate-limit waits happen inside a single attempt and do not consume
    /// retries; running out of them fails with `RateLimited`, which is not
    /// retried.
    pub async fn get(&self, url: &str) -> RepoHealthResult<HttpResponse> {
        (|| self.get_once(url))
            .retry(self.backoff())
            .when(RepoHealthError::is_transient)
            .notify(|err, delay| {
                log::warn!("🔄 Request failed ({}). Retrying in {} seconds...", err, delay.as_secs());
            })
            .await
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(sleep_duration_secs(1))
            .with_factor(2.0)
            .with_max_delay(sleep_duration_secs(MAX_BACKOFF_SECS))
            .with_max_times(self.config.retry.max_retries)
    }

    async fn get_once(&self, url: &str) -> RepoHealthResult<HttpResponse> {
        let retry = &self.config.retry;
        let max_wait = sleep_duration_secs(retry.max_rate_limit_wait_secs);
        let mut waits = 0u32;

        loop {
            let response = self.transport.get(self.build_request(url)).await?;

            if let Some(reset_at) = RateLimitHelper::exhausted_until(&response) {
                let wait = RateLimitHelper::wait_duration(reset_at, Utc::now());
                if waits >= retry.max_rate_limit_waits || wait > max_wait {
                    return Err(RepoHealthError::RateLimited { reset_at, waits });
                }

                waits += 1;
                log::warn!("⏳ Rate limit reached. Waiting for {} seconds...", wait.as_secs());
                tokio::time::sleep(wait).await;
                continue;
            }

            if !response.is_success() {
                let excerpt: String = response.body.chars().take(ERROR_BODY_EXCERPT).collect();
                return Err(RepoHealthError::network_error(
                    "GET",
                    Some(url),
                    Some(response.status),
                    &format!("HTTP {}: {}", response.status, excerpt),
                ));
            }

            return Ok(response);
        }
    }

    fn build_request(&self, url: &str) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            headers: vec![
                ("Authorization".to_string(), format!("token {}", self.config.token)),
                ("Accept".to_string(), GITHUB_ACCEPT_HEADER.to_string()),
                ("User-Agent".to_string(), self.config.user_agent.clone()),
            ],
        }
    }
}
