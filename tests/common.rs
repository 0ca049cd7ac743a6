use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use repo_health::errors::RepoHealthResult;
use repo_health::services::github_client::GitHubClient;
use repo_health::structs::api_config::ApiConfig;
use repo_health::structs::config::retry_config::RetryConfig;
use repo_health::structs::http_request::HttpRequest;
use repo_health::structs::http_response::HttpResponse;
use repo_health::structs::repository_metadata::RepositoryMetadata;
use repo_health::traits::http_transport::HttpTransport;
use reqwest::Url;
use serde_json::json;

type Responder = Box<dyn Fn(u32) -> RepoHealthResult<HttpResponse> + Send + Sync>;

/// Answers each request from a closure keyed by the `page` query parameter.
pub struct ScriptedTransport {
    responder: Responder,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responder: impl Fn(u32) -> RepoHealthResult<HttpResponse> + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests.lock().unwrap().iter().map(|r| page_of(&r.url)).collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, request: HttpRequest) -> RepoHealthResult<HttpResponse> {
        let page = page_of(&request.url);
        self.requests.lock().unwrap().push(request);
        (self.responder)(page)
    }
}

fn page_of(url: &str) -> u32 {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "page")
        .map(|(_, v)| v.parse().unwrap())
        .unwrap()
}

pub fn client(transport: ScriptedTransport) -> GitHubClient<ScriptedTransport> {
    GitHubClient::new(
        transport,
        ApiConfig {
            base_url: "https://api.github.test".to_string(),
            token: "test-token".to_string(),
            user_agent: "repo-health/test".to_string(),
            timeout: Duration::from_secs(5),
            search_requests_per_minute: 30,
            retry: RetryConfig::default(),
        },
    )
}

pub fn repo_json(name: &str, stars: u64) -> serde_json::Value {
    json!({
        "full_name": name,
        "html_url": format!("https://github.com/{}", name),
        "description": format!("{} description", name),
        "stargazers_count": stars,
        "open_issues_count": 3,
        "created_at": "2015-06-01T12:00:00Z",
        "pushed_at": "2016-01-01T00:00:00Z",
        "language": "Rust",
        "archived": false,
        "fork": false
    })
}

pub fn page(items: Vec<serde_json::Value>) -> RepoHealthResult<HttpResponse> {
    let body = json!({
        "total_count": 10_000,
        "incomplete_results": false,
        "items": items
    });
    Ok(HttpResponse {
        status: 200,
        headers: vec![],
        body: body.to_string(),
    })
}

pub fn full_page(page_number: u32, size: usize) -> RepoHealthResult<HttpResponse> {
    page(
        (0..size)
            .map(|i| repo_json(&format!("owner/repo-{}-{}", page_number, i), 10_000 - i as u64))
            .collect(),
    )
}

pub fn empty_page() -> RepoHealthResult<HttpResponse> {
    page(vec![])
}

pub fn metadata_from(value: serde_json::Value) -> RepositoryMetadata {
    serde_json::from_value(value).unwrap()
}

pub fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}
