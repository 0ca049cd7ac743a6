use reqwest::Url;
use crate::config::constants::SEARCH_REPOSITORIES_PATH;
use crate::enums::completeness::Completeness;
use crate::enums::sort_key::SortKey;
use crate::enums::sort_order::SortOrder;
use crate::errors::{RepoHealthError, RepoHealthResult};
use crate::services::github_client::GitHubClient;
use crate::structs::search_outcome::SearchOutcome;
use crate::structs::search_page::SearchPage;
use crate::traits::http_transport::HttpTransport;

#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub sort: SortKey,
    pub order: SortOrder,
    pub per_page: u8,
    pub max_repos: usize,
}

impl SearchParams {
    pub fn new(query: &str, max_repos: usize) -> Self {
        Self {
            query: query.to_string(),
            sort: SortKey::Stars,
            order: SortOrder::Desc,
            per_page: 100,
            max_repos,
        }
    }
}

impl<T: HttpTransport> GitHubClient<T> {
    /// Collect up to `params.max_repos` repositories matching the query.
    ///
    /// Pages are requested in order starting at 1 until a page comes back
    /// empty or enough repositories have been gathered. A request that still
    /// fails after retries ends the walk early: whatever was collected is
    /// returned, tagged [`Completeness::Partial`], and so does a body that is
    /// not JSON. JSON that is not a search page is an error.
    pub async fn search_repositories(&self, params: &SearchParams) -> RepoHealthResult<SearchOutcome> {
        let endpoint = self.search_endpoint()?;
        let mut repositories = Vec::new();
        let mut completeness = Completeness::Complete;
        let mut page = 1u32;

        while repositories.len() < params.max_repos {
            self.search_limiter.acquire().await;

            let url = Self::page_url(&endpoint, params, page);
            log::debug!("Requesting {}", url);

            let response = match self.get(url.as_str()).await {
                Ok(response) => response,
                Err(e) => {
                    log::warn!("⚠️ Error fetching repositories: {}", e);
                    completeness = Completeness::Partial {
                        page,
                        reason: e.to_string(),
                    };
                    break;
                }
            };

            let body: serde_json::Value = match serde_json::from_str(&response.body) {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("⚠️ Page {} did not return JSON: {}", page, e);
                    completeness = Completeness::Partial {
                        page,
                        reason: format!("invalid JSON body: {}", e),
                    };
                    break;
                }
            };
            let search_page: SearchPage = serde_json::from_value(body)?;
            if search_page.incomplete_results {
                log::warn!("⚠️ GitHub reported incomplete results for page {}", page);
            }
            if search_page.items.is_empty() {
                break;
            }

            repositories.extend(search_page.items);
            log::info!(
                "📄 Page {}: {} repositories collected ({} matching in total)",
                page,
                repositories.len(),
                search_page.total_count
            );
            page += 1;
        }

        repositories.truncate(params.max_repos);

        Ok(SearchOutcome {
            repositories,
            completeness,
        })
    }

    fn search_endpoint(&self) -> RepoHealthResult<Url> {
        let raw = format!("{}{}", self.config().base_url, SEARCH_REPOSITORIES_PATH);
        Url::parse(&raw).map_err(|e| {
            RepoHealthError::config_error(&format!("invalid API URL '{}': {}", raw, e), Some("api.base_url"), None)
        })
    }

    fn page_url(endpoint: &Url, params: &SearchParams, page: u32) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &params.query)
            .append_pair("sort", params.sort.as_query_value())
            .append_pair("order", params.order.as_query_value())
            .append_pair("per_page", &params.per_page.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::api_config::ApiConfig;
    use crate::structs::config::config::Config;
    use crate::traits::http_transport::MockHttpTransport;

    #[test]
    fn page_url_encodes_query_and_paging() {
        let client = GitHubClient::new(MockHttpTransport::new(), ApiConfig::from_config(&Config::default(), "t".to_string()));
        let endpoint = client.search_endpoint().unwrap();
        let mut params = SearchParams::new("stars:>100 language:rust", 10);
        params.per_page = 50;
        params.order = SortOrder::Asc;

        let url = GitHubClient::<MockHttpTransport>::page_url(&endpoint, &params, 3);

        assert_eq!(url.path(), "/search/repositories");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "stars:>100 language:rust".to_string()),
                ("sort".to_string(), "stars".to_string()),
                ("order".to_string(), "asc".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn zero_max_repos_makes_no_request() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().never();
        let client = GitHubClient::new(transport, ApiConfig::from_config(&Config::default(), "t".to_string()));

        let outcome = client.search_repositories(&SearchParams::new("rust", 0)).await.unwrap();

        assert!(outcome.repositories.is_empty());
        assert_eq!(outcome.completeness, Completeness::Complete);
    }

    #[tokio::test]
    async fn malformed_page_is_an_error() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().times(1).returning(|_| {
            Ok(crate::structs::http_response::HttpResponse {
                status: 200,
                headers: vec![],
                body: "{\"message\":\"not a page\"}".to_string(),
            })
        });
        let client = GitHubClient::new(transport, ApiConfig::from_config(&Config::default(), "t".to_string()));

        let err = client.search_repositories(&SearchParams::new("rust", 10)).await.unwrap_err();
        assert!(matches!(err, RepoHealthError::ParseError { .. }));
    }
}
