use async_trait::async_trait;
use crate::errors::RepoHealthResult;
use crate::structs::http_request::HttpRequest;
use crate::structs::http_response::HttpResponse;

/// Transport boundary for all HTTP I/O.
///
/// Implementations return every response they receive, whatever its status;
/// only failures to obtain a response at all are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> RepoHealthResult<HttpResponse>;
}
