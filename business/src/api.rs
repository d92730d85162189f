//! Applicants API client.
//!
//! Network IO against the roster backend; used by commands only, never by
//! widgets directly.

use thiserror::Error;

use crate::Applicant;
use crate::http;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] http::HttpError),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("failed to parse applicants page: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// GET `/applicants?startIndex={offset}`
///
/// The server answers with a bare JSON array of applicants for the page
/// starting at `offset`.
pub async fn fetch_page(api_base_url: &str, offset: i64) -> ApiResult<Vec<Applicant>> {
    let url = format!("{api_base_url}/applicants?startIndex={offset}");

    let response = http::get(&url)
        .header("accept", "application/json")
        .send()
        .await?;

    if response.status != 200 {
        return Err(ApiError::Status(response.status));
    }

    Ok(response.json()?)
}
