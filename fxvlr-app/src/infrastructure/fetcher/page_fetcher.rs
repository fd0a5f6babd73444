use fxvlr_errors::AppError;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("Mozilla/5.0 (compatible; fxvlr/", env!("CARGO_PKG_VERSION"), ")");

/// Single GET against the origin. No retries.
pub struct PageFetcher {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    pub async fn fetch(&self, url: &Url) -> Result<String, AppError> {
        let response = self
            .http_client
            .get(url.as_str())
            .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!("HTTP {status}")));
        }

        match tokio::time::timeout(self.timeout, response.text()).await {
            Ok(Ok(html)) => Ok(html),
            Ok(Err(e)) => Err(Self::map_error(e)),
            Err(_) => Err(AppError::Timeout),
        }
    }

    fn map_error(e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout
        } else {
            AppError::FetchFailed(e.to_string())
        }
    }
}
