use fxvlr_errors::AppError;
use url::Url;

const MAX_PATH_LENGTH: usize = 2048;

pub struct PathSanitizer;

impl PathSanitizer {
    /// Builds the origin page URL for a request path. The result always stays
    /// on the origin's scheme and host.
    pub fn page_url(origin: &Url, request_path: &str) -> Result<Url, AppError> {
        let id = request_path.strip_prefix('/').unwrap_or(request_path);

        if id.is_empty() {
            return Err(AppError::InvalidPath("empty path".to_string()));
        }

        if id.len() > MAX_PATH_LENGTH {
            return Err(AppError::InvalidPath("path too long".to_string()));
        }

        if id.chars().any(|c| c.is_control() || c.is_whitespace() || c == '\\') {
            return Err(AppError::InvalidPath("path contains invalid characters".to_string()));
        }

        if id.starts_with('/') || id.split('/').any(|segment| segment == "..") {
            tracing::warn!("Rejected path traversal attempt: {}", request_path);
            return Err(AppError::InvalidPath("path traversal".to_string()));
        }

        let base = origin.as_str().trim_end_matches('/');
        let url = Url::parse(&format!("{base}/{id}"))
            .map_err(|_| AppError::InvalidPath("unparseable path".to_string()))?;

        if url.scheme() != origin.scheme() || url.host_str() != origin.host_str() {
            tracing::warn!("Path {} resolved off origin to {}", request_path, url);
            return Err(AppError::InvalidPath("path leaves origin".to_string()));
        }

        Ok(url)
    }
}
