use crate::config::PreviewConfig;
use crate::domain::Preview;
use crate::infrastructure::extract::{ForumExtractor, PageClassifier};
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::render::MetaRenderer;
use crate::infrastructure::security::PathSanitizer;
use fxvlr_errors::AppError;
use url::Url;

pub struct GeneratePreview {
    origin: Url,
    fetcher: PageFetcher,
    classifier: PageClassifier,
    renderer: MetaRenderer,
}

impl GeneratePreview {
    pub fn new(config: &PreviewConfig) -> Result<Self, AppError> {
        Ok(Self {
            origin: config.origin.clone(),
            fetcher: PageFetcher::new(config.fetch_timeout)?,
            classifier: PageClassifier::new(ForumExtractor::new(config.star_rating)),
            renderer: MetaRenderer::new(config.render.clone()),
        })
    }

    /// Fetches the page behind `request_path` and classifies it.
    pub async fn preview(&self, request_path: &str) -> Result<Preview, AppError> {
        let page_url = PathSanitizer::page_url(&self.origin, request_path)?;
        let html = self.fetcher.fetch(&page_url).await?;

        // The parsed DOM is not Send; it must not outlive this call.
        let preview = self.classifier.classify_html(&html, page_url.as_str());
        tracing::info!("Classified {} as {}", page_url, preview.kind());
        Ok(preview)
    }

    /// Full pipeline: the rendered meta document for `request_path`.
    pub async fn execute(&self, request_path: &str) -> Result<String, AppError> {
        let preview = self.preview(request_path).await?;
        self.renderer.render(&preview)
    }
}
