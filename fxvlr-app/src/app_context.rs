use crate::application::GeneratePreview;
use crate::config::PreviewConfig;
use fxvlr_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_preview: Arc<GeneratePreview>,
    pub config: Arc<PreviewConfig>,
}

impl AppContext {
    pub fn new(config: PreviewConfig) -> Result<Self, AppError> {
        Ok(Self {
            generate_preview: Arc::new(GeneratePreview::new(&config)?),
            config: Arc::new(config),
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = PreviewConfig::from_env();
        tracing::info!(
            "Previewing pages from {} (fetch timeout {:?})",
            config.origin,
            config.fetch_timeout
        );
        Self::new(config)
    }
}
