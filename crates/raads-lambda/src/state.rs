use std::sync::Arc;

use raads_export::error::ExportError;
use raads_export::render::ReportRenderer;

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub renderer: Arc<ReportRenderer>,
}

impl AppState {
    /// Fails when `report_template` does not parse.
    pub fn new(config: ApiConfig, report_template: &str) -> Result<Self, ExportError> {
        let renderer = ReportRenderer::new("report.md", report_template)?;
        Ok(Self {
            config: Arc::new(config),
            renderer: Arc::new(renderer),
        })
    }

    pub fn from_config(config: ApiConfig) -> eyre::Result<Self> {
        let template = config.load_report_template()?;
        Ok(Self::new(config, &template)?)
    }
}
