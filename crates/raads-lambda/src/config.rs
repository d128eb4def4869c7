use std::env;
use std::path::PathBuf;

use raads_export::render::DEFAULT_REPORT_TEMPLATE;

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Name reported by `/health`.
    pub service_name: String,
    /// Optional Tera template replacing the built-in report layout.
    pub report_template_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service_name: "raads".to_string(),
            report_template_path: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let service_name =
            env::var("RAADS_SERVICE_NAME").unwrap_or_else(|_| "raads".to_string());
        let report_template_path = env::var("RAADS_REPORT_TEMPLATE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            service_name,
            report_template_path,
        }
    }

    /// Read the configured report template, falling back to the built-in one.
    pub fn load_report_template(&self) -> eyre::Result<String> {
        match &self.report_template_path {
            Some(path) => {
                let template = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read report template at {}: {e}", path.display())
                })?;
                tracing::info!(path = %path.display(), "loaded custom report template");
                Ok(template)
            }
            None => Ok(DEFAULT_REPORT_TEMPLATE.to_string()),
        }
    }
}
