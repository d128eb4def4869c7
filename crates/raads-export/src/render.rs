use tera::{Context, Tera};

use crate::context::ReportContext;
use crate::error::ExportError;

/// Built-in Markdown report layout.
pub const DEFAULT_REPORT_TEMPLATE: &str = include_str!("templates/report.md.tera");

/// A report template parsed once and rendered many times.
pub struct ReportRenderer {
    tera: Tera,
    template_name: String,
}

impl ReportRenderer {
    /// Parse `template_content` (Jinja2 syntax). Syntax errors surface here
    /// rather than on the first render.
    pub fn new(template_name: &str, template_content: &str) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(template_name, template_content)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self {
            tera,
            template_name: template_name.to_string(),
        })
    }

    pub fn with_default_template() -> Result<Self, ExportError> {
        Self::new("report.md", DEFAULT_REPORT_TEMPLATE)
    }

    /// Render the template; the context fields become the template variables.
    pub fn render(&self, context: &ReportContext) -> Result<String, ExportError> {
        let value = serde_json::to_value(context)?;
        let context = Context::from_value(value)
            .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

        let rendered = self.tera.render(&self.template_name, &context)?;
        tracing::debug!(
            template = %self.template_name,
            bytes = rendered.len(),
            "rendered report"
        );
        Ok(rendered)
    }
}

/// Parse and render a template in one step.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    ReportRenderer::new(template_name, template_content)?.render(context)
}

pub fn render_default_report(context: &ReportContext) -> Result<String, ExportError> {
    ReportRenderer::with_default_template()?.render(context)
}
