//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::templates::TemplateRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<TemplateRegistry>,
}

impl AppState {
    /// State with the templates shipped in the binary.
    pub fn new(config: Config) -> Self {
        Self::with_templates(config, TemplateRegistry::builtin())
    }

    pub fn with_templates(config: Config, templates: TemplateRegistry) -> Self {
        tracing::debug!(templates = ?templates, "Template registry ready");
        Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
        }
    }
}
