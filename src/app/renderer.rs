use std::sync::Arc;

use minijinja::Environment;

use crate::adapters::bundled_templates::DEFAULT_TEMPLATE;
use crate::adapters::helper;
use crate::domain::{PaginationConfig, RenderRequest};
use crate::ports::TemplateEngine;

/// Pagination helper configuration, ready to be registered with a template
/// environment or attached to an engine.
///
/// Holds only the default template, fixed at construction. Clones share it.
#[derive(Debug, Clone)]
pub struct PaginationExtension {
    default_template: Arc<str>,
}

impl Default for PaginationExtension {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl PaginationExtension {
    pub fn new(default_template: impl Into<String>) -> Self {
        Self { default_template: Arc::from(default_template.into()) }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.default_template.as_str())
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    /// Register `simple_pagination_render` with `env`.
    ///
    /// The helper renders through whichever environment invokes it, and its
    /// output is marked safe so auto-escaping leaves the markup intact.
    pub fn register(&self, env: &mut Environment<'_>) {
        helper::register(env, self.clone());
    }

    /// Bind this configuration to an engine for rendering from Rust code.
    pub fn attach<E: TemplateEngine>(&self, engine: E) -> PaginationRenderer<E> {
        PaginationRenderer { default_template: Arc::clone(&self.default_template), engine }
    }
}

/// A [`PaginationExtension`] bound to a template engine.
#[derive(Debug, Clone)]
pub struct PaginationRenderer<E> {
    default_template: Arc<str>,
    engine: E,
}

impl<E: TemplateEngine> PaginationRenderer<E> {
    /// Render the pagination widget for `request`.
    ///
    /// Renders `request`'s template, or the default when it names none, and
    /// returns the engine's output and errors as they are.
    pub fn render(&self, request: &RenderRequest) -> Result<String, E::Error> {
        let template = request.resolve_template(&self.default_template);
        log::debug!(
            "rendering pagination template '{}' for route '{}'",
            template,
            request.route_name()
        );
        self.engine.render(template, &request.parameters())
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
