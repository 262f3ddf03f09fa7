use std::path::PathBuf;

use minijinja::{Environment, Error};

use super::bundled_templates::bundled_loader;
use crate::app::PaginationExtension;
use crate::domain::RenderParameters;
use crate::ports::TemplateEngine;

impl TemplateEngine for Environment<'_> {
    type Error = Error;

    fn render(
        &self,
        template: &str,
        parameters: &RenderParameters<'_>,
    ) -> Result<String, Self::Error> {
        self.get_template(template)?.render(parameters)
    }
}

/// Build an environment that loads the bundled templates plus any in
/// `templates_dir`, with the pagination helper registered.
///
/// Hosts that own their environment call [`PaginationExtension::register`]
/// and [`bundled_loader`] directly instead.
pub fn build_template_environment(
    extension: &PaginationExtension,
    templates_dir: Option<PathBuf>,
) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(bundled_loader(templates_dir));
    extension.register(&mut env);
    env
}
