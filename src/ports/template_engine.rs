use crate::domain::RenderParameters;

/// Port for the template engine that renders pagination markup.
///
/// This abstraction keeps the renderer independent of the engine that
/// compiles, caches and executes templates. Implementations report their own
/// error type; the renderer passes it through untouched.
pub trait TemplateEngine {
    type Error: std::error::Error;

    /// Render the named template with the pagination variable bag.
    fn render(
        &self,
        template: &str,
        parameters: &RenderParameters<'_>,
    ) -> Result<String, Self::Error>;
}

impl<T: TemplateEngine + ?Sized> TemplateEngine for &T {
    type Error = T::Error;

    fn render(
        &self,
        template: &str,
        parameters: &RenderParameters<'_>,
    ) -> Result<String, Self::Error> {
        (**self).render(template, parameters)
    }
}
