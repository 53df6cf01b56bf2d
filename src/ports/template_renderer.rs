use crate::domain::{AppError, ResolvedParameters};

/// Trait for rendering the script template.
///
/// This abstraction keeps the template engine (e.g. minijinja) out of the
/// domain layer and lets tests substitute their own renderer.
pub trait TemplateRenderer {
    /// Render a template string against the resolved parameter set.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `parameters` - The resolved values substituted for placeholders.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        parameters: &ResolvedParameters,
        template_name: &str,
    ) -> Result<String, AppError>;
}
