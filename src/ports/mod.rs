//! Port traits decoupling the application from infrastructure.

mod template_renderer;

pub use template_renderer::TemplateRenderer;
