use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, ResolvedParameters};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// The environment runs with strict undefined behavior: a placeholder
/// without a matching parameter fails the render instead of expanding to
/// empty text. Literal shell `${VAR}` sequences in the template are left
/// untouched since only `{{`, `{%`, and `{#` are template syntax.
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(
        &self,
        template: &str,
        parameters: &ResolvedParameters,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, parameters).map_err(|err| AppError::TemplateRender {
            template: template_name.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
