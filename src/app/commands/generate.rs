use chrono::{DateTime, Utc};

use crate::domain::{AppError, GenerateOptions, ResolvedParameters, Username};
use crate::ports::TemplateRenderer;
use crate::templates;

/// A rendered sbatch script together with the parameter set it was
/// rendered from.
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub parameters: ResolvedParameters,
    pub script: String,
}

/// Execute the generate command.
///
/// Resolves the parameter set for `invoked_at` and renders the embedded
/// sbatch template with it. Printing is left to the caller.
pub fn execute<R>(
    user: &Username,
    options: &GenerateOptions,
    invoked_at: DateTime<Utc>,
    renderer: &R,
) -> Result<GeneratedScript, AppError>
where
    R: TemplateRenderer,
{
    let parameters = ResolvedParameters::resolve(user, options, invoked_at);
    let script = renderer.render(
        templates::CROSS_VALIDATION_SBATCH,
        &parameters,
        "cross_validation.sbatch",
    )?;

    Ok(GeneratedScript { parameters, script })
}
