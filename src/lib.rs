//! sbgen: generate sbatch submission scripts for cross-validation batch jobs.
//!
//! Resolves a parameter set from a username plus optional overrides, then
//! renders a fixed script template with the resolved values. The library
//! surface performs no I/O; the CLI adapter prints the rendered script on
//! stdout and one diagnostic line per resolved parameter on stderr.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;
pub mod templates;

use chrono::{DateTime, Utc};

pub use app::commands::generate::GeneratedScript;
pub use domain::{AppError, GenerateOptions, ResolvedParameters, Username};

/// Generate an sbatch script using the current instant.
pub fn generate(username: &str, options: &GenerateOptions) -> Result<GeneratedScript, AppError> {
    generate_at(username, options, Utc::now())
}

/// Generate an sbatch script for an explicit invocation instant.
///
/// Identical inputs and instant produce byte-identical output, which makes
/// this the entry point for reproducible generation and for tests.
pub fn generate_at(
    username: &str,
    options: &GenerateOptions,
    invoked_at: DateTime<Utc>,
) -> Result<GeneratedScript, AppError> {
    let user = Username::new(username)?;
    let renderer = services::MinijinjaRenderer::new();
    app::commands::generate::execute(&user, options, invoked_at, &renderer)
}
