use thiserror::Error;

/// Library-wide error type for sbgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Username cannot be used to derive the storage path.
    #[error("Invalid username '{0}': must be non-empty and contain no whitespace or '/'")]
    InvalidUsername(String),

    /// Template/parameter mismatch. Indicates a broken embedded template
    /// rather than bad user input.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },
}
