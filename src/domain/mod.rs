//! Domain model: validated inputs, default resolution, and error type.

mod error;
mod params;
mod username;

pub use error::AppError;
pub use params::{
    DEFAULT_ACCOUNT, DEFAULT_CLASSPATH_JAR, DEFAULT_HEAP_SIZE, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR, DEFAULT_PARAMS_FILE, DEFAULT_REFLANG_FILE, DEFAULT_TIME, GenerateOptions,
    ResolvedParameters, default_job_name, default_project_dir,
};
pub use username::Username;
