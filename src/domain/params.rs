//! Parameter resolution for the generated sbatch script.
//!
//! Every field of the final parameter set is resolved in one pass: explicit
//! overrides are used verbatim, path fields are joined under the project
//! directory, and the remaining defaults are derived from the username and
//! the invocation instant. The resolved set is immutable and is consumed
//! exactly once to render the script template.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::Username;

pub const DEFAULT_ACCOUNT: &str = "2018-1";
pub const DEFAULT_TIME: &str = "8:00:00";
pub const DEFAULT_HEAP_SIZE: &str = "10g";
pub const DEFAULT_INPUT_DIR: &str = "Data";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_REFLANG_FILE: &str = "Data/utt-referring-tokens-lemma.tsv";
pub const DEFAULT_PARAMS_FILE: &str = "Data/model-params.tsv";
pub const DEFAULT_CLASSPATH_JAR: &str = "tangrams-wac-0.0.1-SNAPSHOT-jar-with-dependencies.jar";

/// Inputs to parameter resolution, one field per CLI flag.
///
/// `job_name` and `project_dir` default to computed values and are therefore
/// optional here; the other fields carry their fixed literal defaults.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub job_name: Option<String>,
    pub account: String,
    pub time: String,
    pub heap_size: String,
    pub project_dir: Option<String>,
    pub input_dir: String,
    pub output_dir: String,
    pub reflang_file: String,
    pub params_file: String,
    pub classpath_jar: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            job_name: None,
            account: DEFAULT_ACCOUNT.to_string(),
            time: DEFAULT_TIME.to_string(),
            heap_size: DEFAULT_HEAP_SIZE.to_string(),
            project_dir: None,
            input_dir: DEFAULT_INPUT_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            reflang_file: DEFAULT_REFLANG_FILE.to_string(),
            params_file: DEFAULT_PARAMS_FILE.to_string(),
            classpath_jar: DEFAULT_CLASSPATH_JAR.to_string(),
        }
    }
}

/// The complete parameter set consumed by the template renderer.
///
/// Field names double as template placeholder names, so the struct
/// serializes directly into the render context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    pub job_name: String,
    pub account: String,
    pub time: String,
    pub user: String,
    pub mail_user: String,
    pub project_dir: String,
    pub input_dir: String,
    pub output_dir: String,
    pub reflang_file: String,
    pub params_file: String,
    pub classpath_jar: String,
    pub heap_size: String,
    pub created_at: String,
}

impl ResolvedParameters {
    /// Resolve every field to a concrete value.
    ///
    /// The invocation instant is passed in rather than read here, so two
    /// calls with identical inputs produce identical output.
    pub fn resolve(
        user: &Username,
        options: &GenerateOptions,
        invoked_at: DateTime<Utc>,
    ) -> Self {
        let job_name = options
            .job_name
            .clone()
            .unwrap_or_else(|| default_job_name(invoked_at));
        let project_dir = options
            .project_dir
            .clone()
            .unwrap_or_else(|| default_project_dir(user));

        ResolvedParameters {
            job_name,
            account: options.account.clone(),
            time: options.time.clone(),
            user: user.as_str().to_string(),
            mail_user: user.mail_address(),
            input_dir: join_under_project(&project_dir, &options.input_dir),
            output_dir: join_under_project(&project_dir, &options.output_dir),
            reflang_file: join_under_project(&project_dir, &options.reflang_file),
            params_file: join_under_project(&project_dir, &options.params_file),
            classpath_jar: join_under_project(&project_dir, &options.classpath_jar),
            project_dir,
            heap_size: options.heap_size.clone(),
            created_at: invoked_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Labelled parameter values in the order they are echoed to stderr.
    pub fn diagnostics(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Job name", self.job_name.as_str()),
            ("Account", self.account.as_str()),
            ("Time", self.time.as_str()),
            ("User", self.user.as_str()),
            ("Notification e-mail address", self.mail_user.as_str()),
            ("Project directory root", self.project_dir.as_str()),
            ("Input directory", self.input_dir.as_str()),
            ("Output directory", self.output_dir.as_str()),
            ("Classpath JAR", self.classpath_jar.as_str()),
            ("Referring-language file path", self.reflang_file.as_str()),
            ("Model-parameters file path", self.params_file.as_str()),
            ("Heap size", self.heap_size.as_str()),
        ]
    }
}

/// Storage root for a user's project data on the cluster filesystem.
pub fn default_project_dir(user: &Username) -> String {
    format!(
        "/cfs/klemming/nobackup/{initial}/{user}/tangrams-restricted/",
        initial = user.initial(),
        user = user
    )
}

/// Job names are unique per invocation instant.
pub fn default_job_name(invoked_at: DateTime<Utc>) -> String {
    format!("tangrams-{}", invoked_at.timestamp())
}

/// POSIX-style join: an absolute path replaces the project directory
/// outright, a relative path is appended under it.
fn join_under_project(project_dir: &str, path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    format!("{}/{}", project_dir.trim_end_matches('/'), path)
}
