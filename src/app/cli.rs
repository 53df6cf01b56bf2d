//! CLI Adapter.

use clap::Parser;

use crate::domain::{
    AppError, DEFAULT_ACCOUNT, DEFAULT_CLASSPATH_JAR, DEFAULT_HEAP_SIZE, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR, DEFAULT_PARAMS_FILE, DEFAULT_REFLANG_FILE, DEFAULT_TIME, GenerateOptions,
    Username,
};
use crate::services::MinijinjaRenderer;

#[derive(Parser)]
#[command(name = "sbgen")]
#[command(version)]
#[command(
    about = "Creates a script for submitting to Slurm to run cross-validation tests",
    long_about = None
)]
struct Cli {
    /// The system username to use for running the batch script
    #[arg(value_name = "USER")]
    user: String,

    /// Specify a name for the job allocation; the name will appear along
    /// with the job id number when querying running jobs on the system
    #[arg(short = 'j', long, value_name = "JOBNAME")]
    job_name: Option<String>,

    /// Charge resources used by this job to the specified account
    #[arg(short, long, value_name = "ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    account: String,

    /// Set a limit on the total run time of the job allocation
    #[arg(short, long, value_name = "TIME", default_value = DEFAULT_TIME)]
    time: String,

    /// Set the maximum heap size of the JVM running the job
    #[arg(short = 'p', long, value_name = "HEAPSIZE", default_value = DEFAULT_HEAP_SIZE)]
    heap: String,

    /// The project root directory
    #[arg(short = 'd', long, value_name = "DIRPATH")]
    project_dir: Option<String>,

    /// The path of the directory containing the session data to use for
    /// cross-validation relative to the project root
    #[arg(short, long, value_name = "DIRPATH", default_value = DEFAULT_INPUT_DIR)]
    indir: String,

    /// The path of the directory to write the cross-validation results to
    /// relative to the project root
    #[arg(short, long, value_name = "DIRPATH", default_value = DEFAULT_OUTPUT_DIR)]
    outdir: String,

    /// The path of the referring-language file to read relative to the
    /// project root
    #[arg(short, long, value_name = "FILENAME", default_value = DEFAULT_REFLANG_FILE)]
    reflang: String,

    /// The path of the model-parameters file to read relative to the
    /// project root
    #[arg(short, long, value_name = "FILENAME", default_value = DEFAULT_PARAMS_FILE)]
    model_params: String,

    /// The path of the JAR file to run relative to the project root
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CLASSPATH_JAR)]
    classpath_jar: String,
}

impl Cli {
    fn into_inputs(self) -> (String, GenerateOptions) {
        let options = GenerateOptions {
            job_name: self.job_name,
            account: self.account,
            time: self.time,
            heap_size: self.heap,
            project_dir: self.project_dir,
            input_dir: self.indir,
            output_dir: self.outdir,
            reflang_file: self.reflang,
            params_file: self.model_params,
            classpath_jar: self.classpath_jar,
        };
        (self.user, options)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let (user, options) = cli.into_inputs();
    let user = Username::new(&user)?;
    let renderer = MinijinjaRenderer::new();

    let generated =
        crate::app::commands::generate::execute(&user, &options, chrono::Utc::now(), &renderer)?;

    for (label, value) in generated.parameters.diagnostics() {
        eprintln!("{}: {}", label, value);
    }
    println!("{}", generated.script);

    Ok(())
}
