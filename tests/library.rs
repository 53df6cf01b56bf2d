//! Library-level coverage for parameter resolution and rendering.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use sbgen::{GenerateOptions, generate_at};

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 12, 5, 12, 0, 0).unwrap()
}

#[test]
fn rendering_is_idempotent_for_a_fixed_instant() {
    let options = GenerateOptions::default();

    let first = generate_at("alice", &options, fixed_instant()).unwrap();
    let second = generate_at("alice", &options, fixed_instant()).unwrap();

    assert_eq!(first.script, second.script);
    assert_eq!(first.parameters, second.parameters);
}

#[test]
fn generated_script_records_the_invocation_instant() {
    let generated = generate_at("alice", &GenerateOptions::default(), fixed_instant()).unwrap();

    assert!(generated.script.contains("This file was generated on 2017-12-05T12:00:00Z."));
}

#[test]
fn shell_variable_syntax_survives_rendering() {
    let generated = generate_at("alice", &GenerateOptions::default(), fixed_instant()).unwrap();

    assert!(generated.script.contains("java -server -Xmx${HEAP_SIZE}"));
    assert!(generated.script.contains("echo \"Will use heap space size of ${HEAP_SIZE}.\""));
}

#[test]
fn per_job_output_files_are_named_after_the_job() {
    let options =
        GenerateOptions { job_name: Some("cv-run".to_string()), ..GenerateOptions::default() };
    let generated = generate_at("bob", &options, fixed_instant()).unwrap();

    let outdir = "/cfs/klemming/nobackup/b/bob/tangrams-restricted/output";
    assert!(generated.script.contains(&format!("OUTDIR=\"{}/cv-run\"", outdir)));
    assert!(generated.script.contains(&format!("STD_OUTFILE=\"{}/cv-run.out.txt\"", outdir)));
    assert!(generated.script.contains(&format!("ERR_OUTFILE=\"{}/cv-run.err.txt\"", outdir)));
    assert!(generated.script.contains(&format!("#SBATCH -o \"{}/cv-run-sbatch.out.txt\"", outdir)));
}

#[test]
fn overrides_render_verbatim_and_defaults_do_not() {
    let options = GenerateOptions {
        heap_size: "32g".to_string(),
        time: "12:30:00".to_string(),
        ..GenerateOptions::default()
    };
    let generated = generate_at("alice", &options, fixed_instant()).unwrap();

    assert!(generated.script.contains("HEAP_SIZE=\"32g\""));
    assert!(!generated.script.contains("10g"));
    assert!(generated.script.contains("#SBATCH -t 12:30:00"));
    assert!(!generated.script.contains("8:00:00"));
}

proptest! {
    #[test]
    fn default_project_dir_follows_the_storage_layout(user in "[a-z][a-z0-9_-]{0,15}") {
        let generated = generate_at(&user, &GenerateOptions::default(), fixed_instant()).unwrap();

        let initial = user.chars().next().unwrap();
        let expected = format!("/cfs/klemming/nobackup/{}/{}/tangrams-restricted/", initial, user);
        prop_assert_eq!(&generated.parameters.project_dir, &expected);
        prop_assert_eq!(
            &generated.parameters.input_dir,
            &format!("{}Data", expected)
        );
    }
}
