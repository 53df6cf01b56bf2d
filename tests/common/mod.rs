//! Shared testing utilities for sbgen CLI tests.

use assert_cmd::Command;

/// Testing harness for driving the compiled `sbgen` binary.
pub struct TestContext;

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        TestContext
    }

    /// Build a command for invoking the compiled `sbgen` binary.
    pub fn cli(&self) -> Command {
        Command::cargo_bin("sbgen").expect("Failed to locate sbgen binary")
    }

    /// Run the binary with the given arguments and return (stdout, stderr).
    pub fn run(&self, args: &[&str]) -> (String, String) {
        let output = self.cli().args(args).output().expect("Failed to run sbgen binary");
        (
            String::from_utf8(output.stdout).expect("stdout should be UTF-8"),
            String::from_utf8(output.stderr).expect("stderr should be UTF-8"),
        )
    }
}
