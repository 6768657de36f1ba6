//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Result of one `lumifmt` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

pub fn lumifmt() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lumifmt"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run(args: &[&str]) -> RunResult {
    lumifmt()
        .args(args)
        .output()
        .expect("spawn lumifmt")
        .into()
}

/// Run with `stdin` piped in and `--input` omitted.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> RunResult {
    let mut child = lumifmt()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lumifmt");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for lumifmt").into()
}
