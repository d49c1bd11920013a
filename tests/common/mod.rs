use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub fn cmd() -> Command {
    cargo_bin_cmd!("partline")
}

/// Run a one-shot subcommand with `--json` and parse the envelope.
pub fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

/// Drive an interactive session by piping a menu script into stdin.
pub fn run_shell(input: &str) -> Assert {
    cmd().write_stdin(input).assert().success()
}
