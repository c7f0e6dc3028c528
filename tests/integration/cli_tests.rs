//! Integration tests for the CLI binary.
//!
//! Verifies that the `trqp` binary exists, responds to basic flags, and
//! can run queries against a seeded snapshot file.
//!
//! This test is registered as a [[test]] in the trqp-cli crate so that
//! CARGO_BIN_EXE_trqp is available.

use std::process::Command;

/// Get a Command pointing to the `trqp` binary.
fn trqp_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trqp"))
}

#[test]
fn cli_responds_to_help() {
    let output = trqp_binary()
        .arg("--help")
        .output()
        .expect("failed to execute trqp --help");

    assert!(
        output.status.success(),
        "trqp --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("trqp") || stdout.contains("Usage"),
        "trqp --help output should contain usage information, got: {stdout}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = trqp_binary()
        .arg("--version")
        .output()
        .expect("failed to execute trqp --version");

    assert!(output.status.success());
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = trqp_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute trqp");

    assert!(
        !output.status.success(),
        "trqp with unknown flag should exit with error"
    );
}

#[test]
fn cli_init_authorize_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let registry = dir.path().join("registry.json");
    let registry_arg = registry.to_str().unwrap();

    // init writes a snapshot file.
    let output = trqp_binary()
        .args(["--registry", registry_arg, "init"])
        .output()
        .expect("failed to execute trqp init");
    assert!(
        output.status.success(),
        "init should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(registry.exists());

    // init again without --force refuses to overwrite.
    let output = trqp_binary()
        .args(["--registry", registry_arg, "init"])
        .output()
        .expect("failed to execute trqp init");
    assert!(!output.status.success());

    // The seeded issuer is authorized via its direct authority.
    let output = trqp_binary()
        .args([
            "--registry",
            registry_arg,
            "authorize",
            "did:example:issuer",
            "did:example:partners",
            "issue",
            "credential",
        ])
        .output()
        .expect("failed to execute trqp authorize");
    assert!(
        output.status.success(),
        "seeded authorization should verify, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"verified\": true"));

    // An unheld capability yields a negative verdict and exit code 1.
    let output = trqp_binary()
        .args([
            "--registry",
            registry_arg,
            "authorize",
            "did:example:issuer",
            "did:example:partners",
            "revoke",
            "credential",
        ])
        .output()
        .expect("failed to execute trqp authorize");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("grant_not_found"));

    // The seeded snapshot passes validation.
    let output = trqp_binary()
        .args(["--registry", registry_arg, "validate"])
        .output()
        .expect("failed to execute trqp validate");
    assert!(output.status.success());
}

#[test]
fn cli_rejects_malformed_time() {
    let dir = tempfile::tempdir().unwrap();
    let registry = dir.path().join("registry.json");
    let registry_arg = registry.to_str().unwrap();

    trqp_binary()
        .args(["--registry", registry_arg, "init"])
        .output()
        .expect("failed to execute trqp init");

    let output = trqp_binary()
        .args([
            "--registry",
            registry_arg,
            "recognize",
            "did:example:partner-registry",
            "did:example:rootnet",
            "recognize",
            "ecosystem",
            "--time",
            "yesterday-ish",
        ])
        .output()
        .expect("failed to execute trqp recognize");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("time") || stderr.contains("timestamp"),
        "malformed --time should be reported as an input error, got: {stderr}"
    );
}
