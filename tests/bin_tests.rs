use std::process::Command;

use lifeterm::config::SEED_VAR;

#[test]
fn bad_seed_is_reported_once() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_lifeterm"))
        .env(SEED_VAR, "not-a-number")
        .env_remove("RUST_LOG")
        .output()?;

    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(stdout.matches("not-a-number").count(), 1, "stdout: {stdout}");
    assert!(stdout.contains("Failed to read configuration"));
    assert!(!stderr.contains("not-a-number"), "stderr: {stderr}");

    Ok(())
}
