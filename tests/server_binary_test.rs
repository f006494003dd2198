// ABOUTME: Integration tests for the gym-journal-server binary startup sequence
// ABOUTME: Spawns the compiled server and checks startup output and failure exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

#[test]
fn test_invalid_config_is_logged_before_exit() {
    let output = Command::new(env!("CARGO_BIN_EXE_gym-journal-server"))
        .env_remove("RUST_LOG")
        .env("LOG_FORMAT", "compact")
        .env("HTTP_PORT", "not-a-port")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        logs.contains("Loading configuration from environment variables"),
        "startup logs: {logs}"
    );
    assert!(logs.contains("HTTP_PORT"), "startup logs: {logs}");
}
