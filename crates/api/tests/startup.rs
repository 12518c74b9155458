//! Startup behaviour of the `sitecrew-api` binary.
//!
//! Runs the real executable with the database variables blanked out, so it
//! must exit before connecting to anything.

use std::process::Command;

const DB_VARS: [&str; 4] = ["DB_USERNAME", "DB_PASSWORD", "DB_HOST", "DB_DBNAME"];

fn server_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sitecrew-api"));
    // No `.env` to pick up, and blank values win over anything dotenv would load.
    cmd.current_dir(std::env::temp_dir())
        .env_remove("HOST")
        .env_remove("PORT")
        .env_remove("CORS_ORIGINS")
        .env_remove("REQUEST_TIMEOUT_SECS")
        .env_remove("DB_MAX_CONNECTIONS")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn missing_database_variables_prevent_startup() {
    let mut cmd = server_command();
    for var in DB_VARS {
        cmd.env(var, "");
    }

    let output = cmd.output().expect("failed to run sitecrew-api");
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success(), "server started: {stdout}");
    assert!(
        stderr.contains(
            "missing required environment variable(s): DB_USERNAME, DB_PASSWORD, DB_HOST, DB_DBNAME"
        ),
        "stderr: {stderr}"
    );
    assert!(!stdout.contains("Starting server"), "stdout: {stdout}");
}

#[test]
fn single_missing_variable_is_named() {
    let mut cmd = server_command();
    cmd.env("DB_USERNAME", "crew")
        .env("DB_PASSWORD", "secret")
        .env("DB_HOST", "127.0.0.1")
        .env("DB_DBNAME", "   ");

    let output = cmd.output().expect("failed to run sitecrew-api");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("missing required environment variable(s): DB_DBNAME"),
        "stderr: {stderr}"
    );
}
