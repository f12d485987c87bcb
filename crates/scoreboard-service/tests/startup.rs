//! Process startup tests for the service binary.

use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::time::Duration;

#[test]
fn exits_with_status_one_without_database_uri() {
    let output = Command::new(env!("CARGO_BIN_EXE_scoreboard-service"))
        .env_remove("MONGODB_URI")
        .env("PORT", "0")
        .env("RUST_LOG", "error")
        // Keep a stray .env file in the workspace from supplying the URI.
        .current_dir(std::env::temp_dir())
        .output()
        .expect("Failed to run service binary");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("MONGODB_URI is not defined"),
        "unexpected output: {stdout}"
    );
    assert!(!stdout.contains("Server running on port"));
}

/// Reserve a free local port for the child process.
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a port");
    listener.local_addr().expect("Failed to read local addr").port()
}

#[tokio::test]
async fn serves_errors_when_database_is_unreachable() {
    let port = free_port();
    let mut child = Command::new(env!("CARGO_BIN_EXE_scoreboard-service"))
        .env("MONGODB_URI", "not-a-connection-string")
        .env("PORT", port.to_string())
        .current_dir(std::env::temp_dir())
        .stdout(Stdio::null())
        .spawn()
        .expect("Failed to start service binary");

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    let url = format!("http://127.0.0.1:{port}/scores");

    // Wait for the listener to come up.
    let mut response = None;
    for _ in 0..50 {
        if let Ok(r) = client.get(&url).send().await {
            response = Some(r);
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let exited = child.try_wait().expect("Failed to poll child");
    child.kill().ok();
    child.wait().ok();

    assert!(exited.is_none(), "service exited after a failed database connection");
    let response = response.expect("service never accepted a connection");
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.starts_with("Server error: "), "unexpected body: {body}");
}
