//! Startup behaviour of the compiled binary.

use std::process::Stdio;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIN: &str = env!("CARGO_BIN_EXE_homework-bot");

#[tokio::test]
async fn missing_credential_exits_without_polling() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let workdir = tempfile::tempdir().expect("tempdir");

    for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
        let mut command = tokio::process::Command::new(BIN);
        command
            .env_clear()
            .current_dir(workdir.path())
            .env("HOMEWORK_ENDPOINT", format!("{}/statuses/", server.uri()))
            .env("TELEGRAM_API_URL", server.uri())
            .env("RETRY_PERIOD_SECS", "1")
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        for name in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let value = if name == missing { "" } else { "value" };
            command.env(name, value);
        }

        let output = tokio::time::timeout(std::time::Duration::from_secs(30), command.output())
            .await
            .expect("binary should exit promptly")
            .expect("binary should run");

        assert_eq!(
            output.status.code(),
            Some(1),
            "{missing} empty must fail startup, stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}
