#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FALLBACK: &str = "https://prod.spline.design/41MGRk-UDPKO-l6W/scene.splinecode";

fn cmd(state: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_BACKEND_URL")
        .env_remove("FOLIO_SCENE_URL")
        .env_remove("FOLIO_CONTACT_ADDRESS")
        .env("RUST_LOG", "off")
        .arg("--state-dir")
        .arg(state.path());
    cmd
}

fn refused_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

#[test]
fn scene_show_defaults_to_fallback() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["scene", "show"])
        .assert()
        .success()
        .stdout(contains(FALLBACK).and(contains("(fallback)")));
}

#[test]
fn scene_show_uses_environment_default() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .env("FOLIO_SCENE_URL", "https://scenes.example.com/env.splinecode")
        .args(["scene", "show"])
        .assert()
        .success()
        .stdout(contains("https://scenes.example.com/env.splinecode (environment)"));
}

#[test]
fn scene_set_persists_across_runs() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["scene", "set", "  https://scenes.example.com/custom.splinecode "])
        .assert()
        .success()
        .stdout(contains("https://scenes.example.com/custom.splinecode (override)"));

    cmd(&state)
        .args(["scene", "show"])
        .assert()
        .success()
        .stdout(contains("https://scenes.example.com/custom.splinecode (persisted)"));
}

#[test]
fn scene_toggle_from_custom_goes_to_fallback() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["scene", "set", "https://scenes.example.com/custom.splinecode"])
        .assert()
        .success();

    cmd(&state)
        .args(["scene", "toggle"])
        .assert()
        .success()
        .stdout(contains(FALLBACK));
}

#[test]
fn scene_show_ignores_malformed_state_file() {
    let state = TempDir::new().unwrap();
    std::fs::write(state.path().join("state.json"), r#"{"scene_url": 5}"#).unwrap();
    cmd(&state)
        .args(["scene", "show"])
        .assert()
        .success()
        .stdout(contains(FALLBACK).and(contains("(fallback)")));
}

#[test]
fn scene_show_json() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["--json", "scene", "show"])
        .assert()
        .success()
        .stdout(contains("\"origin\": \"fallback\""));
}

#[test]
fn send_with_blank_field_fails_validation() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["send", "--name", "  ", "--email", "ada@example.com"])
        .args(["--message", "Hello"])
        .assert()
        .failure()
        .stdout(contains("Please fill in your name, email, and message."));
}

#[test]
fn send_unreachable_prints_mail_handoff() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["--backend", &refused_base()])
        .args(["send", "--name", "Ada", "--email", "ada@example.com"])
        .args(["--message", "Hello", "--no-open"])
        .assert()
        .failure()
        .stdout(
            contains("Direct send failed")
                .and(contains("mailto:shreyash@certiswift.in?subject=Collaboration%20request%20from%20Ada")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn send_delivered_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "email_dispatched": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["--json", "--backend", &server.uri()])
        .args(["send", "--name", "Ada", "--email", "ada@example.com"])
        .args(["--message", "Hello", "--no-open"])
        .assert()
        .success()
        .stdout(contains("\"outcome\": \"delivered\"").and(contains("\"form_cleared\": true")));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_saved_without_smtp_keeps_form_and_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"ok": true, "email_dispatched": false, "error": "SMTP not configured"}),
        ))
        .mount(&server)
        .await;

    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["--json", "--backend", &server.uri()])
        .args(["send", "--name", "Ada", "--email", "ada@example.com"])
        .args(["--message", "Hello", "--no-open"])
        .assert()
        .failure()
        .stdout(
            contains("\"outcome\": \"saved_no_smtp\"")
                .and(contains("\"saved\": true"))
                .and(contains("\"form_cleared\": false")),
        );
}

#[test]
fn health_without_backend_reports_unreachable() {
    let state = TempDir::new().unwrap();
    cmd(&state)
        .args(["health"])
        .assert()
        .failure()
        .stdout(contains("SMTP configured: false").and(contains(
            "Unable to reach backend health endpoint.",
        )));
}
