use assert_cmd::Command;
use legiscope_testing::{fixtures, StubResponse, StubServer};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command wired to a stub backend, with config kept in a throwaway data dir
/// so the developer's real config.toml never leaks into tests.
fn command(server: &StubServer, data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("legiscope").expect("legiscope binary");
    cmd.env("LEGISCOPE_PATH", data_dir.path())
        .env_remove("LEGISCOPE_API_URL")
        .arg("--api-url")
        .arg(server.base_url());
    cmd
}

#[test]
fn test_health_plain() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::HEALTH_OK)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("(ok)"))
        .stdout(predicate::str::contains("configured"));

    let recorded = server.finish();
    assert_eq!(recorded[0].target, "/api/health");
}

#[test]
fn test_commission_list_plain() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::COMMISSIONS)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["commission", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hacienda"))
        .stdout(predicate::str::contains("42"));

    // default group from config lands in the query string
    let recorded = server.finish();
    assert!(recorded[0].target.contains("group=Permanentes"));
}

#[test]
fn test_commission_list_json() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::COMMISSIONS)]).unwrap();
    let dir = TempDir::new().unwrap();

    let output = command(&server, &dir)
        .args(["--format", "json", "commission", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["items"][0]["name"], "Hacienda");
    assert_eq!(parsed["total"], 2);
    server.finish();
}

#[test]
fn test_commission_sessions_grouped_by_year() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::SESSIONS)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["commission", "sessions", "Permanentes", "Hacienda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== 2026 =="))
        .stdout(predicate::str::contains("== 2025 =="))
        .stdout(predicate::str::contains("s100"))
        .stdout(predicate::str::contains("acta,cuenta,transcript"));
    server.finish();
}

#[test]
fn test_commission_sessions_year_filter() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::SESSIONS)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args([
            "commission",
            "sessions",
            "Permanentes",
            "Hacienda",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("== 2025 =="))
        .stdout(predicate::str::contains("== 2026 ==").not());
    server.finish();
}

#[test]
fn test_transcript() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::TRANSCRIPT)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args([
            "commission",
            "transcript",
            "Permanentes",
            "Hacienda",
            "s99",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Se abre la sesion"));
    server.finish();
}

#[test]
fn test_politician_list() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::POLITICIANS)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["politician", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("senado"));
    server.finish();
}

#[test]
fn test_profile_show_full() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::PROFILE_FULL)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["profile", "show", "camara", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Biography: x"))
        .stdout(predicate::str::contains("1. A - B"))
        .stdout(predicate::str::contains("Prensa"));
    server.finish();
}

#[test]
fn test_profile_show_missing_renders_placeholders() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::PROFILE_MISSING)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["profile", "show", "camara", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no topics registered)"))
        .stdout(predicate::str::contains("(no links)"));
    server.finish();
}

#[test]
fn test_activity_feed() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::ACTIVITY)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .arg("activity")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hacienda"))
        .stdout(predicate::str::contains("s55"));
    server.finish();
}

#[test]
fn test_news_feed() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::NEWS)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .arg("news")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ley 21.000 publicada"))
        .stdout(predicate::str::contains("Decreto 12"));

    let recorded = server.finish();
    assert!(recorded[0].target.contains("source=diario_oficial"));
}

#[test]
fn test_chat_answer() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::CHAT_OK)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["chat", "cuando sesiono Hacienda?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17-12-2025"));
    server.finish();
}

#[test]
fn test_chat_backend_error_is_fatal() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::CHAT_FAIL)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["chat", "hola"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota exceeded"));
    server.finish();
}

#[test]
fn test_chat_blank_message_never_reaches_backend() {
    let server = StubServer::start(vec![]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .args(["chat", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is required"));

    assert!(server.finish().is_empty());
}

#[test]
fn test_upload() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::UPLOAD_OK)]).unwrap();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("doc.pdf");
    std::fs::write(&file, b"%PDF-1.4 test").unwrap();

    command(&server, &dir)
        .args(["upload", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("upload_20260831_doc.pdf"));

    let recorded = server.finish();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].target, "/api/upload");
    assert!(recorded[0].body.contains("doc.pdf"));
}

#[test]
fn test_http_error_exits_nonzero() {
    let server =
        StubServer::start(vec![StubResponse::json(500, r#"{"detail": "boom"}"#)]).unwrap();
    let dir = TempDir::new().unwrap();

    command(&server, &dir)
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
    server.finish();
}
