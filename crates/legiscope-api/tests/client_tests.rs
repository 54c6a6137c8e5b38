use legiscope_api::{Client, Error};
use legiscope_testing::{fixtures, StubResponse, StubServer};

#[tokio::test(flavor = "multi_thread")]
async fn test_health() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::HEALTH_OK)]).unwrap();
    let client = Client::new(server.base_url());

    let health = client.health().await.unwrap();
    assert!(health.success);
    assert!(health.gemini_configured);

    let recorded = server.finish();
    assert_eq!(recorded[0].target, "/api/health");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commissions_current_and_legacy_shapes() {
    let server = StubServer::start(vec![
        StubResponse::ok(fixtures::COMMISSIONS),
        StubResponse::ok(fixtures::COMMISSIONS_LEGACY),
    ])
    .unwrap();
    let client = Client::new(server.base_url());

    let current = client.commissions("Permanentes", "").await.unwrap();
    assert_eq!(current.len(), 2);
    assert_eq!(current[0].commission_name, "Hacienda");
    assert_eq!(current[0].total_sessions, 42);

    let legacy = client.commissions("Permanentes", "hac").await.unwrap();
    assert_eq!(legacy.len(), 1);

    let recorded = server.finish();
    assert!(recorded[0].target.starts_with("/api/commissions?"));
    assert!(recorded[0].target.contains("group=Permanentes"));
    assert!(recorded[1].target.contains("q=hac"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commission_sessions_grouped_by_year() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::SESSIONS)]).unwrap();
    let client = Client::new(server.base_url());

    let sessions = client
        .commission_sessions("Permanentes", "Hacienda")
        .await
        .unwrap();
    assert_eq!(sessions.years, vec!["2026", "2025"]);
    assert_eq!(sessions.total_sessions(), 2);
    let recent = &sessions.sessions_by_year["2026"][0];
    assert_eq!(recent.id, "s100");
    assert_eq!(recent.estado, "Citada");
    assert!(!recent.transcript);

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_load_end_to_end() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::PROFILE_FULL)]).unwrap();
    let client = Client::new(server.base_url());

    let profile = client.kom_profile("camara", "42").await.unwrap();
    assert_eq!(profile.biografia, "x");
    assert_eq!(profile.topicos.len(), 1);
    assert_eq!(profile.topicos[0].titulo, "A");
    assert_eq!(profile.topicos[0].contenido, "B");

    let recorded = server.finish();
    assert_eq!(recorded[0].target, "/api/kom/camara/42");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_profile_decodes_to_skeleton() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::PROFILE_MISSING)]).unwrap();
    let client = Client::new(server.base_url());

    let profile = client.kom_profile("camara", "42").await.unwrap();
    assert_eq!(profile.biografia, "");
    assert!(profile.topicos.is_empty());
    assert!(profile.links.is_empty());

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_save_posts_full_draft() {
    let server = StubServer::start(vec![
        StubResponse::ok(fixtures::PROFILE_FULL),
        StubResponse::ok(fixtures::SAVE_OK),
    ])
    .unwrap();
    let client = Client::new(server.base_url());

    let profile = client.kom_profile("camara", "42").await.unwrap();
    client
        .save_kom_profile("camara", "42", &profile)
        .await
        .unwrap();

    let recorded = server.finish();
    assert_eq!(recorded[1].method, "POST");
    assert_eq!(recorded[1].target, "/api/kom/camara/42");
    let body: serde_json::Value = serde_json::from_str(&recorded[1].body).unwrap();
    assert_eq!(body["biografia"], "x");
    assert_eq!(body["topicos"][0]["titulo"], "A");
    // Display-only and server-owned fields never travel.
    assert!(body.get("nombre").is_none());
    assert!(body.get("cargo").is_none());
    assert!(body.get("updated_at").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_save_backend_failure_is_reported() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::SAVE_FAIL)]).unwrap();
    let client = Client::new(server.base_url());

    let err = client
        .save_kom_profile("camara", "42", &Default::default())
        .await
        .unwrap_err();
    match err {
        Error::Backend(msg) => assert_eq!(msg, "disk full"),
        other => panic!("expected backend error, got {:?}", other),
    }

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_carries_status_and_body() {
    let server = StubServer::start(vec![StubResponse::json(500, "boom")]).unwrap();
    let client = Client::new(server.base_url());

    let err = client.politicians("").await.unwrap_err();
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected http error, got {:?}", other),
    }

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_is_a_decode_error() {
    let server = StubServer::start(vec![StubResponse::ok("not json")]).unwrap();
    let client = Client::new(server.base_url());

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_activity_and_news_feeds() {
    let server = StubServer::start(vec![
        StubResponse::ok(fixtures::ACTIVITY),
        StubResponse::ok(fixtures::NEWS),
    ])
    .unwrap();
    let client = Client::new(server.base_url());

    let activity = client.activity("", "Citada", "").await.unwrap();
    assert_eq!(activity.len(), 2);
    assert_eq!(activity[1].session_id, "s55");

    let news = client.news("diario_oficial", "").await.unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[1].titulo, "Decreto 12");
    assert_eq!(news[1].url, "https://example.org/b.pdf");

    let recorded = server.finish();
    assert!(recorded[0].target.contains("status=Citada"));
    assert!(recorded[1].target.contains("source=diario_oficial"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_chat_rejects_empty_message_locally() {
    // No scripted response: the request must never leave the client.
    let client = Client::new("http://127.0.0.1:9");
    let err = client.chat("   ").await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_chat_prefers_backend_error_over_fallback_text() {
    let server = StubServer::start(vec![
        StubResponse::ok(fixtures::CHAT_OK),
        StubResponse::ok(fixtures::CHAT_FAIL),
    ])
    .unwrap();
    let client = Client::new(server.base_url());

    let answer = client.chat("¿cuándo sesionó Hacienda?").await.unwrap();
    assert!(answer.contains("17-12-2025"));

    let err = client.chat("otra").await.unwrap_err();
    match err {
        Error::Backend(msg) => assert_eq!(msg, "quota exceeded"),
        other => panic!("expected backend error, got {:?}", other),
    }

    server.finish();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_upload_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

    let server = StubServer::start(vec![
        StubResponse::ok(fixtures::UPLOAD_OK),
        StubResponse::ok(fixtures::UPLOAD_FAIL),
    ])
    .unwrap();
    let client = Client::new(server.base_url());

    let saved_as = client.upload(&path).await.unwrap();
    assert_eq!(saved_as, "upload_20260831_doc.pdf");

    let err = client.upload(&path).await.unwrap_err();
    assert!(matches!(err, Error::Backend(_)));

    let recorded = server.finish();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].target, "/api/upload");
    assert!(recorded[0].body.contains("name=\"file\""));
    assert!(recorded[0].body.contains("doc.pdf"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transcript_fetch() {
    let server = StubServer::start(vec![StubResponse::ok(fixtures::TRANSCRIPT)]).unwrap();
    let client = Client::new(server.base_url());

    let text = client
        .transcript("Permanentes", "Hacienda", "s99")
        .await
        .unwrap();
    assert!(text.starts_with("Sesion ordinaria"));

    let recorded = server.finish();
    assert_eq!(
        recorded[0].target,
        "/api/commissions/Permanentes/Hacienda/sessions/s99/transcript"
    );
}
