use bookreview_e2e::infrastructure::session::{
    Credentials, HandshakeError, HandshakeStep, SessionClient,
};
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{
    SESSION_COOKIE, SESSION_TOKEN, mount_accepting_login, mount_csrf, mount_session, server,
    sessions_for,
};

#[rstest]
#[tokio::test]
async fn establishes_a_session_with_cookies(#[future(awt)] server: MockServer) {
    mount_csrf(&server).await;
    mount_accepting_login(&server).await;
    mount_session(&server, "reader@example.com").await;

    let established = sessions_for(&server)
        .establish(&Credentials::new("reader@example.com", "password-123"))
        .await
        .unwrap();

    let user = established.session.user.unwrap();
    assert_eq!(user.email.as_deref(), Some("reader@example.com"));
    assert!(
        established
            .cookies
            .iter()
            .any(|c| c.name == SESSION_COOKIE && c.value == SESSION_TOKEN),
        "session cookie missing from {:?}",
        established.cookies
    );
}

#[rstest]
#[tokio::test]
async fn posts_credentials_as_a_form(#[future(awt)] server: MockServer) {
    mount_csrf(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/callback/credentials"))
        .and(body_string_contains("email=form%40example.com"))
        .and(body_string_contains("password=secret-pass"))
        .and(body_string_contains("callbackUrl=%2F"))
        .respond_with(ResponseTemplate::new(200).insert_header(
            "set-cookie",
            format!("{SESSION_COOKIE}={SESSION_TOKEN}; Path=/"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_session(&server, "form@example.com").await;

    sessions_for(&server)
        .establish(&Credentials::new("form@example.com", "secret-pass"))
        .await
        .unwrap();
}

#[rstest]
#[tokio::test]
async fn csrf_failure_stops_the_handshake(#[future(awt)] server: MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/callback/credentials"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = sessions_for(&server)
        .establish(&Credentials::new("reader@example.com", "password-123"))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            HandshakeError::Status {
                step: HandshakeStep::CsrfToken,
                status: StatusCode::INTERNAL_SERVER_ERROR
            }
        ),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[tokio::test]
async fn error_redirect_means_rejected_credentials(#[future(awt)] server: MockServer) {
    mount_csrf(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/callback/credentials"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/api/auth/error?error=CredentialsSignin"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = sessions_for(&server)
        .establish(&Credentials::new("reader@example.com", "wrong-password"))
        .await
        .unwrap_err();

    match err {
        HandshakeError::Rejected { location } => assert!(location.contains("CredentialsSignin")),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn empty_session_is_not_authenticated(#[future(awt)] server: MockServer) {
    mount_csrf(&server).await;
    mount_accepting_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = sessions_for(&server)
        .establish(&Credentials::new("reader@example.com", "password-123"))
        .await
        .unwrap_err();

    assert!(matches!(err, HandshakeError::NotAuthenticated));
}

#[rstest]
#[tokio::test]
async fn session_endpoint_failure_names_the_step(#[future(awt)] server: MockServer) {
    mount_csrf(&server).await;
    mount_accepting_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = sessions_for(&server)
        .establish(&Credentials::new("reader@example.com", "password-123"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        HandshakeError::Status {
            step: HandshakeStep::SessionCheck,
            ..
        }
    ));
    assert_eq!(err.to_string(), "session check returned 503 Service Unavailable");
}

#[tokio::test]
async fn unreachable_app_is_a_transport_error() {
    // Port 9 (discard) has no listener
    let sessions = SessionClient::new(Url::parse("http://127.0.0.1:9").unwrap());

    let err = sessions
        .establish(&Credentials::new("reader@example.com", "password-123"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        HandshakeError::Transport {
            step: HandshakeStep::CsrfToken,
            ..
        }
    ));
}
