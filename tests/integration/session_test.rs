//! Integration tests for session persistence and the CLI wiring around it.

mod helpers;

use std::sync::Arc;

use clap::Parser;
use futures::StreamExt;

use feedesk_auth::{FileTokenStorage, Navigation};
use feedesk_cli::{AppContext, Cli};
use feedesk_core::ErrorKind;
use feedesk_core::config::{AppConfig, SessionConfig};
use feedesk_core::traits::TokenStorage;

fn file_config(dir: &std::path::Path, base_url: &str) -> AppConfig {
    AppConfig {
        api: helpers::api_config(base_url),
        session: SessionConfig {
            storage_dir: dir.to_string_lossy().into_owned(),
            token_key: helpers::TOKEN_KEY.to_string(),
        },
        ..AppConfig::default()
    }
}

#[test]
fn test_expired_persisted_token_starts_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileTokenStorage::new(dir.path()).unwrap());
    let expired = helpers::mint_token("testuser", "admin", -3600);
    storage.set_item(helpers::TOKEN_KEY, &expired).unwrap();

    let gateway = helpers::gateway_with_storage("http://localhost:8080", storage.clone());

    assert_eq!(gateway.current_token(), None);
    assert!(!gateway.is_logged_in());
    // Left in place until the next explicit logout.
    assert_eq!(storage.get_item(helpers::TOKEN_KEY).unwrap(), Some(expired));

    gateway.logout();
    assert_eq!(storage.get_item(helpers::TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let server = helpers::MockBackOffice::start().await;
    let token = helpers::valid_token();
    server.respond_json(
        "POST",
        "/api/auth/login",
        200,
        serde_json::json!({ "token": token }),
    );
    let config = file_config(dir.path(), &server.base_url);

    let first = AppContext::from_config(&config).unwrap();
    first.gateway.login("alice", "secret").await.unwrap();
    drop(first);

    let second = AppContext::from_config(&config).unwrap();
    assert_eq!(second.gateway.current_token(), Some(token));
    assert!(second.gateway.is_logged_in());
    assert_eq!(second.gateway.username().as_deref(), Some("testuser"));

    second.gateway.logout();
    let third = AppContext::from_config(&config).unwrap();
    assert_eq!(third.gateway.current_token(), None);
}

#[tokio::test]
async fn test_logout_is_idempotent_and_observed() {
    let (ctx, _) = helpers::logged_in_context("http://localhost:8080");
    let mut logged_in = ctx.gateway.logged_in();
    let mut navigation = ctx.gateway.navigation();
    assert_eq!(logged_in.next().await, Some(true));

    ctx.gateway.logout();
    ctx.gateway.logout();

    assert_eq!(logged_in.next().await, Some(false));
    assert_eq!(logged_in.next().await, Some(false));
    assert_eq!(navigation.recv().await.unwrap(), Navigation::Login);
    assert_eq!(navigation.recv().await.unwrap(), Navigation::Login);
    assert_eq!(ctx.gateway.current_token(), None);
}

#[tokio::test]
async fn test_cli_command_with_rejected_session() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("GET", "/api/customer/alice", 403, "");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);

    let cli = Cli::try_parse_from(["feedesk", "customer", "find", "alice"]).unwrap();
    let err = cli.execute(&ctx).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(!ctx.gateway.is_logged_in());
}

#[tokio::test]
async fn test_cli_form_validation_sends_nothing() {
    let server = helpers::MockBackOffice::start().await;
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    let cli = Cli::try_parse_from([
        "feedesk", "fee", "create", "--table", "ONE", "--installments", "13", "--flag",
        "MASTER_VISA", "--machine-fee", "1.0", "--client-fee", "2.0",
    ])
    .unwrap();
    let err = cli.execute(&ctx).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(
        err.message
            .starts_with(feedesk_entity::validation::INVALID_FORM_MESSAGE),
        "{}",
        err.message
    );
    assert_eq!(server.request_count(), 0);
    assert_eq!(ctx.gateway.current_token(), Some(token));
}

#[tokio::test]
async fn test_cli_login_then_whoami() {
    let server = helpers::MockBackOffice::start().await;
    server.respond_json(
        "POST",
        "/api/auth/login",
        200,
        serde_json::json!({ "token": helpers::valid_token() }),
    );
    let ctx = helpers::logged_out_context(&server.base_url);

    let login = Cli::try_parse_from(["feedesk", "login", "-u", "alice", "-p", "secret"]).unwrap();
    login.execute(&ctx).await.unwrap();
    assert!(ctx.gateway.is_logged_in());

    let whoami = Cli::try_parse_from(["feedesk", "--format", "json", "whoami"]).unwrap();
    whoami.execute(&ctx).await.unwrap();

    let logout = Cli::try_parse_from(["feedesk", "logout"]).unwrap();
    logout.execute(&ctx).await.unwrap();
    assert!(!ctx.gateway.is_logged_in());
}
