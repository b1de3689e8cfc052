//! Integration tests for the fee client and the authorization contract.

mod helpers;

use feedesk_auth::Navigation;
use feedesk_core::ErrorKind;
use feedesk_entity::fee::{CardFlag, FeeQuery, FeeRequest, FeeResponse, FeeUpdateRequest, TableNumber};

fn fee_json() -> serde_json::Value {
    serde_json::json!({
        "id": 11,
        "numberTable": "ONE",
        "numberOfInstallments": 3,
        "flag": "MASTER_VISA",
        "machineFee": 2.5,
        "clientFee": 4.75
    })
}

fn fee_request() -> FeeRequest {
    FeeRequest {
        number_table: TableNumber::Two,
        number_of_installments: 6,
        flag: CardFlag::AmexEloHiper,
        machine_fee: 3.0,
        client_fee: 5.5,
    }
}

#[tokio::test]
async fn test_find_returns_decoded_fee() {
    let server = helpers::MockBackOffice::start().await;
    server.respond_json("GET", "/api/fees", 200, fee_json());
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    let fee = ctx
        .fees
        .find(&FeeQuery::new(TableNumber::One, 3, CardFlag::MasterVisa))
        .await
        .unwrap();

    let expected: FeeResponse = serde_json::from_value(fee_json()).unwrap();
    assert_eq!(fee, expected);

    let request = server.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(
        request.query.as_deref(),
        Some("numberTable=ONE&numberOfInstallments=3&flag=MASTER_VISA")
    );
    assert_eq!(request.authorization, Some(format!("Bearer {}", token)));
}

#[tokio::test]
async fn test_unauthorized_response_forces_logout() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("GET", "/api/fees", 401, "");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);
    let mut navigation = ctx.gateway.navigation();

    let err = ctx
        .fees
        .find(&FeeQuery::new(TableNumber::One, 3, CardFlag::MasterVisa))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message, "Unauthorized - Please login again");
    assert!(err.forced_logout());
    assert_eq!(ctx.gateway.session().current(), None);
    assert!(navigation.try_recv().is_ok());
}

#[tokio::test]
async fn test_concurrent_rejections_each_fail_and_end_session() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("GET", "/api/fees", 401, "");
    server.respond("POST", "/api/fees", 401, "");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);
    let mut navigation = ctx.gateway.navigation();

    let query = FeeQuery::new(TableNumber::One, 3, CardFlag::MasterVisa);
    let request = fee_request();
    let (found, created) = tokio::join!(ctx.fees.find(&query), ctx.fees.create(&request));

    assert_eq!(found.unwrap_err().kind, ErrorKind::Unauthorized);
    assert_eq!(created.unwrap_err().kind, ErrorKind::Unauthorized);
    assert_eq!(server.request_count(), 2);
    assert_eq!(ctx.gateway.session().current(), None);
    assert!(!ctx.gateway.is_logged_in());
    assert_eq!(navigation.recv().await.unwrap(), Navigation::Login);
    assert_eq!(navigation.recv().await.unwrap(), Navigation::Login);
}

#[tokio::test]
async fn test_forbidden_response_forces_logout() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("POST", "/api/fees", 403, "");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);

    let err = ctx.fees.create(&fee_request()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(ctx.gateway.current_token(), None);
}

#[tokio::test]
async fn test_missing_parameters_fail_without_request() {
    let server = helpers::MockBackOffice::start().await;
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    let query = FeeQuery {
        number_table: Some(TableNumber::One),
        number_of_installments: None,
        flag: Some(CardFlag::MasterVisa),
    };
    let err = ctx.fees.find(&query).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "All parameters are required");
    assert_eq!(server.request_count(), 0);
    assert_eq!(ctx.gateway.current_token(), Some(token));
}

#[tokio::test]
async fn test_missing_parameters_checked_before_session() {
    let server = helpers::MockBackOffice::start().await;
    let ctx = helpers::logged_out_context(&server.base_url);
    let mut navigation = ctx.gateway.navigation();

    let err = ctx.fees.find(&FeeQuery::default()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(navigation.try_recv().is_err());
}

#[tokio::test]
async fn test_expired_session_fails_fast() {
    let server = helpers::MockBackOffice::start().await;
    let ctx = helpers::logged_out_context(&server.base_url);
    ctx.gateway
        .session()
        .set(helpers::mint_token("testuser", "admin", -60));
    let mut navigation = ctx.gateway.navigation();

    let err = ctx
        .fees
        .find(&FeeQuery::new(TableNumber::One, 3, CardFlag::MasterVisa))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NoValidSession);
    assert_eq!(err.message, "No authentication token available or token expired");
    assert_eq!(server.request_count(), 0);
    assert_eq!(ctx.gateway.current_token(), None);
    assert!(navigation.try_recv().is_ok());
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("POST", "/api/fees", 201, "");
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    ctx.fees.create(&fee_request()).await.unwrap();

    let request = server.single_request();
    assert_eq!(request.authorization, Some(format!("Bearer {}", token)));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "numberTable": "TWO",
            "numberOfInstallments": 6,
            "flag": "AMEX_ELO_HIPER",
            "machineFee": 3.0,
            "clientFee": 5.5
        })
    );
}

#[tokio::test]
async fn test_create_conflict() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("POST", "/api/fees", 409, "");
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    let err = ctx.fees.create(&fee_request()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Fee already exists");
    assert_eq!(ctx.gateway.current_token(), Some(token));
}

#[tokio::test]
async fn test_find_not_found() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("GET", "/api/fees", 404, "");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);

    let err = ctx
        .fees
        .find(&FeeQuery::new(TableNumber::Four, 12, CardFlag::AmexEloHiper))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Fee not found");
    assert!(!err.forced_logout());
}

#[tokio::test]
async fn test_update_returns_server_text() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("PUT", "/api/fees", 200, "Fee updated successfully");
    let (ctx, _) = helpers::logged_in_context(&server.base_url);

    let reply = ctx
        .fees
        .update(&FeeUpdateRequest::from_request(11, fee_request()))
        .await
        .unwrap();

    assert_eq!(reply, "Fee updated successfully");
    assert_eq!(server.single_request().json()["id"], 11);
}

#[tokio::test]
async fn test_server_error_keeps_session() {
    let server = helpers::MockBackOffice::start().await;
    server.respond("PUT", "/api/fees", 502, "");
    let (ctx, token) = helpers::logged_in_context(&server.base_url);

    let err = ctx
        .fees
        .update(&FeeUpdateRequest::from_request(11, fee_request()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::ServerError);
    assert_eq!(err.message, "Error: 502 - Bad Gateway");
    assert_eq!(ctx.gateway.current_token(), Some(token));
}

#[tokio::test]
async fn test_unreachable_keeps_session() {
    let (ctx, token) = helpers::logged_in_context(&helpers::unreachable_base_url());

    let err = ctx.fees.create(&fee_request()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::TransportUnreachable);
    assert_eq!(ctx.gateway.current_token(), Some(token));
}
