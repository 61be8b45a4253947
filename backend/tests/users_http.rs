//! End-to-end checks of the users API assembled from the public library
//! surface.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use user_service::domain::UserServiceImpl;
use user_service::inbound::http::error::{json_config, path_config};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users;
use user_service::outbound::AtomicIdGenerator;
use user_service::outbound::persistence::InMemoryUserRepository;
use user_service::{Cors, Trace};

const GENERIC_MESSAGE: &str =
    "The request could not be understood by the server due to malformed syntax.";

#[fixture]
fn state() -> HttpState {
    HttpState::new(
        Arc::new(UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(AtomicIdGenerator::default()),
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .configure(users::configure)
        .wrap(Cors)
        .wrap(Trace)
}

fn ann() -> Value {
    json!({"name": "Ann", "email": "ann@x.com", "profession": "Engineer"})
}

#[rstest]
#[actix_web::test]
async fn full_lifecycle_of_a_user(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post().uri("/users").set_json(ann()).to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(created).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "New user Created successfully"})
    );

    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users")
            .set_json(json!({"id": 0, "name": "Ann", "email": "ann@y.com", "profession": "Lead"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(updated).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "User data updated successfully"})
    );

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(
        body,
        json!([{"id": 0, "name": "Ann", "email": "ann@y.com", "profession": "Lead"}])
    );

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/0").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(deleted).await;
    assert_eq!(body, json!({"success": true, "message": "User has been deleted"}));

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/0").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(missing).await;
    assert_eq!(
        body,
        json!({"success": false, "errorCode": "USER.NOT.FOUND", "message": "User not found"})
    );
}

#[rstest]
#[actix_web::test]
async fn ids_increase_across_creates(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    for _ in 0..3 {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post().uri("/users").set_json(ann()).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    let ids: Vec<i64> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|u| u.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[rstest]
#[actix_web::test]
async fn invalid_create_returns_documented_error_body(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "", "email": "a@x.com", "profession": "Eng"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": false, "errorCode": "INPUT.DATA.INVALID", "message": "Input data not valid.."})
    );
}

#[rstest]
#[case(Method::GET, "/users/not-a-number")]
#[case(Method::DELETE, "/users/1.5")]
#[actix_web::test]
async fn unparsable_ids_get_the_generic_error(
    state: HttpState,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": false, "errorCode": "400", "message": GENERIC_MESSAGE})
    );
}

#[rstest]
#[actix_web::test]
async fn error_responses_echo_trace_and_cors_headers(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/3").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("trace-id"));
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["errorCode"], "USER.ID.INVALID");
}
