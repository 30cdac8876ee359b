//! Shared helpers for HTTP integration suites.
//!
//! Every suite runs against a full application wired with fresh in-memory
//! stores, so tests exercise the real handler, service and store stack.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use serde_json::Value;

use backend::Trace;
use backend::inbound::http::health::HealthState;
use backend::server::{build_state, configure};

pub const SHARER_HEADER: &str = "X-Sharer-User-Id";

/// Initialise an application with empty stores and ready health probes.
pub async fn test_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .wrap(Trace)
            .configure(configure(build_state(), health)),
    )
    .await
}

pub async fn post_json<S, B>(
    app: &S,
    path: &str,
    sharer: Option<i64>,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::post().uri(path).set_json(body);
    if let Some(id) = sharer {
        req = req.insert_header((SHARER_HEADER, id.to_string()));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn patch_json<S, B>(
    app: &S,
    path: &str,
    sharer: Option<i64>,
    body: Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::patch().uri(path).set_json(body);
    if let Some(id) = sharer {
        req = req.insert_header((SHARER_HEADER, id.to_string()));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn patch<S, B>(app: &S, path: &str, sharer: Option<i64>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::patch().uri(path);
    if let Some(id) = sharer {
        req = req.insert_header((SHARER_HEADER, id.to_string()));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn get<S, B>(app: &S, path: &str, sharer: Option<i64>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::get().uri(path);
    if let Some(id) = sharer {
        req = req.insert_header((SHARER_HEADER, id.to_string()));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn body_json<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    test::read_body_json(res).await
}

/// Register a user and return its assigned id.
pub async fn register_user<S, B>(app: &S, name: &str, email: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let res = post_json(
        app,
        "/users",
        None,
        serde_json::json!({"name": name, "email": email}),
    )
    .await;
    assert!(res.status().is_success(), "user registration failed");
    let body = body_json(res).await;
    body["id"].as_i64().expect("user id")
}

/// List an available item for `owner` and return its assigned id.
pub async fn list_item<S, B>(app: &S, owner: i64, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let res = post_json(
        app,
        "/items",
        Some(owner),
        serde_json::json!({
            "name": name,
            "description": format!("{name} for sharing"),
            "available": true,
        }),
    )
    .await;
    assert!(res.status().is_success(), "item listing failed");
    let body = body_json(res).await;
    body["id"].as_i64().expect("item id")
}

/// Place a booking on `item` for `booker` over the given offset range, in
/// hours from now, and return its assigned id.
pub async fn place_booking<S, B>(app: &S, booker: i64, item: i64, start_h: i64, end_h: i64) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let now = chrono::Utc::now();
    let res = post_json(
        app,
        "/bookings",
        Some(booker),
        serde_json::json!({
            "itemId": item,
            "start": (now + chrono::Duration::hours(start_h)).to_rfc3339(),
            "end": (now + chrono::Duration::hours(end_h)).to_rfc3339(),
        }),
    )
    .await;
    assert!(res.status().is_success(), "booking placement failed");
    let body = body_json(res).await;
    body["id"].as_i64().expect("booking id")
}
