//! End-to-end tests for the booking listing endpoints.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
#[path = "support/http.rs"]
mod support;

use actix_web::http::StatusCode;
use serde_json::Value;

use support::{body_json, get, list_item, patch, place_booking, register_user, test_app};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|booking| booking["id"].as_i64().expect("booking id"))
        .collect()
}

#[actix_web::test]
async fn listings_come_back_newest_start_first() {
    let app = test_app().await;
    let owner = register_user(&app, "Owner", "owner@example.org").await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;
    let item = list_item(&app, owner, "drill").await;

    let early = place_booking(&app, booker, item, 1, 2).await;
    let late = place_booking(&app, booker, item, 5, 6).await;
    let middle = place_booking(&app, booker, item, 3, 4).await;

    let res = get(&app, "/bookings", Some(booker)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;

    assert_eq!(ids(&body), vec![late, middle, early]);
}

#[actix_web::test]
async fn state_filters_select_matching_bookings() {
    let app = test_app().await;
    let owner = register_user(&app, "Owner", "owner@example.org").await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;
    let item = list_item(&app, owner, "drill").await;

    let approved = place_booking(&app, booker, item, 1, 2).await;
    let rejected = place_booking(&app, booker, item, 3, 4).await;
    let waiting = place_booking(&app, booker, item, 5, 6).await;
    patch(&app, &format!("/bookings/{approved}?approved=true"), Some(owner)).await;
    patch(
        &app,
        &format!("/bookings/{rejected}?approved=false"),
        Some(owner),
    )
    .await;

    let res = get(&app, "/bookings?state=WAITING", Some(booker)).await;
    assert_eq!(ids(&body_json(res).await), vec![waiting]);

    let res = get(&app, "/bookings?state=REJECTED", Some(booker)).await;
    assert_eq!(ids(&body_json(res).await), vec![rejected]);

    // Every booking starts in the future, so FUTURE matches all of them.
    let res = get(&app, "/bookings?state=FUTURE", Some(booker)).await;
    assert_eq!(ids(&body_json(res).await), vec![waiting, rejected, approved]);

    let res = get(&app, "/bookings?state=PAST", Some(booker)).await;
    assert_eq!(ids(&body_json(res).await), Vec::<i64>::new());
}

#[actix_web::test]
async fn the_owner_view_spans_all_owned_items() {
    let app = test_app().await;
    let owner = register_user(&app, "Owner", "owner@example.org").await;
    let other_owner = register_user(&app, "Other", "other@example.org").await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;
    let drill = list_item(&app, owner, "drill").await;
    let ladder = list_item(&app, owner, "ladder").await;
    let saw = list_item(&app, other_owner, "saw").await;

    let on_drill = place_booking(&app, booker, drill, 1, 2).await;
    let on_ladder = place_booking(&app, booker, ladder, 3, 4).await;
    place_booking(&app, booker, saw, 5, 6).await;

    let res = get(&app, "/bookings/owner", Some(owner)).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(ids(&body_json(res).await), vec![on_ladder, on_drill]);
}

#[actix_web::test]
async fn the_page_window_snaps_to_whole_pages() {
    let app = test_app().await;
    let owner = register_user(&app, "Owner", "owner@example.org").await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;
    let item = list_item(&app, owner, "drill").await;

    let mut bookings = Vec::new();
    for offset in 1..=7 {
        bookings.push(place_booking(&app, booker, item, offset, offset + 10).await);
    }

    // from=5 with size=2 serves page 2: the third and fourth newest starts.
    let res = get(&app, "/bookings?from=5&size=2", Some(booker)).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(ids(&body_json(res).await), vec![bookings[4], bookings[3]]);
}

#[actix_web::test]
async fn an_unknown_state_fails_with_400() {
    let app = test_app().await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;

    let res = get(&app, "/bookings?state=SOON", Some(booker)).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn invalid_page_parameters_fail_with_400() {
    let app = test_app().await;
    let booker = register_user(&app, "Booker", "booker@example.org").await;

    let res = get(&app, "/bookings?from=-1", Some(booker)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = get(&app, "/bookings?size=0", Some(booker)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn listings_for_an_unknown_user_fail_with_404() {
    let app = test_app().await;

    let res = get(&app, "/bookings", Some(99)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = get(&app, "/bookings/owner", Some(99)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
