#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::NaiveDate;
use clinic::config::ScheduleConfig;
use clinic::db::Store;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub const ALISHER: &str = "010101300000";
pub const DIANA: &str = "020202400000";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

/// Fresh migrated, still empty database in a temp file.
pub async fn open_store(name: &str) -> Store {
    let db_path =
        std::env::temp_dir().join(format!("clinic-{name}-test-{}.db", uuid::Uuid::new_v4()));

    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open store")
}

/// Fresh database seeded for [`today`].
pub async fn spawn_store(name: &str) -> Store {
    let store = open_store(name).await;

    store
        .initialize_for_date(&ScheduleConfig::default(), today())
        .await
        .expect("failed to seed store");

    store
}

pub async fn spawn_app(name: &str) -> (Store, Router) {
    let store = spawn_store(name).await;
    let state = clinic::api::AppState::new(store.clone()).expect("failed to build app state");
    (store, clinic::api::router(Arc::new(state)))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
}
