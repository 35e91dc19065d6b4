#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use urban_harvest::routes::app_router;
use urban_harvest::state::AppState;

pub const SITE_NAME: &str = "Urban Harvest";

pub fn create_test_state() -> AppState {
    AppState::seeded(SITE_NAME).unwrap()
}

/// Full application router over the built-in catalog.
///
/// The router sits behind the trailing-slash layer, so it is served the same
/// way `server::run` does.
pub fn create_test_server() -> TestServer {
    let app = app_router(create_test_state(), "static");
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn item_ids(json: &serde_json::Value) -> Vec<String> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
