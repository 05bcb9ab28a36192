#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use shortcuts::domain::entities::{Shortcut, ShortcutToken};
use shortcuts::domain::repositories::{ShortcutRepository, ShortcutTokenRepository};
use shortcuts::infrastructure::persistence::MemoryStore;
use shortcuts::routes::router;
use shortcuts::server::wire_service;
use shortcuts::state::AppState;
use std::sync::Arc;

pub const TEST_HOST: &str = "s.example.com";

/// State over a fresh memory store. The store is returned for seeding and
/// inspecting storage directly.
pub fn create_test_state() -> (AppState, MemoryStore) {
    create_test_state_with_proxy(false)
}

pub fn create_test_state_with_proxy(behind_proxy: bool) -> (AppState, MemoryStore) {
    let store = MemoryStore::new();
    let service = wire_service(Arc::new(store.shortcuts()), Arc::new(store.tokens()));

    (AppState::new(service, behind_proxy), store)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state)
}

pub fn create_test_server() -> (TestServer, MemoryStore) {
    let (state, store) = create_test_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    (server, store)
}

pub async fn create_test_shortcut(store: &MemoryStore, name: &str, destination: &str) {
    store
        .shortcuts()
        .save(Shortcut::new(name, destination, None))
        .await
        .unwrap();
}

pub async fn create_test_token(store: &MemoryStore, name: &str, value: &str) {
    store
        .tokens()
        .create(ShortcutToken::new(name, value))
        .await
        .unwrap();
}
