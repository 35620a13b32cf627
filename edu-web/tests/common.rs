#![allow(dead_code)]

use edu_core::AccountService;
use edu_models::{
    domain::prelude::{LoginRequest, NewUser},
    settings::{Db, Inner, Settings, Sqlite},
    DbManager,
};
use edu_storage::EduDbManager;
use edu_web::AppState;
use std::sync::Once;
use tracing::Level;

pub const USER_PASSWORD: &str = "secret123";

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

pub fn memory_settings() -> Settings {
    Inner {
        db: Db {
            sqlite: Sqlite::memory(),
        },
        ..Default::default()
    }
    .into()
}

/// Application state over a fresh in-memory database with the admin seeded.
pub async fn setup_state() -> AppState {
    init_tracing();
    let settings = memory_settings();
    let db = EduDbManager::init(&settings)
        .await
        .expect("database should initialize")
        .get_connection()
        .expect("connection should be available");
    AppState::new(settings, db).expect("rbac rules should register")
}

async fn token_for(state: &AppState, phone: &str, password: &str) -> String {
    AccountService::login(
        LoginRequest {
            phone: phone.into(),
            password: password.into(),
        },
        &state.settings.web.jwt,
        &state.db,
    )
    .await
    .expect("login should succeed")
    .token
}

pub async fn admin_token(state: &AppState) -> String {
    let admin = &state.settings.admin;
    token_for(state, &admin.phone, &admin.password).await
}

/// Creates a regular user and returns `(user id, bearer token)`.
pub async fn user_token(state: &AppState, phone: &str, age: Option<i32>) -> (String, String) {
    let user = AccountService::create_user(
        NewUser {
            phone: phone.into(),
            password: USER_PASSWORD.into(),
            name: Some(format!("user {phone}")),
            age,
            ..Default::default()
        },
        &state.db,
    )
    .await
    .expect("user should be created");
    let token = token_for(state, phone, USER_PASSWORD).await;
    (user.id, token)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
