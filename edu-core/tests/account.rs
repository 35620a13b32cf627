mod common;

use common::{admin, memory_settings, setup_db, user};
use edu_core::AccountService;
use edu_error::web::WebError;
use edu_models::{
    domain::prelude::{
        AcceptRequest, ChangePassword, Claims, LoginRequest, NewUser, NewUserRequest,
        UpdateUser, UserRequestPageParams,
    },
    entities::prelude::UserModel,
    enums::common::Role,
};
use edu_utils::jwt::{decode_jwt, issuer_validation};

fn claims_of(user: &UserModel) -> Claims {
    Claims::new("edu-backend".into(), user.id.clone(), user.role, 60)
}

fn request(phone: &str, name: &str) -> NewUserRequest {
    NewUserRequest {
        name: name.into(),
        phone: phone.into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn duplicate_phone_is_rejected() {
    let db = setup_db().await;
    user(&db, "0944444444", None).await;

    let err = AccountService::create_user(
        NewUser {
            phone: "0944444444".into(),
            password: "another123".into(),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(ref msg) if msg == "Phone already taken"));
}

#[tokio::test]
async fn created_users_are_plain_users_with_hashed_passwords() {
    let db = setup_db().await;
    let created = user(&db, "0955555555", Some(9)).await;
    assert_eq!(created.role, Role::User);
    assert_ne!(created.password, "secret123");

    let json = serde_json::to_value(&created).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["age"], 9);
}

#[tokio::test]
async fn update_checks_phone_against_other_users_only() {
    let db = setup_db().await;
    let first = user(&db, "0966666661", None).await;
    let second = user(&db, "0966666662", None).await;

    let same = AccountService::update_user(
        &first.id,
        UpdateUser {
            phone: Some(first.phone.clone()),
            name: Some("renamed".into()),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap();
    assert_eq!(same.name.as_deref(), Some("renamed"));

    let err = AccountService::update_user(
        &first.id,
        UpdateUser {
            phone: Some(second.phone.clone()),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(_)));
}

#[tokio::test]
async fn latest_request_wins_and_registered_phones_are_refused() {
    let db = setup_db().await;
    AccountService::request_account(request("0977777777", "first"), &db)
        .await
        .unwrap();
    let latest = AccountService::request_account(request("0977777777", "second"), &db)
        .await
        .unwrap();

    let page = AccountService::list_requests(&UserRequestPageParams::default(), &db)
        .await
        .unwrap();
    assert_eq!(page.total_results, 1);
    assert_eq!(page.results[0].id, latest.id);
    assert_eq!(page.results[0].name, "second");

    user(&db, "0988888888", None).await;
    let err = AccountService::request_account(request("0988888888", "late"), &db)
        .await
        .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(_)));
}

#[tokio::test]
async fn accepting_a_request_creates_the_user_and_removes_the_request() {
    let db = setup_db().await;
    let pending = AccountService::request_account(request("0999999999", "pupil"), &db)
        .await
        .unwrap();

    let created = AccountService::accept_request(
        AcceptRequest {
            request_id: pending.id.clone(),
            user: NewUser {
                phone: "0999999999".into(),
                password: "welcome123".into(),
                name: Some("pupil".into()),
                ..Default::default()
            },
        },
        &db,
    )
    .await
    .unwrap();
    assert_eq!(created.role, Role::User);

    let page = AccountService::list_requests(&UserRequestPageParams::default(), &db)
        .await
        .unwrap();
    assert_eq!(page.total_results, 0);
    assert!(matches!(
        AccountService::delete_request(&pending.id, &db).await,
        Err(WebError::NotFound(_))
    ));

    let again = AccountService::accept_request(
        AcceptRequest {
            request_id: "gone".into(),
            user: NewUser {
                phone: "0999999999".into(),
                password: "welcome123".into(),
                ..Default::default()
            },
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(again, WebError::BadRequest(_)));
}

#[tokio::test]
async fn password_change_rules() {
    let db = setup_db().await;
    let student = user(&db, "0912121212", None).await;
    let other = user(&db, "0913131313", None).await;
    let admin = admin(&db).await;

    let change = |old: Option<&str>, new: &str| ChangePassword {
        old_password: old.map(str::to_string),
        new_password: new.into(),
    };
    let is_reset_failure =
        |r: Result<(), WebError>| matches!(r, Err(WebError::Unauthorized(ref m)) if m == "Password reset failed");

    // wrong old password
    assert!(is_reset_failure(
        AccountService::change_password(&claims_of(&student), &student.id, change(Some("nope12345"), "newpass123"), &db).await
    ));
    // missing old password
    assert!(is_reset_failure(
        AccountService::change_password(&claims_of(&student), &student.id, change(None, "newpass123"), &db).await
    ));
    // someone else's account
    assert!(is_reset_failure(
        AccountService::change_password(&claims_of(&student), &other.id, change(Some("secret123"), "newpass123"), &db).await
    ));
    // unknown user, even for an admin
    assert!(is_reset_failure(
        AccountService::change_password(&claims_of(&admin), "ghost", change(None, "newpass123"), &db).await
    ));

    AccountService::change_password(
        &claims_of(&student),
        &student.id,
        change(Some("secret123"), "newpass123"),
        &db,
    )
    .await
    .unwrap();
    AccountService::authenticate(&student.phone, "newpass123", &db)
        .await
        .unwrap();

    AccountService::change_password(&claims_of(&admin), &other.id, change(None, "reset1234"), &db)
        .await
        .unwrap();
    AccountService::authenticate(&other.phone, "reset1234", &db)
        .await
        .unwrap();
}

#[tokio::test]
async fn login_issues_a_token_for_valid_credentials() {
    let db = setup_db().await;
    let settings = memory_settings();
    let jwt = &settings.web.jwt;

    let response = AccountService::login(
        LoginRequest {
            phone: settings.admin.phone.clone(),
            password: settings.admin.password.clone(),
        },
        jwt,
        &db,
    )
    .await
    .unwrap();
    let claims = decode_jwt::<Claims>(
        &response.token,
        jwt.secret.as_bytes(),
        Some(issuer_validation(&jwt.issuer)),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.user_id, response.user.id);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp, response.expires);

    let err = AccountService::login(
        LoginRequest {
            phone: settings.admin.phone.clone(),
            password: "wrong-password1".into(),
        },
        jwt,
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::Unauthorized(ref msg) if msg == "Incorrect phone or password"));
}
