mod common;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    App,
};
use common::{admin_token, bearer, setup_state, user_token};
use edu_web::configure_app;
use serde_json::{json, Value};

macro_rules! app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(App::new().configure(move |cfg| configure_app(cfg, state))).await
    }};
}

#[actix_web::test]
async fn health_is_public() {
    let state = setup_state().await;
    let app = app!(state);

    let res = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(test::read_body(res).await, "OK");
}

#[actix_web::test]
async fn login_returns_a_token_and_rejects_bad_passwords() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = state.settings.admin.clone();

    let req = TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({"phone": admin.phone, "password": admin.password}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password").is_none());

    let req = TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({"phone": admin.phone, "password": "wrong-password1"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Incorrect phone or password");
}

#[actix_web::test]
async fn protected_routes_require_a_token() {
    let state = setup_state().await;
    let app = app!(state);

    let res = test::call_service(&app, TestRequest::get().uri("/v1/news").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"statusCode": 401, "message": "Please authenticate"}));

    let req = TestRequest::get()
        .uri("/v1/news")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn admin_routes_are_forbidden_to_users() {
    let state = setup_state().await;
    let app = app!(state);
    let (_, user) = user_token(&state, "0911111111", Some(10)).await;
    let admin = admin_token(&state).await;

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&user))
        .set_json(json!({"title": "Primary", "order": 1}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 403);

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "Primary", "order": 1}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["title"], "Primary");

    let req = TestRequest::get()
        .uri("/v1/study/block")
        .insert_header(bearer(&user))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalResults"], 1);
}

#[actix_web::test]
async fn invalid_payloads_are_bad_requests() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = admin_token(&state).await;

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "", "order": 1}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 400);

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "Primary", "order": 1}))
        .to_request();
    let block: Value = test::call_and_read_body_json(&app, req).await;

    let req = TestRequest::patch()
        .uri(&format!("/v1/study/block/{}", block["id"].as_str().unwrap()))
        .insert_header(bearer(&admin))
        .set_json(json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn duplicate_block_order_is_a_bad_request() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = admin_token(&state).await;

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "Primary", "order": 1}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = TestRequest::post()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "Secondary", "order": 1}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"statusCode": 400, "message": "Duplicate entry"}));

    let req = TestRequest::get()
        .uri("/v1/study/block")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalResults"], 1);
}

#[actix_web::test]
async fn delete_returns_no_content_then_not_found() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = admin_token(&state).await;

    let req = TestRequest::post()
        .uri("/v1/news")
        .insert_header(bearer(&admin))
        .set_json(json!({"title": "Opening", "thumbnail": "a.png", "content": "Welcome"}))
        .to_request();
    let news: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/v1/news/{}", news["id"].as_str().unwrap());

    let req = TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&admin))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(res).await.is_empty());

    let req = TestRequest::get()
        .uri(&uri)
        .insert_header(bearer(&admin))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"statusCode": 404, "message": "News not found"}));
}

#[actix_web::test]
async fn account_requests_are_public_but_listing_is_not() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = admin_token(&state).await;

    for support in ["first", "second"] {
        let req = TestRequest::post()
            .uri("/v1/users/request")
            .set_json(json!({"name": "Lan", "phone": "0922222222", "supportDesc": support}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res =
        test::call_service(&app, TestRequest::get().uri("/v1/users/request").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::get()
        .uri("/v1/users/request")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalResults"], 1);
    assert_eq!(body["results"][0]["supportDesc"], "second");
    let request_id = body["results"][0]["id"].as_str().unwrap().to_string();

    let req = TestRequest::post()
        .uri("/v1/users/accept-request")
        .insert_header(bearer(&admin))
        .set_json(json!({"requestId": request_id, "phone": "0922222222", "password": "welcome1"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = TestRequest::post()
        .uri("/v1/users/request")
        .set_json(json!({"name": "Lan", "phone": "0922222222"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn me_and_password_change() {
    let state = setup_state().await;
    let app = app!(state);
    let (user_id, user) = user_token(&state, "0933333333", Some(8)).await;

    let req = TestRequest::get()
        .uri("/v1/users/me")
        .insert_header(bearer(&user))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["role"], "user");

    let req = TestRequest::patch()
        .uri(&format!("/v1/users/change-password/{user_id}"))
        .insert_header(bearer(&user))
        .set_json(json!({"oldPassword": "wrong-one1", "newPassword": "another12"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Password reset failed");

    let req = TestRequest::patch()
        .uri(&format!("/v1/users/change-password/{user_id}"))
        .insert_header(bearer(&user))
        .set_json(json!({"oldPassword": common::USER_PASSWORD, "newPassword": "another12"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = TestRequest::get()
        .uri(&format!("/v1/users/{user_id}"))
        .insert_header(bearer(&user))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn levels_and_scoring_over_http() {
    let state = setup_state().await;
    let app = app!(state);
    let admin = admin_token(&state).await;
    let (_, user) = user_token(&state, "0944444444", Some(7)).await;

    let post = |uri: &str, body: Value| {
        TestRequest::post()
            .uri(uri)
            .insert_header(bearer(&admin))
            .set_json(body)
            .to_request()
    };

    let block: Value =
        test::call_and_read_body_json(&app, post("/v1/study/block", json!({"title": "Primary", "order": 1})))
            .await;
    let young: Value = test::call_and_read_body_json(
        &app,
        post(
            "/v1/study/class",
            json!({"title": "Grade 1", "blockId": block["id"], "age": 6, "order": 1}),
        ),
    )
    .await;
    test::call_and_read_body_json::<_, _, Value>(
        &app,
        post(
            "/v1/study/class",
            json!({"title": "Grade 5", "blockId": block["id"], "age": 10, "order": 2}),
        ),
    )
    .await;
    let lecture: Value = test::call_and_read_body_json(
        &app,
        post(
            "/v1/study/lecture",
            json!({"title": "Numbers", "thumbnail": "n.png", "classId": young["id"], "order": 1}),
        ),
    )
    .await;
    let lesson: Value = test::call_and_read_body_json(
        &app,
        post(
            "/v1/study/lesson",
            json!({"title": "Counting", "url": "https://v/1", "lectureId": lecture["id"], "order": 1}),
        ),
    )
    .await;

    let req = TestRequest::get()
        .uri("/v1/study/levels")
        .insert_header(bearer(&user))
        .to_request();
    let levels: Value = test::call_and_read_body_json(&app, req).await;
    let classes = levels[0]["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["title"], "Grade 1");

    let req = TestRequest::get()
        .uri(&format!("/v1/study/lecture/{}", lecture["id"].as_str().unwrap()))
        .insert_header(bearer(&user))
        .to_request();
    let lessons: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(lessons[0]["title"], "Counting");

    let exercise: Value = test::call_and_read_body_json(
        &app,
        post(
            "/v1/exercise",
            json!({
                "title": "Quiz",
                "lessonId": lesson["id"],
                "questions": [
                    {"title": "1 + 1", "multiChoices": ["1", "2"], "answer": "2"},
                    {"title": "2 + 2", "multiChoices": ["4", "5"], "answer": "4"}
                ]
            }),
        ),
    )
    .await;
    let questions = exercise["questionList"].as_array().unwrap();
    assert_eq!(questions.len(), 2);

    let req = TestRequest::patch()
        .uri(&format!("/v1/exercise/calculate/{}", exercise["id"].as_str().unwrap()))
        .insert_header(bearer(&user))
        .set_json(json!([
            {"questionId": questions[0]["id"], "answer": "2"},
            {"questionId": questions[1]["id"], "answer": "5"}
        ]))
        .to_request();
    let score: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(score["score"], 1);
    assert_eq!(score["totalScore"], 2);
}
