mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, create_test_user, generate_unique_email, get_auth_token, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_as_admin(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, "password123", "admin").await;
    create_test_user(&pool, &generate_unique_email(), "password123", "staff").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &admin_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_as_staff_forbidden(pool: PgPool) {
    let staff_email = generate_unique_email();
    create_test_user(&pool, &staff_email, "password123", "staff").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &staff_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_without_token_unauthorized(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_role_promotes_staff(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, "password123", "admin").await;
    let staff_id = create_test_user(&pool, &generate_unique_email(), "password123", "staff").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &admin_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(&format!("/api/users/{}/role", staff_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({"role": "admin"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], staff_id.to_string());
    assert_eq!(body["role"], "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_role_to_missing_user_returns_404(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, "password123", "admin").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &admin_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(&format!("/api/users/{}/role", uuid::Uuid::new_v4()))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({"role": "admin"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_unknown_role_returns_400(pool: PgPool) {
    let admin_email = generate_unique_email();
    let admin_id = create_test_user(&pool, &admin_email, "password123", "admin").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &admin_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(&format!("/api/users/{}/role", admin_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({"role": "superuser"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_roles_catalog(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, "password123", "admin").await;

    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app, &admin_email, "password123").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/users/roles")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["admin", "staff"]));
}
