mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, create_test_course, create_test_student, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_course(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/courses")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"title": "Analytical Engines 101"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = body_json(response).await;
    assert_eq!(location, format!("/api/courses/{}", body["course_id"]));
    assert_eq!(body["title"], "Analytical Engines 101");

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(&location)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, body);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_courses_empty(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_course_id_mismatch_returns_400(pool: PgPool) {
    let id = create_test_course(&pool, "Analytical Engines 101").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("PUT")
        .uri(&format!("/api/courses/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"course_id": id + 1, "title": "Difference Engines"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_course_replaces_record(pool: PgPool) {
    let id = create_test_course(&pool, "Analytical Engines 101").await;

    let app = setup_test_app(pool.clone());
    let request = Request::builder()
        .method("PUT")
        .uri(&format!("/api/courses/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"course_id": id, "title": "Difference Engines"}))
                .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(&format!("/api/courses/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(body_json(response).await["title"], "Difference Engines");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_course_returns_404(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/courses/9999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_roster_of_missing_course_returns_404(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses/9999/roster")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_roster_lists_enrolled_students(pool: PgPool) {
    let course_id = create_test_course(&pool, "Analytical Engines 101").await;
    let student_id = create_test_student(&pool, "Ada Lovelace").await;
    create_test_student(&pool, "Charles Babbage").await;

    sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
        .bind(student_id)
        .bind(course_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(&format!("/api/courses/{}/roster", course_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let roster = body.as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["name"], "Ada Lovelace");
}
