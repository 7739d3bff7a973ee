use super::*;

/// Tests updating a student.
///
/// Expected: 200 with new values, ID unchanged, list reflects the update
#[tokio::test]
async fn updates_student() {
    let test = TestApp::new().await;
    let existing = factory::create_student(&test.db).await.unwrap();

    let (status, body) = test
        .send(
            Method::PUT,
            &format!("/student/{}", existing.id),
            Some(json!({ "name": "Bob", "gender": "M" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": existing.id, "name": "Bob", "gender": "M" }));

    let (_, list) = test.send(Method::GET, "/student", None).await;
    assert_eq!(list, json!([{ "id": existing.id, "name": "Bob", "gender": "M" }]));
}

/// Tests updating a student that doesn't exist.
///
/// Expected: 404 with "not found"
#[tokio::test]
async fn nonexistent_student_is_not_found() {
    let test = TestApp::new().await;

    let (status, body) = test
        .send(
            Method::PUT,
            "/student/999999",
            Some(json!({ "name": "Bob", "gender": "M" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
    assert_eq!(test.state.sessions.open_sessions(), 0);
}

/// Tests a non-numeric student ID.
///
/// Expected: 400 from the path extractor
#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let test = TestApp::new().await;

    let (status, _) = test
        .send(
            Method::PUT,
            "/student/abc",
            Some(json!({ "name": "Bob", "gender": "M" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests updating when storage fails.
///
/// Expected: 400 with "storage error"
#[tokio::test]
async fn storage_failure_is_bad_request() {
    let test = TestApp::new().await;
    drop_student_table(&test).await;

    let (status, body) = test
        .send(
            Method::PUT,
            "/student/1",
            Some(json!({ "name": "Bob", "gender": "M" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "storage error" }));
}
