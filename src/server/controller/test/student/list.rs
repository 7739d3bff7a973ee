use super::*;

/// Tests listing an empty table.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_array_for_empty_table() {
    let test = TestApp::new().await;

    let (status, body) = test.send(Method::GET, "/student", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests listing existing students.
///
/// Expected: 200 with every student ordered by ID
#[tokio::test]
async fn returns_all_students() {
    let test = TestApp::new().await;
    let student1 = factory::create_student(&test.db).await.unwrap();
    let student2 = factory::create_student(&test.db).await.unwrap();

    let (status, body) = test.send(Method::GET, "/student", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": student1.id, "name": student1.name, "gender": student1.gender },
            { "id": student2.id, "name": student2.name, "gender": student2.gender },
        ])
    );
}

/// Tests listing when storage fails.
///
/// Expected: 400 with "list failed"
#[tokio::test]
async fn storage_failure_is_bad_request() {
    let test = TestApp::new().await;
    drop_student_table(&test).await;

    let (status, body) = test.send(Method::GET, "/student", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "list failed" }));
    assert_eq!(test.state.sessions.open_sessions(), 0);
}
