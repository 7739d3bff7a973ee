use super::*;

/// Walks a student through its whole lifecycle over HTTP.
#[tokio::test]
async fn create_update_list_delete_lifecycle() {
    let test = TestApp::new().await;

    let (status, created) = test
        .send(
            Method::POST,
            "/student/add",
            Some(json!({ "name": "Alice", "gender": "F" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({ "id": 1, "name": "Alice", "gender": "F" }));

    let (status, updated) = test
        .send(
            Method::PUT,
            "/student/1",
            Some(json!({ "name": "Bob", "gender": "M" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Bob", "gender": "M" }));

    let (status, list) = test.send(Method::GET, "/student", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{ "id": 1, "name": "Bob", "gender": "M" }]));

    let (status, deleted) = test.send(Method::DELETE, "/student/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "id": 1, "name": "Bob", "gender": "M" }));

    let (status, _) = test.send(Method::DELETE, "/student/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(test.state.sessions.open_sessions(), 0);
}
