use std::collections::HashSet;

use super::*;

/// Tests creating a student.
///
/// Expected: 200 echoing name and gender with an assigned ID
#[tokio::test]
async fn creates_student() {
    let test = TestApp::new().await;

    let (status, body) = test
        .send(
            Method::POST,
            "/student/add",
            Some(json!({ "name": "Alice", "gender": "F" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["gender"], "F");
    assert!(body["id"].as_i64().unwrap() > 0);
}

/// Tests that a created student never reuses an existing ID.
///
/// Expected: 200 with an ID different from existing rows
#[tokio::test]
async fn assigns_fresh_id() {
    let test = TestApp::new().await;
    let existing = factory::create_student(&test.db).await.unwrap();

    let (status, body) = test
        .send(
            Method::POST,
            "/student/add",
            Some(json!({ "name": existing.name, "gender": existing.gender })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["id"].as_i64().unwrap(), i64::from(existing.id));
}

/// Tests that a body missing required fields is rejected before reaching storage.
///
/// Expected: 422 from the JSON extractor, nothing stored
#[tokio::test]
async fn rejects_incomplete_body() {
    let test = TestApp::new().await;

    let (status, _) = test
        .send(Method::POST, "/student/add", Some(json!({ "name": "Alice" })))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = test.send(Method::GET, "/student", None).await;
    assert_eq!(body, json!([]));
}

/// Tests creating a student with empty name and gender.
///
/// Expected: 200 storing the empty strings unchanged, listed afterwards
#[tokio::test]
async fn creates_student_with_empty_fields() {
    let test = TestApp::new().await;

    let (status, body) = test
        .send(
            Method::POST,
            "/student/add",
            Some(json!({ "name": "", "gender": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "", "gender": "" }));

    let (_, body) = test.send(Method::GET, "/student", None).await;
    assert_eq!(body, json!([{ "id": 1, "name": "", "gender": "" }]));
}

/// Tests creating when storage fails.
///
/// Expected: 400 with "create failed"
#[tokio::test]
async fn storage_failure_is_bad_request() {
    let test = TestApp::new().await;
    drop_student_table(&test).await;

    let (status, body) = test
        .send(
            Method::POST,
            "/student/add",
            Some(json!({ "name": "Alice", "gender": "F" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "create failed" }));
}

/// Tests concurrent creates.
///
/// Expected: every request succeeds with a distinct ID and all students are listed
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
    let test = TestApp::new().await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..8 {
        let app = test.app.clone();
        tasks.spawn(async move {
            send(
                &app,
                Method::POST,
                "/student/add",
                Some(json!({ "name": format!("Student {}", i), "gender": "M" })),
            )
            .await
        });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        ids.insert(body["id"].as_i64().unwrap());
    }
    assert_eq!(ids.len(), 8);

    let (_, body) = test.send(Method::GET, "/student", None).await;
    let listed: HashSet<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s: &Value| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
    assert_eq!(test.state.sessions.open_sessions(), 0);
}
