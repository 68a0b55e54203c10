//! End-to-end CRUD tests against the running service.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn create_returns_stored_todo() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.post(app.url()))
        .json(&json!({"subject": "buy milk", "description": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    let todo = &body["todo"];
    assert!(todo["id"].as_i64().unwrap() > 0);
    assert_eq!(todo["subject"], "buy milk");
    assert_eq!(todo["description"], "");
    assert_eq!(todo["created_at"], todo["updated_at"]);
}

#[tokio::test]
async fn create_rejects_empty_subject_and_bad_json() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.post(app.url()))
        .json(&json!({"subject": "", "description": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = app
        .authed(app.client.post(app.url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 502);

    // neither attempt persisted anything
    let res = app.authed(app.client.get(app.url())).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["todos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_pages_descending_with_cursor() {
    let app = common::spawn_app().await;

    for i in 1..=7 {
        let res = app
            .authed(app.client.post(app.url()))
            .json(&json!({"subject": format!("todo {i}"), "description": ""}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    // first page: 5 most recent, descending
    let res = app.authed(app.client.get(app.url())).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    let ids: Vec<i64> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);

    // next page: cursor is the smallest id seen so far
    let res = app
        .authed(app.client.get(format!("{}?prev_id=3&size=5", app.url())))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let ids: Vec<i64> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn list_rejects_non_integer_params() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.get(format!("{}?prev_id=abc", app.url())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 502);

    let res = app
        .authed(app.client.get(format!("{}?size=many", app.url())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 502);
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.post(app.url()))
        .json(&json!({"subject": "before", "description": "old"}))
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    let id = created["todo"]["id"].as_i64().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let res = app
        .authed(app.client.put(app.url()))
        .json(&json!({"id": id, "subject": "after", "description": "new"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["todo"]["id"].as_i64().unwrap(), id);
    assert_eq!(body["todo"]["subject"], "after");
    assert_eq!(body["todo"]["description"], "new");
    assert!(
        body["todo"]["updated_at"].as_str().unwrap()
            > body["todo"]["created_at"].as_str().unwrap()
    );
}

#[tokio::test]
async fn update_zero_id_is_rejected_without_mutation() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.put(app.url()))
        .json(&json!({"id": 0, "subject": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = app
        .authed(app.client.put(app.url()))
        .json(&json!({"id": 1, "subject": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = app.authed(app.client.get(app.url())).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["todos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.put(app.url()))
        .json(&json!({"id": 424242, "subject": "ghost"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn delete_error_mapping() {
    let app = common::spawn_app().await;

    // missing ids entirely → 400
    let res = app
        .authed(app.client.delete(app.url()))
        .json(&json!({"ids": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    // malformed body → 500 on this route
    let res = app
        .authed(app.client.delete(app.url()))
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    // nothing matched → 404
    let res = app
        .authed(app.client.delete(app.url()))
        .json(&json!({"ids": [999999]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn delete_mixed_ids_removes_matches() {
    let app = common::spawn_app().await;

    let mut ids = Vec::new();
    for subject in ["a", "b"] {
        let res = app
            .authed(app.client.post(app.url()))
            .json(&json!({"subject": subject, "description": ""}))
            .send()
            .await
            .unwrap();
        let body: Value = res.json().await.unwrap();
        ids.push(body["todo"]["id"].as_i64().unwrap());
    }

    let res = app
        .authed(app.client.delete(app.url()))
        .json(&json!({"ids": [ids[0], 999999]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({}));

    let res = app.authed(app.client.get(app.url())).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    let remaining: Vec<i64> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(remaining, vec![ids[1]]);
}

#[tokio::test]
async fn unsupported_method_is_bad_request() {
    let app = common::spawn_app().await;

    let res = app
        .authed(app.client.patch(app.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}
