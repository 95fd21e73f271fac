//! End-to-end tests for the user CRUD surface.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_hello_world() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["msg"], json!("Hello World!!"));
}

#[tokio::test]
async fn test_list_users_returns_seed() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/users"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let users: Vec<Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 8);
    assert_eq!(users[0]["id"], json!(1));
    assert_eq!(users[0]["username"], json!("tony"));
    assert_eq!(users[7]["username"], json!("adeola"));
}

#[tokio::test]
async fn test_list_products() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/products"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let products: Vec<Value> = res.json().await.unwrap();
    assert_eq!(
        products,
        vec![json!({"id": 123, "name": "Chicken breast", "price": 12.99})]
    );
}

#[tokio::test]
async fn test_get_user_by_id() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/users/3"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["id"], json!(3));
    assert_eq!(user["username"], json!("jermaine"));
    assert_eq!(user["displayName"], json!("Jermaine"));
}

#[tokio::test]
async fn test_unknown_id_is_404_on_every_verb() {
    let addr = common::spawn_server().await;
    let client = common::client();
    let url = format!("http://{addr}/api/users/99");

    let body = json!({"username": "whoever99"});
    assert_eq!(client.get(&url).send().await.unwrap().status(), 404);
    assert_eq!(
        client.put(&url).json(&body).send().await.unwrap().status(),
        404
    );
    assert_eq!(
        client.patch(&url).json(&body).send().await.unwrap().status(),
        404
    );
    assert_eq!(client.delete(&url).send().await.unwrap().status(), 404);
}

#[tokio::test]
async fn test_non_integer_id_is_400_on_every_verb() {
    let addr = common::spawn_server().await;
    let client = common::client();
    let url = format!("http://{addr}/api/users/abc");

    let body = json!({"username": "whoever99"});

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), 400);
    let payload: Value = res.json().await.unwrap();
    assert_eq!(payload["msg"], json!("Bad request. Invalid ID."));

    assert_eq!(
        client.put(&url).json(&body).send().await.unwrap().status(),
        400
    );
    assert_eq!(
        client.patch(&url).json(&body).send().await.unwrap().status(),
        400
    );
    assert_eq!(client.delete(&url).send().await.unwrap().status(), 400);
}

#[tokio::test]
async fn test_query_filter() {
    let addr = common::spawn_server().await;
    let client = common::client();

    // Substring match on a string field, case-sensitive.
    let res = client
        .get(format!("http://{addr}/api/users?filter=username&value=er"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let users: Vec<Value> = res.json().await.unwrap();
    let names: Vec<&str> = users
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["jermaine", "ciftler"]);

    // Case matters.
    let res = client
        .get(format!("http://{addr}/api/users?filter=displayName&value=T"))
        .send()
        .await
        .unwrap();
    let users: Vec<Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 2); // Tony, Thuso

    // Partial query falls back to the full list.
    let res = client
        .get(format!("http://{addr}/api/users?filter=username"))
        .send()
        .await
        .unwrap();
    let users: Vec<Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 8);
}

#[tokio::test]
async fn test_create_user_assigns_next_id() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/api/users"))
        .json(&json!({"username": "newguy1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user, json!({"id": 9, "username": "newguy1"}));

    // The record is immediately readable back.
    let res = client
        .get(format!("http://{addr}/api/users/9"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["username"], json!("newguy1"));
}

#[tokio::test]
async fn test_create_user_rejects_bad_usernames() {
    let addr = common::spawn_server().await;
    let client = common::client();
    let url = format!("http://{addr}/api/users");

    for bad in [
        json!({}),
        json!({"username": "abcd"}),
        json!({"username": "a".repeat(33)}),
        json!({"username": 42}),
    ] {
        let res = client.post(&url).json(&bad).send().await.unwrap();
        assert_eq!(res.status(), 400, "body {bad} should be rejected");
        let payload: Value = res.json().await.unwrap();
        let errors = payload["errors"].as_array().unwrap();
        assert!(!errors.is_empty());
        assert_eq!(errors[0]["field"], json!("username"));
    }

    // Nothing was inserted.
    let res = client.get(&url).send().await.unwrap();
    let users: Vec<Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 8);
}

#[tokio::test]
async fn test_put_replaces_all_fields_except_id() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .put(format!("http://{addr}/api/users/1"))
        .json(&json!({"username": "renamed1", "level": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user, json!({"id": 1, "username": "renamed1", "level": 3}));

    // displayName is gone; level stuck.
    let res = client
        .get(format!("http://{addr}/api/users/1"))
        .send()
        .await
        .unwrap();
    let fetched: Value = res.json().await.unwrap();
    assert!(fetched.get("displayName").is_none());
    assert_eq!(fetched["level"], json!(3));
}

#[tokio::test]
async fn test_patch_merges_shallowly() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .patch(format!("http://{addr}/api/users/2"))
        .json(&json!({"displayName": "Robbie"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let user: Value = res.json().await.unwrap();
    assert_eq!(user["username"], json!("rob"));
    assert_eq!(user["displayName"], json!("Robbie"));
}

#[tokio::test]
async fn test_delete_then_404() {
    let addr = common::spawn_server().await;
    let client = common::client();
    let url = format!("http://{addr}/api/users/4");

    let res = client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let removed: Value = res.json().await.unwrap();
    assert_eq!(removed["username"], json!("michael"));

    // Exactly one record gone; repeat delete fails.
    let res = client
        .get(format!("http://{addr}/api/users"))
        .send()
        .await
        .unwrap();
    let users: Vec<Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 7);

    assert_eq!(client.delete(&url).send().await.unwrap().status(), 404);
    assert_eq!(client.get(&url).send().await.unwrap().status(), 404);
}

#[tokio::test]
async fn test_create_read_delete_lifecycle() {
    // Seed ends at id 8 ("adeola"); a created record gets id 9, is
    // readable, deletable, and then gone.
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/api/users"))
        .json(&json!({"username": "newguy1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], json!(9));

    let url = format!("http://{addr}/api/users/9");
    assert_eq!(client.get(&url).send().await.unwrap().status(), 200);
    assert_eq!(client.delete(&url).send().await.unwrap().status(), 200);
    assert_eq!(client.get(&url).send().await.unwrap().status(), 404);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/api/users"))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    let res = client
        .get(format!("http://{addr}/api/users"))
        .header("x-request-id", id)
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], id);
}
