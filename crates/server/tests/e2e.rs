use std::net::SocketAddr;

use reqwest::{Method, StatusCode as HttpStatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::ServerState;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Each test gets its own listener and its own empty stores.
async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, ServerState::new(), std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_tasks_create_and_list_in_order() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/tasks"))
        .json(&json!({"text": "buy milk", "done": false}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "text": "buy milk", "done": false}));

    let res = c.post(app.url("/tasks"))
        .json(&json!({"text": "walk dog", "done": false}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["id"], 2);

    let res = c.get(app.url("/tasks")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!([
            {"id": 1, "text": "buy milk", "done": false},
            {"id": 2, "text": "walk dog", "done": false},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_messages_create_delete_and_delete_again() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/messages"))
        .json(&json!({"user": "ana", "content": "hi"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "user": "ana", "content": "hi"}));

    let res = c.delete(app.url("/messages?id=1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(app.url("/messages")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "[]");

    let res = c.delete(app.url("/messages?id=1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_empty_collections_list_as_empty_arrays() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/tasks", "/messages"] {
        let res = client().get(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        assert_eq!(res.text().await?, "[]");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_bodies_are_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let cases = [
        ("/tasks", "not json"),
        ("/tasks", r#"{"done": true}"#),
        ("/tasks", r#"{"text": "a", "priority": 1}"#),
        ("/messages", r#"{"user": "ana"}"#),
        ("/messages", ""),
        ("/tasks", r#"["a", false]"#),
        ("/messages", r#"["ana", "hi"]"#),
        ("/tasks", "null"),
    ];
    for (path, body) in cases {
        let res = c.post(app.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "{path} {body}");
        assert!(!res.text().await?.is_empty());
    }

    // rejected bodies never consume an id
    let res = c.post(app.url("/tasks")).json(&json!({"text": "ok"})).send().await?;
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "text": "ok", "done": false}));
    Ok(())
}

#[tokio::test]
async fn e2e_task_client_id_is_overwritten_and_done_kept() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().post(app.url("/tasks"))
        .json(&json!({"id": 77, "text": "ship it", "done": true}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "text": "ship it", "done": true}));
    Ok(())
}

#[tokio::test]
async fn e2e_delete_id_validation() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    c.post(app.url("/messages"))
        .json(&json!({"user": "ana", "content": "hi"}))
        .send().await?;

    for (query, status) in [
        ("", HttpStatusCode::BAD_REQUEST),
        ("?id=", HttpStatusCode::BAD_REQUEST),
        ("?id=abc", HttpStatusCode::BAD_REQUEST),
        ("?id=1.5", HttpStatusCode::BAD_REQUEST),
        ("?id=-1", HttpStatusCode::NOT_FOUND),
        ("?id=0", HttpStatusCode::NOT_FOUND),
        ("?id=2", HttpStatusCode::NOT_FOUND),
    ] {
        let res = c.delete(app.url(&format!("/messages{query}"))).send().await?;
        assert_eq!(res.status(), status, "query {query:?}");
    }

    // the one real message survived every failed attempt
    let res = c.get(app.url("/messages")).send().await?;
    assert_eq!(res.json::<Value>().await?.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_unsupported_verbs_are_405() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    for (method, path) in [
        (Method::PUT, "/tasks"),
        (Method::DELETE, "/tasks"),
        (Method::PATCH, "/messages"),
        (Method::PUT, "/messages"),
    ] {
        let res = c.request(method.clone(), app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_eq!(res.text().await?, "method not allowed");
    }

    // HEAD responses carry no body on the wire; only the status is observable
    for path in ["/tasks", "/messages"] {
        let res = c.head(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED, "HEAD {path}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_preflight_and_cors_headers() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for path in ["/tasks", "/messages"] {
        let res = c.request(Method::OPTIONS, app.url(path))
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "DELETE")
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let h = res.headers();
        assert_eq!(h["access-control-allow-origin"], "*");
        assert!(h["access-control-allow-methods"].to_str()?.contains("DELETE"));
        assert!(h["access-control-allow-headers"].to_str()?.eq_ignore_ascii_case("content-type"));
        assert!(res.bytes().await?.is_empty());
    }

    let res = c.delete(app.url("/messages?id=9")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_posts_get_sequential_ids() -> anyhow::Result<()> {
    const N: u64 = 50;
    let app = start_server().await?;
    let c = client();

    let mut handles = Vec::new();
    for i in 0..N {
        let c = c.clone();
        let url = app.url("/tasks");
        handles.push(tokio::spawn(async move {
            let res = c.post(url).json(&json!({"text": format!("t{i}")})).send().await?;
            let v = res.json::<Value>().await?;
            anyhow::Ok(v["id"].as_u64().unwrap_or_default())
        }));
    }
    let mut ids = Vec::new();
    for h in handles {
        ids.push(h.await??);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=N).collect::<Vec<_>>());

    let listed = c.get(app.url("/tasks")).send().await?.json::<Value>().await?;
    let listed: Vec<u64> = listed
        .as_array()
        .map(|a| a.iter().filter_map(|r| r["id"].as_u64()).collect())
        .unwrap_or_default();
    assert_eq!(listed, (1..=N).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn e2e_collections_are_independent() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    c.post(app.url("/tasks")).json(&json!({"text": "a"})).send().await?;
    c.post(app.url("/tasks")).json(&json!({"text": "b"})).send().await?;
    let res = c.post(app.url("/messages"))
        .json(&json!({"user": "ana", "content": "hi"}))
        .send().await?;
    assert_eq!(res.json::<Value>().await?["id"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
