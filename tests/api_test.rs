use pet_store::api::{build_router, APPLICATION_PROBLEM_JSON};
use pet_store::lifecycle::PetSystem;
use pet_store::pet_actor::DEFAULT_CHANNEL_CAPACITY;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serve the full router on an ephemeral port; returns the base URL.
async fn spawn_app() -> String {
    let system = PetSystem::new(DEFAULT_CHANNEL_CAPACITY);
    let app = build_router(system.pet_client.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    format!("http://{addr}")
}

fn joe() -> Value {
    json!({
        "type": "dog",
        "name": "Joe",
        "dob": "2022-06-23T08:59:34.338Z",
        "species": "poodle"
    })
}

async fn create(client: &Client, base: &str, pet: &Value) -> Value {
    let res = client.post(format!("{base}/v1/pets")).json(pet).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

fn content_type(res: &reqwest::Response) -> String {
    res.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;

    let res = reqwest::get(format!("{base}/v1/pets/up")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "We are up and running!");
}

/// Create, read, update, list and delete the same pet over HTTP.
#[tokio::test]
async fn test_pet_crud_over_http() {
    let base = spawn_app().await;
    let client = Client::new();

    let created = create(&client, &base, &joe()).await;
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["type"], "dog");
    assert_eq!(created["name"], "Joe");
    assert_eq!(created["dob"], "2022-06-23T08:59:34.338Z");
    assert_eq!(created["species"], "poodle");

    let res = client.get(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), created);

    // Extra fields such as the id are ignored in the body
    let mut renamed = created.clone();
    renamed["name"] = json!("Bobby");
    let res = client
        .put(format!("{base}/v1/pets/{id}"))
        .json(&renamed)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), renamed);

    let res = client.get(format!("{base}/v1/pets")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([renamed]));

    let res = client.delete(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().is_empty());

    let res = client.get(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&res), APPLICATION_PROBLEM_JSON);
    let problem: Value = res.json().await.unwrap();
    assert_eq!(problem["status"], 404);
    assert_eq!(problem["detail"], "Pet not found");
    assert_eq!(problem["instance"], format!("/v1/pets/{id}"));
}

#[tokio::test]
async fn test_put_replaces_the_whole_record() {
    let base = spawn_app().await;
    let client = Client::new();

    let created = create(&client, &base, &joe()).await;
    let id = created["id"].as_str().expect("id").to_string();
    let replacement = json!({
        "type": "rabbit",
        "name": "Thumper",
        "dob": "2023-03-01",
        "species": "lop"
    });

    let res = client
        .put(format!("{base}/v1/pets/{id}"))
        .json(&replacement)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let mut expected = replacement;
    expected["id"] = json!(id);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    let res = client.get(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), expected);
}

#[tokio::test]
async fn test_only_hyphenated_ids_are_routed() {
    let base = spawn_app().await;
    let client = Client::new();

    let created = create(&client, &base, &joe()).await;
    let id: uuid::Uuid = created["id"].as_str().unwrap().parse().unwrap();

    for form in [id.simple().to_string(), id.braced().to_string(), id.urn().to_string()] {
        let res = client.get(format!("{base}/v1/pets/{form}")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{form}");
    }

    let res = client.get(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_filters() {
    let base = spawn_app().await;
    let client = Client::new();

    let joe = create(&client, &base, &joe()).await;
    let tom = create(
        &client,
        &base,
        &json!({"type": "cat", "name": "Tom", "dob": "2021-01-05", "species": "siamese"}),
    )
    .await;

    let list = |query: &'static [(&'static str, &'static str)]| {
        let client = client.clone();
        let base = base.clone();
        async move {
            let res = client
                .get(format!("{base}/v1/pets"))
                .query(query)
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            res.json::<Value>().await.unwrap()
        }
    };

    assert_eq!(list(&[]).await, json!([joe.clone(), tom.clone()]));
    assert_eq!(list(&[("type", "dog")]).await, json!([joe.clone()]));
    assert_eq!(list(&[("name", "TOM")]).await, json!([tom.clone()]));
    assert_eq!(list(&[("species", "Poodle")]).await, json!([joe.clone()]));
    assert_eq!(list(&[("dob", "2022-06-23T23:59:00Z")]).await, json!([joe.clone()]));
    assert_eq!(
        list(&[("type", "dog"), ("name", "joe"), ("species", "poodle"), ("dob", "2022-06-23")]).await,
        json!([joe.clone()])
    );
    assert_eq!(list(&[("type", "rabbit")]).await, json!([]));
    // Blank values are no filter at all
    assert_eq!(list(&[("type", ""), ("name", "")]).await, json!([joe, tom]));
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let base = spawn_app().await;
    let client = Client::new();

    let mut bad = joe();
    bad["type"] = json!("hamster");
    bad["name"] = json!("");
    let res = client.post(format!("{base}/v1/pets")).json(&bad).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&res), APPLICATION_PROBLEM_JSON);
    let problem: Value = res.json().await.unwrap();
    let fields: Vec<&str> = problem["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["type", "name"]);

    let res = client
        .post(format!("{base}/v1/pets"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(format!("{base}/v1/pets/123")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{base}/v1/pets"))
        .query(&[("dob", "someday")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored by the failed requests
    let res = client.get(format!("{base}/v1/pets")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_unknown_pet_ids() {
    let base = spawn_app().await;
    let client = Client::new();
    let id = uuid::Uuid::new_v4();

    let res = client
        .put(format!("{base}/v1/pets/{id}"))
        .json(&joe())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(format!("{base}/v1/pets/{id}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Invalid body wins over unknown id
    let res = client
        .put(format!("{base}/v1/pets/{id}"))
        .json(&json!({"name": "Joe"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_app().await;

    let res = reqwest::get(format!("{base}/api-json")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let doc: Value = res.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "Pet store");
    assert_eq!(doc["info"]["version"], "1.0");
    assert!(doc["paths"]["/v1/pets"]["post"].is_object());
    assert!(doc["paths"]["/v1/pets/{id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["Pet"].is_object());
}
