use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Contact, Person};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn create_person_body(name: &str, cpf: &str) -> String {
    format!(
        r#"{{"params":{{"name":"{name}","cpf":"{cpf}","birthDate":"1990-04-12","contactName":"Ana","contactPhone":"11 91234-5678","contactEmail":"ana@example.com"}}}}"#
    )
}

async fn create_person(app: &axum::Router, name: &str, cpf: &str) -> Person {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/person", &create_person_body(name, cpf)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- list ---

#[tokio::test]
async fn list_empty_returns_an_empty_envelope() {
    let app = app();
    let resp = app.oneshot(get_request("/person/all")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["first"], true);
    assert_eq!(body["last"], true);
}

#[tokio::test]
async fn list_paginates_in_insertion_order() {
    let app = app();
    for i in 0..7 {
        create_person(&app, &format!("Person {i}"), &format!("cpf-{i}")).await;
    }

    let resp = app
        .clone()
        .oneshot(get_request("/person/all?page=1&perPage=3"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 3);
    assert_eq!(body["content"][0]["name"], "Person 3");
    assert_eq!(body["totalElements"], 7);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["number"], 1);
    assert_eq!(body["size"], 3);
    assert_eq!(body["first"], false);
    assert_eq!(body["last"], false);

    let resp = app
        .oneshot(get_request("/person/all?page=2&perPage=3"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
    assert_eq!(body["last"], true);
}

#[tokio::test]
async fn list_filters_by_name_cpf_and_birth_date() {
    let app = app();
    create_person(&app, "Maria Silva", "111").await;
    create_person(&app, "João Souza", "222").await;

    let resp = app
        .clone()
        .oneshot(get_request("/person/all?name=maria"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["content"][0]["cpf"], "111");

    let resp = app
        .clone()
        .oneshot(get_request("/person/all?cpf=222"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["content"][0]["name"], "João Souza");

    let resp = app
        .oneshot(get_request("/person/all?birthDateStr=2000-01-01"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["totalElements"], 0);
}

// --- person create / get ---

#[tokio::test]
async fn create_person_materializes_the_initial_contact() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;

    assert_eq!(person.name, "Maria Silva");
    assert_eq!(person.contacts.len(), 1);
    assert_eq!(person.contacts[0].email, "ana@example.com");

    let resp = app
        .oneshot(get_request(&format!("/person/id/{}", person.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Person = body_json(resp).await;
    assert_eq!(fetched.id, person.id);
}

#[tokio::test]
async fn create_person_rejects_a_duplicate_cpf() {
    let app = app();
    create_person(&app, "Maria Silva", "52998224725").await;

    let resp = app
        .oneshot(json_request("POST", "/person", &create_person_body("Outra", "52998224725")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "Já existe uma pessoa com este CPF.");
}

#[tokio::test]
async fn get_person_by_cpf_finds_the_person() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;

    let resp = app
        .oneshot(get_request("/person/cpf/52998224725"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Person = body_json(resp).await;
    assert_eq!(fetched.id, person.id);
}

#[tokio::test]
async fn get_unknown_person_is_404_with_a_portuguese_body() {
    let app = app();
    let resp = app.oneshot(get_request("/person/id/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Pessoa não encontrada.");
}

// --- person update / delete ---

#[tokio::test]
async fn update_person_replaces_scalars_and_keeps_contacts() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;

    let body = format!(
        r#"{{"params":{{"id":"{}","name":"Maria S. Silva","cpf":"52998224725","birthDate":"1990-04-13"}}}}"#,
        person.id
    );
    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/person", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Person = body_json(resp).await;
    assert_eq!(updated.name, "Maria S. Silva");
    assert_eq!(updated.birth_date, "1990-04-13");
    assert_eq!(updated.contacts.len(), 1);
}

#[tokio::test]
async fn update_unknown_person_is_404() {
    let app = app();
    let body = r#"{"params":{"id":"missing","name":"X","cpf":"1","birthDate":"1990-04-12"}}"#;
    let resp = app.oneshot(json_request("PUT", "/person", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Pessoa não encontrada.");
}

#[tokio::test]
async fn delete_person_is_a_body_less_put() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/person/{}", person.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(get_request(&format!("/person/id/{}", person.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- contacts ---

#[tokio::test]
async fn create_contact_appends_to_the_owning_person() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;

    let body = format!(
        r#"{{"personId":"{}","name":"Bruno","phone":"21 99876-5432","email":"bruno@example.com"}}"#,
        person.id
    );
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/contact", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let contact: Contact = body_json(resp).await;
    assert_eq!(contact.name, "Bruno");

    let resp = app
        .oneshot(get_request(&format!("/person/id/{}", person.id)))
        .await
        .unwrap();
    let fetched: Person = body_json(resp).await;
    assert_eq!(fetched.contacts.len(), 2);
    assert_eq!(fetched.contacts[1].id, contact.id);
}

#[tokio::test]
async fn create_contact_for_unknown_person_is_404() {
    let app = app();
    let body = r#"{"personId":"missing","name":"Bruno","phone":"21 99876-5432","email":"bruno@example.com"}"#;
    let resp = app.oneshot(json_request("POST", "/contact", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Pessoa não encontrada.");
}

#[tokio::test]
async fn update_contact_reads_the_params_envelope() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;
    let contact_id = &person.contacts[0].id;

    let body = format!(
        r#"{{"params":{{"contactId":"{contact_id}","name":"Ana Paula","phone":"11 90000-0000","email":"ana@example.com"}}}}"#
    );
    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/contact", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Contact = body_json(resp).await;
    assert_eq!(updated.name, "Ana Paula");
    assert_eq!(updated.phone, "11 90000-0000");
}

#[tokio::test]
async fn update_unknown_contact_is_404() {
    let app = app();
    let body = r#"{"params":{"contactId":"missing","name":"X","phone":"1","email":"x@example.com"}}"#;
    let resp = app.oneshot(json_request("PUT", "/contact", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Contato não encontrado.");
}

#[tokio::test]
async fn delete_contact_removes_it_from_the_owner() {
    let app = app();
    let person = create_person(&app, "Maria Silva", "52998224725").await;
    let contact_id = person.contacts[0].id.clone();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/contact/{contact_id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(get_request(&format!("/person/id/{}", person.id)))
        .await
        .unwrap();
    let fetched: Person = body_json(resp).await;
    assert!(fetched.contacts.is_empty());
}

#[tokio::test]
async fn delete_unknown_contact_is_404() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/contact/missing")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
