//! In-memory mock of the people service's REST API.
//!
//! Implements the nine endpoints the client consumes, including the wire
//! quirks: person create/update and contact update read their payload from
//! a `"params"` envelope, person deletion is a body-less PUT, and error
//! responses carry a Portuguese plain-text body that clients surface
//! verbatim. People are kept in insertion order so pagination is stable.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const PERSON_NOT_FOUND: &str = "Pessoa não encontrada.";
pub const CONTACT_NOT_FOUND: &str = "Contato não encontrado.";
pub const DUPLICATE_CPF: &str = "Já existe uma pessoa com este CPF.";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub contacts: Vec<Contact>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Incoming bodies that nest their payload under `"params"`.
#[derive(Deserialize)]
pub struct Enveloped<T> {
    pub params: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub person_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub birth_date_str: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub content: Vec<Person>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub first: bool,
    pub last: bool,
}

pub type Db = Arc<RwLock<Vec<Person>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/person/all", get(list_persons))
        .route("/person/id/{id}", get(get_person_by_id))
        .route("/person/cpf/{cpf}", get(get_person_by_cpf))
        .route("/person", post(create_person).put(update_person))
        .route("/person/{id}", axum::routing::put(delete_person))
        .route("/contact", post(create_contact).put(update_contact))
        .route("/contact/{id}", delete(delete_contact))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_person_by_id(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Person>, (StatusCode, &'static str)> {
    let people = db.read().await;
    people
        .iter()
        .find(|person| person.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, PERSON_NOT_FOUND))
}

async fn get_person_by_cpf(
    State(db): State<Db>,
    Path(cpf): Path<String>,
) -> Result<Json<Person>, (StatusCode, &'static str)> {
    let people = db.read().await;
    people
        .iter()
        .find(|person| person.cpf == cpf)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, PERSON_NOT_FOUND))
}

async fn list_persons(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope> {
    let people = db.read().await;

    let matches: Vec<Person> = people
        .iter()
        .filter(|person| {
            params.name.as_deref().is_none_or(|name| {
                person.name.to_lowercase().contains(&name.to_lowercase())
            })
        })
        .filter(|person| params.cpf.as_deref().is_none_or(|cpf| person.cpf == cpf))
        .filter(|person| {
            params
                .birth_date_str
                .as_deref()
                .is_none_or(|birth_date| person.birth_date == birth_date)
        })
        .cloned()
        .collect();

    let size = params.per_page.unwrap_or(10).max(1);
    let number = params.page.unwrap_or(0);
    let total_elements = matches.len() as u64;
    let total_pages = total_elements.div_ceil(size);

    let start = (number * size).min(total_elements) as usize;
    let end = ((number + 1) * size).min(total_elements) as usize;
    let content = matches[start..end].to_vec();

    Json(PageEnvelope {
        content,
        total_elements,
        total_pages,
        number,
        size,
        first: number == 0,
        last: number + 1 >= total_pages,
    })
}

async fn create_person(
    State(db): State<Db>,
    Json(body): Json<Enveloped<CreatePerson>>,
) -> Result<(StatusCode, Json<Person>), (StatusCode, &'static str)> {
    let input = body.params;
    let mut people = db.write().await;
    if people.iter().any(|person| person.cpf == input.cpf) {
        return Err((StatusCode::BAD_REQUEST, DUPLICATE_CPF));
    }

    let person = Person {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        cpf: input.cpf,
        birth_date: input.birth_date,
        contacts: vec![Contact {
            id: Uuid::new_v4().to_string(),
            name: input.contact_name,
            phone: input.contact_phone,
            email: input.contact_email,
        }],
    };
    people.push(person.clone());
    Ok((StatusCode::CREATED, Json(person)))
}

async fn update_person(
    State(db): State<Db>,
    Json(body): Json<Enveloped<UpdatePerson>>,
) -> Result<Json<Person>, (StatusCode, &'static str)> {
    let input = body.params;
    let mut people = db.write().await;
    let person = people
        .iter_mut()
        .find(|person| person.id == input.id)
        .ok_or((StatusCode::NOT_FOUND, PERSON_NOT_FOUND))?;
    person.name = input.name;
    person.cpf = input.cpf;
    person.birth_date = input.birth_date;
    Ok(Json(person.clone()))
}

/// Deletion is a body-less PUT on this resource; contacts go with the
/// person.
async fn delete_person(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut people = db.write().await;
    let before = people.len();
    people.retain(|person| person.id != id);
    if people.len() == before {
        return Err((StatusCode::NOT_FOUND, PERSON_NOT_FOUND));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<CreateContact>,
) -> Result<(StatusCode, Json<Contact>), (StatusCode, &'static str)> {
    let mut people = db.write().await;
    let person = people
        .iter_mut()
        .find(|person| person.id == input.person_id)
        .ok_or((StatusCode::NOT_FOUND, PERSON_NOT_FOUND))?;

    let contact = Contact {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        phone: input.phone,
        email: input.email,
    };
    person.contacts.push(contact.clone());
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update_contact(
    State(db): State<Db>,
    Json(body): Json<Enveloped<UpdateContact>>,
) -> Result<Json<Contact>, (StatusCode, &'static str)> {
    let input = body.params;
    let mut people = db.write().await;
    let contact = people
        .iter_mut()
        .flat_map(|person| person.contacts.iter_mut())
        .find(|contact| contact.id == input.contact_id)
        .ok_or((StatusCode::NOT_FOUND, CONTACT_NOT_FOUND))?;
    contact.name = input.name;
    contact.phone = input.phone;
    contact.email = input.email;
    Ok(Json(contact.clone()))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut people = db.write().await;
    for person in people.iter_mut() {
        let before = person.contacts.len();
        person.contacts.retain(|contact| contact.id != id);
        if person.contacts.len() != before {
            return Ok(StatusCode::NO_CONTENT);
        }
    }
    Err((StatusCode::NOT_FOUND, CONTACT_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_with_camel_case_birth_date() {
        let person = Person {
            id: "p1".to_string(),
            name: "Maria".to_string(),
            cpf: "52998224725".to_string(),
            birth_date: "1990-04-12".to_string(),
            contacts: Vec::new(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["birthDate"], "1990-04-12");
        assert!(json.get("birth_date").is_none());
    }

    #[test]
    fn enveloped_bodies_require_the_params_key() {
        let ok: Result<Enveloped<UpdatePerson>, _> = serde_json::from_str(
            r#"{"params":{"id":"p1","name":"M","cpf":"1","birthDate":"1990-04-12"}}"#,
        );
        assert!(ok.is_ok());

        let flat: Result<Enveloped<UpdatePerson>, _> =
            serde_json::from_str(r#"{"id":"p1","name":"M","cpf":"1","birthDate":"1990-04-12"}"#);
        assert!(flat.is_err());
    }

    #[test]
    fn create_contact_body_is_flat() {
        let input: CreateContact = serde_json::from_str(
            r#"{"personId":"p1","name":"Ana","phone":"11 91234-5678","email":"ana@example.com"}"#,
        )
        .unwrap();
        assert_eq!(input.person_id, "p1");
    }
}
