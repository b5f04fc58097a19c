//! Wire types for the people service.
//!
//! DTOs are defined here, independent from the mock-server crate's own
//! definitions; the integration tests catch schema drift between the two.
//! Field names follow the service's camelCase JSON contract.

use serde::{Deserialize, Serialize};

/// A managed person with its ordered contact list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    /// National ID string; filtered on exactly, never parsed.
    pub cpf: String,
    /// ISO-like date string; the client treats it as opaque text.
    pub birth_date: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A contact owned by exactly one person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Back-reference to the owning person. The service may include it;
    /// this client never populates or consults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Box<Person>>,
}

/// One page of a listing, with the server-reported pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Current page index, 0-based.
    pub number: u64,
    pub size: u64,
    pub first: bool,
    pub last: bool,
}

/// Payload for `POST /person`: the person's own fields plus its required
/// first contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonParams {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Payload for `PUT /person`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonParams {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
}

/// Query parameters for `GET /person/all`. Absent fields are omitted from
/// the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct ListPersonsQuery {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub birth_date_str: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Payload for `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactParams {
    pub person_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Payload for `PUT /contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactParams {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Wire quirk of the people service: person create, person update and
/// contact update expect their payload nested under a top-level `"params"`
/// key. Contact creation posts its payload flat.
#[derive(Debug, Serialize)]
pub(crate) struct ParamsEnvelope<'a, T> {
    pub params: &'a T,
}
