//! Client core for the people administration service.
//!
//! # Overview
//! Everything needed to drive the people/contacts admin against the remote
//! REST service: typed resource clients for every operation, blocking
//! services that execute them, an action-based list store, and the form and
//! page state machines a frontend binds to.
//!
//! # Design
//! - `Api` resolves the base URL once (env var or local default) and stamps
//!   the JSON content-type; both resources route through it.
//! - Each REST operation is split into `build_*` (produces an `HttpRequest`)
//!   and `parse_*` (consumes an `HttpResponse`); the `Transport` seam
//!   executes the round-trip, so every layer above it tests without a
//!   network.
//! - `PersonService` / `ContactService` perform the calls, log failures and
//!   propagate them; user-facing wording is decided by the form models.
//! - The list is cached in memory only: components dispatch `ListAction`s
//!   after successful round-trips instead of refetching, accepting silent
//!   divergence until the next page load.

pub mod client;
pub mod contact;
pub mod error;
pub mod http;
pub mod person;
pub mod store;
pub mod transport;
pub mod types;
pub mod ui;

pub use client::{Api, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use contact::{ContactClient, ContactService};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use person::{PersonClient, PersonService};
pub use store::{ListAction, PeopleStore};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Contact, CreateContactParams, CreatePersonParams, ListPersonsQuery, Page, Person,
    UpdateContactParams, UpdatePersonParams,
};
pub use ui::contact_card::ContactCard;
pub use ui::create_contact::CreateContactForm;
pub use ui::create_person::CreatePersonForm;
pub use ui::page::PageContainer;
pub use ui::person_card::PersonCard;
pub use ui::{Activity, CardMode};
