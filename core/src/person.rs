//! Person resource: one function per REST operation.
//!
//! `PersonClient` builds requests and parses responses as plain data;
//! `PersonService` executes them through a [`Transport`], logging every
//! failure before handing it back to the caller. User-facing messaging is
//! the caller's job.

use url::form_urlencoded;

use crate::client::{parse_json, parse_no_content, Api};
use crate::error::{logged, ApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    CreatePersonParams, ListPersonsQuery, Page, ParamsEnvelope, Person, UpdatePersonParams,
};

/// Stateless request builder / response parser for the person resource.
#[derive(Debug, Clone)]
pub struct PersonClient {
    api: Api,
}

impl PersonClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn build_get_by_id(&self, id: &str) -> HttpRequest {
        self.api.get(&format!("/person/id/{id}"))
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    pub fn build_get_by_cpf(&self, cpf: &str) -> HttpRequest {
        self.api.get(&format!("/person/cpf/{cpf}"))
    }

    pub fn parse_get_by_cpf(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    pub fn build_list(&self, query: &ListPersonsQuery) -> HttpRequest {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(name) = &query.name {
            pairs.append_pair("name", name);
        }
        if let Some(cpf) = &query.cpf {
            pairs.append_pair("cpf", cpf);
        }
        if let Some(birth_date_str) = &query.birth_date_str {
            pairs.append_pair("birthDateStr", birth_date_str);
        }
        if let Some(page) = query.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(per_page) = query.per_page {
            pairs.append_pair("perPage", &per_page.to_string());
        }
        let query_string = pairs.finish();

        let mut request = self.api.get("/person/all");
        if !query_string.is_empty() {
            request.url = format!("{}?{query_string}", request.url);
        }
        request
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Page<Person>, ApiError> {
        parse_json(response)
    }

    pub fn build_create(&self, params: &CreatePersonParams) -> Result<HttpRequest, ApiError> {
        self.api.post_json("/person", &ParamsEnvelope { params })
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    pub fn build_update(&self, params: &UpdatePersonParams) -> Result<HttpRequest, ApiError> {
        self.api.put_json("/person", &ParamsEnvelope { params })
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    /// Deletion on this resource is a body-less `PUT /person/{id}`, not a
    /// `DELETE`.
    pub fn build_delete(&self, id: &str) -> HttpRequest {
        self.api.put_empty(&format!("/person/{id}"))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_no_content(response)
    }
}

/// Person operations executed end-to-end over a transport.
#[derive(Debug, Clone)]
pub struct PersonService<T> {
    client: PersonClient,
    transport: T,
}

impl<T: Transport> PersonService<T> {
    pub fn new(api: Api, transport: T) -> Self {
        Self {
            client: PersonClient::new(api),
            transport,
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<Person, ApiError> {
        logged("fetch person by id", {
            let request = self.client.build_get_by_id(id);
            self.transport
                .execute(&request)
                .and_then(|response| self.client.parse_get_by_id(response))
        })
    }

    pub fn get_by_cpf(&self, cpf: &str) -> Result<Person, ApiError> {
        logged("fetch person by cpf", {
            let request = self.client.build_get_by_cpf(cpf);
            self.transport
                .execute(&request)
                .and_then(|response| self.client.parse_get_by_cpf(response))
        })
    }

    pub fn list(&self, query: &ListPersonsQuery) -> Result<Page<Person>, ApiError> {
        logged("fetch persons", {
            let request = self.client.build_list(query);
            self.transport
                .execute(&request)
                .and_then(|response| self.client.parse_list(response))
        })
    }

    pub fn create(&self, params: &CreatePersonParams) -> Result<Person, ApiError> {
        logged("create person", {
            self.client.build_create(params).and_then(|request| {
                self.transport
                    .execute(&request)
                    .and_then(|response| self.client.parse_create(response))
            })
        })
    }

    pub fn update(&self, params: &UpdatePersonParams) -> Result<Person, ApiError> {
        logged("update person", {
            self.client.build_update(params).and_then(|request| {
                self.transport
                    .execute(&request)
                    .and_then(|response| self.client.parse_update(response))
            })
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        logged("delete person", {
            let request = self.client.build_delete(id);
            self.transport
                .execute(&request)
                .and_then(|response| self.client.parse_delete(response))
        })
    }
}
