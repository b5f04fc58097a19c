//! Contact sub-resource: create, update, delete.
//!
//! Mirrors the person resource's build/parse + service split. Note the wire
//! asymmetry: creation posts its payload flat, while update nests it under
//! `"params"`.

use crate::client::{parse_json, parse_no_content, Api};
use crate::error::{logged, ApiError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Contact, CreateContactParams, ParamsEnvelope, UpdateContactParams};

/// Stateless request builder / response parser for the contact resource.
#[derive(Debug, Clone)]
pub struct ContactClient {
    api: Api,
}

impl ContactClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn build_create(&self, params: &CreateContactParams) -> Result<HttpRequest, ApiError> {
        self.api.post_json("/contact", params)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        parse_json(response)
    }

    pub fn build_update(&self, params: &UpdateContactParams) -> Result<HttpRequest, ApiError> {
        self.api.put_json("/contact", &ParamsEnvelope { params })
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        parse_json(response)
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        self.api.delete(&format!("/contact/{id}"))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_no_content(response)
    }
}

/// Contact operations executed end-to-end over a transport.
#[derive(Debug, Clone)]
pub struct ContactService<T> {
    client: ContactClient,
    transport: T,
}

impl<T: Transport> ContactService<T> {
    pub fn new(api: Api, transport: T) -> Self {
        Self {
            client: ContactClient::new(api),
            transport,
        }
    }

    pub fn create(&self, params: &CreateContactParams) -> Result<Contact, ApiError> {
        logged("create contact", {
            self.client.build_create(params).and_then(|request| {
                self.transport
                    .execute(&request)
                    .and_then(|response| self.client.parse_create(response))
            })
        })
    }

    pub fn update(&self, params: &UpdateContactParams) -> Result<Contact, ApiError> {
        logged("update contact", {
            self.client.build_update(params).and_then(|request| {
                self.transport
                    .execute(&request)
                    .and_then(|response| self.client.parse_update(response))
            })
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        logged("delete contact", {
            let request = self.client.build_delete(id);
            self.transport
                .execute(&request)
                .and_then(|response| self.client.parse_delete(response))
        })
    }
}
