//! Single-shot person creation form.
//!
//! Captures the person's own fields plus its required first contact in one
//! submission. There is no success banner and no field reset: the created
//! person is handed back for the list, and the form stays as typed.

use crate::person::PersonService;
use crate::transport::Transport;
use crate::types::{CreatePersonParams, Person};
use crate::ui::{failure_message, required};

#[derive(Debug, Clone, Default)]
pub struct CreatePersonFields {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePersonErrors {
    pub name: Option<&'static str>,
    pub cpf: Option<&'static str>,
    pub birth_date: Option<&'static str>,
    pub contact_name: Option<&'static str>,
    pub contact_phone: Option<&'static str>,
    pub contact_email: Option<&'static str>,
}

impl CreatePersonErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none()
            && self.cpf.is_none()
            && self.birth_date.is_none()
            && self.contact_name.is_none()
            && self.contact_phone.is_none()
            && self.contact_email.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreatePersonForm {
    fields: CreatePersonFields,
    errors: CreatePersonErrors,
    submitting: bool,
    error: Option<String>,
}

impl CreatePersonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &CreatePersonFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut CreatePersonFields {
        &mut self.fields
    }

    pub fn errors(&self) -> &CreatePersonErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. All six fields are required; any empty one blocks
    /// the request. On success the created person is returned for an
    /// `AddPerson` dispatch.
    pub fn submit<T: Transport>(&mut self, service: &PersonService<T>) -> Option<Person> {
        if self.submitting {
            return None;
        }
        if !self.validate() {
            return None;
        }

        self.submitting = true;
        self.error = None;

        let params = CreatePersonParams {
            name: self.fields.name.clone(),
            cpf: self.fields.cpf.clone(),
            birth_date: self.fields.birth_date.clone(),
            contact_name: self.fields.contact_name.clone(),
            contact_phone: self.fields.contact_phone.clone(),
            contact_email: self.fields.contact_email.clone(),
        };
        let created = match service.create(&params) {
            Ok(person) => Some(person),
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao criar uma pessoa."));
                None
            }
        };
        self.submitting = false;
        created
    }

    fn validate(&mut self) -> bool {
        self.errors = CreatePersonErrors {
            name: required(&self.fields.name, "O nome é obrigatório"),
            cpf: required(&self.fields.cpf, "CPF é obrigatório"),
            birth_date: required(&self.fields.birth_date, "A data de aniversário é obrigatória"),
            contact_name: required(&self.fields.contact_name, "Nome do contato é obrigatório"),
            contact_phone: required(
                &self.fields.contact_phone,
                "Telefone do contato é obrigatório",
            ),
            contact_email: required(
                &self.fields.contact_email,
                "E-mail do contato é obrigatório",
            ),
        };
        self.errors.is_clear()
    }
}
