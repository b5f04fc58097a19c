//! Contact creation form, scoped to an existing person.

use crate::contact::ContactService;
use crate::transport::Transport;
use crate::types::{Contact, CreateContactParams};
use crate::ui::{failure_message, required};

#[derive(Debug, Clone, Default)]
pub struct CreateContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateContactErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl CreateContactErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactForm {
    person_id: String,
    fields: CreateContactFields,
    errors: CreateContactErrors,
    submitting: bool,
    success: Option<String>,
    error: Option<String>,
}

impl CreateContactForm {
    pub fn new(person_id: &str) -> Self {
        Self {
            person_id: person_id.to_string(),
            fields: CreateContactFields::default(),
            errors: CreateContactErrors::default(),
            submitting: false,
            success: None,
            error: None,
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn fields(&self) -> &CreateContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut CreateContactFields {
        &mut self.fields
    }

    pub fn errors(&self) -> &CreateContactErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. On success the created contact is returned so the
    /// caller can dispatch `AddContact` for [`Self::person_id`].
    pub fn submit<T: Transport>(&mut self, service: &ContactService<T>) -> Option<Contact> {
        if self.submitting {
            return None;
        }
        if !self.validate() {
            return None;
        }

        self.submitting = true;
        self.success = None;
        self.error = None;

        let params = CreateContactParams {
            person_id: self.person_id.clone(),
            name: self.fields.name.clone(),
            phone: self.fields.phone.clone(),
            email: self.fields.email.clone(),
        };
        let created = match service.create(&params) {
            Ok(contact) => {
                self.success = Some("Contato criado com sucesso.".to_string());
                Some(contact)
            }
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao criar um contato."));
                None
            }
        };
        self.submitting = false;
        created
    }

    fn validate(&mut self) -> bool {
        self.errors = CreateContactErrors {
            name: required(&self.fields.name, "O nome é obrigatório"),
            phone: required(&self.fields.phone, "Telefone do contato é obrigatório"),
            email: required(&self.fields.email, "E-mail do contato é obrigatório"),
        };
        self.errors.is_clear()
    }
}
