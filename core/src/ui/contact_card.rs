//! Per-contact card nested under a person's card.

use crate::contact::ContactService;
use crate::transport::Transport;
use crate::types::{Contact, UpdateContactParams};
use crate::ui::{failure_message, required, Activity, CardMode};

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ContactFormErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// Same machine as the person card, scoped to one contact of one person.
/// Deletion reports `(person_id, contact_id)` so the caller can locate the
/// nested item to remove.
#[derive(Debug, Clone)]
pub struct ContactCard {
    person_id: String,
    contact: Contact,
    mode: CardMode,
    activity: Activity,
    form: ContactForm,
    errors: ContactFormErrors,
    success: Option<String>,
    error: Option<String>,
}

impl ContactCard {
    pub fn new(person_id: &str, contact: Contact) -> Self {
        let form = ContactForm {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        };
        Self {
            person_id: person_id.to_string(),
            contact,
            mode: CardMode::Viewing,
            activity: Activity::Idle,
            form,
            errors: ContactFormErrors::default(),
            success: None,
            error: None,
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == CardMode::Editing
    }

    pub fn is_submitting(&self) -> bool {
        self.activity == Activity::Submitting
    }

    pub fn is_deleting(&self) -> bool {
        self.activity == Activity::Deleting
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn errors(&self) -> &ContactFormErrors {
        &self.errors
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_editing(&mut self) {
        self.error = None;
        match self.mode {
            CardMode::Viewing => {
                self.form = ContactForm {
                    name: self.contact.name.clone(),
                    phone: self.contact.phone.clone(),
                    email: self.contact.email.clone(),
                };
                self.mode = CardMode::Editing;
            }
            CardMode::Editing => self.mode = CardMode::Viewing,
        }
    }

    /// Submit the edit form; a completed request always returns the card to
    /// viewing, success or not.
    pub fn submit<T: Transport>(&mut self, service: &ContactService<T>) {
        if self.mode != CardMode::Editing || self.activity != Activity::Idle {
            return;
        }
        if !self.validate() {
            return;
        }

        self.activity = Activity::Submitting;
        self.success = None;
        self.error = None;

        let params = UpdateContactParams {
            contact_id: self.contact.id.clone(),
            name: self.form.name.clone(),
            phone: self.form.phone.clone(),
            email: self.form.email.clone(),
        };
        match service.update(&params) {
            Ok(_) => {
                self.success = Some("O contato foi editado com sucesso.".to_string());
            }
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao editar o contato."));
            }
        }

        self.activity = Activity::Idle;
        self.mode = CardMode::Viewing;
    }

    /// Delete this contact. On success returns `(person_id, contact_id)`
    /// for a `RemoveContact` dispatch.
    pub fn delete<T: Transport>(
        &mut self,
        service: &ContactService<T>,
    ) -> Option<(String, String)> {
        if self.activity != Activity::Idle {
            return None;
        }

        self.activity = Activity::Deleting;
        let removed = match service.delete(&self.contact.id) {
            Ok(()) => {
                self.success = Some("O contato foi deletado com sucesso.".to_string());
                Some((self.person_id.clone(), self.contact.id.clone()))
            }
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao deletar o contato."));
                None
            }
        };
        self.activity = Activity::Idle;
        removed
    }

    fn validate(&mut self) -> bool {
        self.errors = ContactFormErrors {
            name: required(&self.form.name, "Nome do contato é obrigatório"),
            phone: required(&self.form.phone, "Telefone do contato é obrigatório"),
            email: required(&self.form.email, "E-mail do contato é obrigatório"),
        };
        self.errors.is_clear()
    }
}
