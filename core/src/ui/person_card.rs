//! Per-person card: view, edit, delete.

use crate::person::PersonService;
use crate::transport::Transport;
use crate::types::{Person, UpdatePersonParams};
use crate::ui::{failure_message, required, Activity, CardMode};

/// Editable copy of the person's scalar fields.
#[derive(Debug, Clone, Default)]
pub struct PersonForm {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
}

/// Field-scoped validation errors; a set field blocks submission.
#[derive(Debug, Clone, Default)]
pub struct PersonFormErrors {
    pub name: Option<&'static str>,
    pub cpf: Option<&'static str>,
    pub birth_date: Option<&'static str>,
}

impl PersonFormErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.cpf.is_none() && self.birth_date.is_none()
    }
}

/// State machine for one person's card.
///
/// Mode toggles between viewing and editing; activity tracks the in-flight
/// operation. A finished update returns to viewing on success and on
/// failure alike: failed edits deliberately exit edit mode.
#[derive(Debug, Clone)]
pub struct PersonCard {
    person: Person,
    mode: CardMode,
    activity: Activity,
    form: PersonForm,
    errors: PersonFormErrors,
    success: Option<String>,
    error: Option<String>,
}

impl PersonCard {
    pub fn new(person: Person) -> Self {
        let form = PersonForm {
            name: person.name.clone(),
            cpf: person.cpf.clone(),
            birth_date: person.birth_date.clone(),
        };
        Self {
            person,
            mode: CardMode::Viewing,
            activity: Activity::Idle,
            form,
            errors: PersonFormErrors::default(),
            success: None,
            error: None,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
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

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PersonForm {
        &mut self.form
    }

    pub fn errors(&self) -> &PersonFormErrors {
        &self.errors
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Flip between viewing and editing. Either direction clears the
    /// displayed error; entering edit mode re-fills the form from the
    /// entity.
    pub fn toggle_editing(&mut self) {
        self.error = None;
        match self.mode {
            CardMode::Viewing => {
                self.form = PersonForm {
                    name: self.person.name.clone(),
                    cpf: self.person.cpf.clone(),
                    birth_date: self.person.birth_date.clone(),
                };
                self.mode = CardMode::Editing;
            }
            CardMode::Editing => self.mode = CardMode::Viewing,
        }
    }

    /// Submit the edit form. Validation failures block the request and
    /// keep the card in edit mode; a completed request always returns the
    /// card to viewing.
    pub fn submit<T: Transport>(&mut self, service: &PersonService<T>) {
        if self.mode != CardMode::Editing || self.activity != Activity::Idle {
            return;
        }
        if !self.validate() {
            return;
        }

        self.activity = Activity::Submitting;
        self.success = None;
        self.error = None;

        let params = UpdatePersonParams {
            id: self.person.id.clone(),
            name: self.form.name.clone(),
            cpf: self.form.cpf.clone(),
            birth_date: self.form.birth_date.clone(),
        };
        match service.update(&params) {
            Ok(_) => {
                self.success = Some("A pessoa foi editada com sucesso.".to_string());
            }
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao editar a pessoa."));
            }
        }

        self.activity = Activity::Idle;
        self.mode = CardMode::Viewing;
    }

    /// Delete this person. On success returns the removed id so the caller
    /// can dispatch `RemovePerson`; on failure the entity stays listed.
    pub fn delete<T: Transport>(&mut self, service: &PersonService<T>) -> Option<String> {
        if self.activity != Activity::Idle {
            return None;
        }

        self.activity = Activity::Deleting;
        let removed = match service.delete(&self.person.id) {
            Ok(()) => {
                self.success = Some("A pessoa foi deletada com sucesso.".to_string());
                Some(self.person.id.clone())
            }
            Err(err) => {
                self.error = Some(failure_message(&err, "Erro ao deletar a pessoa."));
                None
            }
        };
        self.activity = Activity::Idle;
        removed
    }

    fn validate(&mut self) -> bool {
        self.errors = PersonFormErrors {
            name: required(&self.form.name, "O nome é obrigatório"),
            cpf: required(&self.form.cpf, "CPF é obrigatório"),
            birth_date: required(&self.form.birth_date, "A data de aniversário é obrigatória"),
        };
        self.errors.is_clear()
    }
}
