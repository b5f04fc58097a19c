//! Paginated list container.
//!
//! Owns the store, the current page index and the last-seen pagination
//! metadata. Children mutate the list through the four entry points at the
//! bottom instead of triggering refetches; only a page change refetches.

use crate::person::PersonService;
use crate::store::{ListAction, PeopleStore};
use crate::transport::Transport;
use crate::types::{Contact, ListPersonsQuery, Person};

/// Shown in place of the list when no person exists.
pub const NO_PEOPLE_FOUND: &str = "Nenhuma pessoa foi encontrada.";

#[derive(Debug, Clone)]
pub struct PageContainer {
    store: PeopleStore,
    page: u64,
    per_page: u64,
    total_elements: u64,
    total_pages: u64,
    fetching: bool,
}

impl PageContainer {
    pub fn new(per_page: u64) -> Self {
        Self {
            store: PeopleStore::new(),
            page: 0,
            per_page,
            total_elements: 0,
            total_pages: 0,
            fetching: false,
        }
    }

    pub fn people(&self) -> &[Person] {
        self.store.people()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Fetch the current page. On failure the previous content and metadata
    /// stay; the service has already logged the error and the container
    /// surfaces nothing further.
    pub fn load<T: Transport>(&mut self, service: &PersonService<T>) {
        self.fetching = true;
        let query = ListPersonsQuery {
            name: Some(String::new()),
            page: Some(self.page),
            per_page: Some(self.per_page),
            ..ListPersonsQuery::default()
        };
        if let Ok(page) = service.list(&query) {
            self.total_elements = page.total_elements;
            self.total_pages = page.total_pages;
            self.page = page.number;
            self.store.replace(page.content);
        }
        self.fetching = false;
    }

    /// Previous is enabled exactly while the page index is non-zero.
    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    /// Next is enabled exactly while `page < total_pages - 1`.
    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn previous_page<T: Transport>(&mut self, service: &PersonService<T>) {
        if !self.can_previous() {
            return;
        }
        self.page -= 1;
        self.load(service);
    }

    pub fn next_page<T: Transport>(&mut self, service: &PersonService<T>) {
        if !self.can_next() {
            return;
        }
        self.page += 1;
        self.load(service);
    }

    pub fn pager_label(&self) -> String {
        format!(
            "Pessoas por página: {} / Página {} de {}",
            self.per_page,
            self.page + 1,
            self.total_pages
        )
    }

    // List-mutation entry points handed down to the cards and forms.

    pub fn add_person(&mut self, person: Person) {
        self.store.apply(ListAction::AddPerson(person));
    }

    pub fn remove_person(&mut self, person_id: &str) {
        self.store.apply(ListAction::RemovePerson(person_id.to_string()));
    }

    pub fn add_contact(&mut self, person_id: &str, contact: Contact) {
        self.store.apply(ListAction::AddContact {
            person_id: person_id.to_string(),
            contact,
        });
    }

    pub fn remove_contact(&mut self, person_id: &str, contact_id: &str) {
        self.store.apply(ListAction::RemoveContact {
            person_id: person_id.to_string(),
            contact_id: contact_id.to_string(),
        });
    }
}
