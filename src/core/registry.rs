use std::collections::HashMap;
use crate::core::error::{StoreError, StoreResult};
use crate::models::Person;

/// Owner of every active person record, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Registry {
    people: HashMap<String, Person>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning whatever it replaced
    pub fn add(&mut self, person: Person) -> Option<Person> {
        self.people.insert(person.id.clone(), person)
    }

    pub fn get(&self, id: &str) -> StoreResult<&Person> {
        self.people.get(id).ok_or(StoreError::NotFound)
    }

    pub fn get_mut(&mut self, id: &str) -> StoreResult<&mut Person> {
        self.people.get_mut(id).ok_or(StoreError::NotFound)
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<Person> {
        self.people.remove(id).ok_or(StoreError::NotFound)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn clear(&mut self) {
        self.people.clear();
    }
}
