use parking_lot::RwLock;
use crate::core::error::{StoreError, StoreResult};
use crate::core::index::{GenderIndex, PersonKey};
use crate::core::registry::Registry;
use crate::models::{Gender, Person, PersonAttributes, StoreStats};
use crate::services::IdGenerator;

/// Registry and gender index, always mutated together
#[derive(Debug, Default)]
struct StoreState {
    registry: Registry,
    index: GenderIndex,
}

impl StoreState {
    fn add(&mut self, person: Person) {
        if let Some(previous) = self.registry.add(person.clone()) {
            self.index.delete(&previous);
        }
        self.index.insert(&person);
    }

    fn remove(&mut self, id: &str) -> StoreResult<Person> {
        let person = self.registry.remove(id)?;
        self.index.delete(&person);
        Ok(person)
    }

    fn candidates(&self, id: &str, n: i64) -> StoreResult<&[PersonKey]> {
        if n <= 0 {
            return Err(StoreError::NotFound);
        }
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        let person = self.registry.get(id)?;
        if person.is_exhausted() {
            return Err(StoreError::NotFound);
        }
        self.index.candidates_for(person, n)
    }

    fn resolve(&self, keys: &[PersonKey]) -> StoreResult<Vec<Person>> {
        keys.iter()
            .map(|key| self.registry.get(&key.id).cloned())
            .collect()
    }

    fn decrease_date_count(&mut self, id: &str) -> StoreResult<Person> {
        let person = self.registry.get_mut(id)?;
        person.decrease_date_count();
        Ok(person.clone())
    }

    fn commit_match(&mut self, id: &str) -> StoreResult<Person> {
        let candidate_id = match self.candidates(id, 1)?.first() {
            Some(key) => key.id.clone(),
            None => return Err(StoreError::NotFound),
        };

        let person = self.decrease_date_count(id)?;
        let matched = self.decrease_date_count(&candidate_id)?;

        for party in [&person, &matched] {
            if party.is_exhausted() {
                self.remove(&party.id)?;
                tracing::debug!("Evicted {} after exhausting their dates", party.id);
            }
        }
        Ok(matched)
    }

    fn is_consistent(&self) -> bool {
        let indexed = [Gender::Male, Gender::Female].into_iter().all(|gender| {
            let index = self.index.for_gender(gender);
            let ordered = index
                .iter()
                .zip(index.iter().skip(1))
                .all(|(a, b)| a < b);
            let resolvable = index.iter().all(|key| {
                self.registry
                    .get(&key.id)
                    .map(|p| p.gender == gender && p.height == key.height)
                    .unwrap_or(false)
            });
            ordered && resolvable
        });
        let total = self.index.for_gender(Gender::Male).len()
            + self.index.for_gender(Gender::Female).len();
        indexed && total == self.registry.len()
    }
}

/// Thread-safe matching store
///
/// Owns the person registry and both height indexes behind one
/// reader-writer lock. Queries share the lock; every mutation, including the
/// whole decrement-and-evict sequence of a match, holds it exclusively, so
/// callers never observe the registry and indexes out of step.
#[derive(Debug, Default)]
pub struct MatchStore {
    state: RwLock<StoreState>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person under `id`
    ///
    /// An existing record with the same id is replaced silently.
    pub fn add(&self, id: impl Into<String>, attributes: PersonAttributes, number_of_wanted_dates: u32) -> Person {
        let person = Person::new(id, attributes, number_of_wanted_dates);
        let mut state = self.state.write();
        state.add(person.clone());
        tracing::debug!(
            "Added {} ({}, {}cm, {} dates)",
            person.id,
            person.gender,
            person.height,
            person.number_of_wanted_dates
        );
        person
    }

    /// Insert a person under a fresh id drawn from `ids`
    pub fn register(&self, ids: &dyn IdGenerator, attributes: PersonAttributes, number_of_wanted_dates: u32) -> Person {
        self.add(ids.generate_key(), attributes, number_of_wanted_dates)
    }

    pub fn get(&self, id: &str) -> StoreResult<Person> {
        self.state.read().registry.get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut state = self.state.write();
        state.remove(id)?;
        tracing::debug!("Removed {}", id);
        Ok(())
    }

    /// Up to `n` candidates for `id`, without consuming any dates
    pub fn possible_matches(&self, id: &str, n: i64) -> StoreResult<Vec<Person>> {
        let state = self.state.read();
        let keys = state.candidates(id, n)?;
        state.resolve(keys)
    }

    /// Match `id` with its best candidate
    ///
    /// Both parties lose one date; anyone left with none is evicted. The
    /// returned record is the candidate as it stood right after the
    /// decrement, so its quota may already be zero.
    pub fn match_person(&self, id: &str) -> StoreResult<Person> {
        let mut state = self.state.write();
        let matched = state.commit_match(id)?;
        tracing::debug!(
            "Matched {} with {} ({} dates left)",
            id,
            matched.id,
            matched.number_of_wanted_dates
        );
        Ok(matched)
    }

    /// People of one gender in index order
    pub fn ordered(&self, gender: Gender) -> Vec<Person> {
        let state = self.state.read();
        state
            .index
            .for_gender(gender)
            .iter()
            .filter_map(|key| state.registry.get(&key.id).ok().cloned())
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        let state = self.state.read();
        StoreStats {
            people: state.registry.len(),
            males: state.index.for_gender(Gender::Male).len(),
            females: state.index.for_gender(Gender::Female).len(),
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().registry.is_empty()
    }

    /// Whether both indexes are sorted and agree one-to-one with the registry
    pub fn is_consistent(&self) -> bool {
        self.state.read().is_consistent()
    }

    pub fn clear(&self) {
        let mut state = self.state.write();
        state.registry.clear();
        state.index.clear();
        tracing::debug!("Store cleared");
    }
}
