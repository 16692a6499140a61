use crate::core::error::{StoreError, StoreResult};
use crate::models::{Gender, Person};

/// Handle of a person inside a height index
///
/// Field order matters: the derived `Ord` sorts by height first and breaks
/// ties on the id, which is the ordering every index operation relies on.
/// The handle resolves back to the canonical record through the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonKey {
    pub height: u16,
    pub id: String,
}

impl PersonKey {
    pub fn new(height: u16, id: impl Into<String>) -> Self {
        Self {
            height,
            id: id.into(),
        }
    }
}

impl From<&Person> for PersonKey {
    fn from(person: &Person) -> Self {
        Self::new(person.height, person.id.clone())
    }
}

/// People of one gender, sorted by (height, id) ascending
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    entries: Vec<PersonKey>,
}

impl HeightIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splice a handle in at its sorted position
    ///
    /// Returns false if the exact handle is already present.
    pub fn insert(&mut self, key: PersonKey) -> bool {
        match self.entries.binary_search(&key) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(pos, key);
                true
            }
        }
    }

    /// Remove a handle; deleting an absent handle is a no-op
    pub fn delete(&mut self, key: &PersonKey) -> bool {
        match self.entries.binary_search(key) {
            Ok(pos) => {
                self.entries.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Up to `n` handles strictly taller than `height`, nearest first
    pub fn query_taller_than(&self, height: u16, n: usize) -> StoreResult<&[PersonKey]> {
        let start = self.first_taller_than(height);
        if start >= self.entries.len() {
            return Err(StoreError::NotFound);
        }
        let end = start + n.min(self.entries.len() - start);
        Ok(&self.entries[start..end])
    }

    /// Up to `n` handles no taller than `height`, shortest overall first
    ///
    /// Unlike [`query_taller_than`](Self::query_taller_than) this takes from the
    /// front of the index, not from the entries closest to `height`.
    pub fn query_shorter_or_equal(&self, height: u16, n: usize) -> &[PersonKey] {
        let end = self.first_taller_than(height).min(n);
        &self.entries[..end]
    }

    fn first_taller_than(&self, height: u16) -> usize {
        self.entries.partition_point(|key| key.height <= height)
    }

    pub fn contains(&self, key: &PersonKey) -> bool {
        self.entries.binary_search(key).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonKey> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The two per-gender height indexes
#[derive(Debug, Clone, Default)]
pub struct GenderIndex {
    males: HeightIndex,
    females: HeightIndex,
}

impl GenderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_gender(&self, gender: Gender) -> &HeightIndex {
        match gender {
            Gender::Male => &self.males,
            Gender::Female => &self.females,
        }
    }

    fn for_gender_mut(&mut self, gender: Gender) -> &mut HeightIndex {
        match gender {
            Gender::Male => &mut self.males,
            Gender::Female => &mut self.females,
        }
    }

    pub fn insert(&mut self, person: &Person) -> bool {
        self.for_gender_mut(person.gender).insert(PersonKey::from(person))
    }

    pub fn delete(&mut self, person: &Person) -> bool {
        self.for_gender_mut(person.gender).delete(&PersonKey::from(person))
    }

    /// Candidate handles for `person`, bounded by `n`
    ///
    /// Women are offered the nearest taller men; men are offered the
    /// shortest women no taller than themselves.
    pub fn candidates_for(&self, person: &Person, n: usize) -> StoreResult<&[PersonKey]> {
        let pool = self.for_gender(person.gender.opposite());
        let found = match person.gender {
            Gender::Female => pool.query_taller_than(person.height, n)?,
            Gender::Male => pool.query_shorter_or_equal(person.height, n),
        };
        if found.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(found)
    }

    pub fn clear(&mut self) {
        self.males.clear();
        self.females.clear();
    }
}
