use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a registered person
///
/// Determines which index a person lives in and which side of the
/// height comparison their candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The gender candidates are drawn from
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive attributes supplied when a person is registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAttributes {
    pub name: String,
    pub height: u16,
    pub gender: Gender,
}

impl PersonAttributes {
    pub fn new(name: impl Into<String>, height: u16, gender: Gender) -> Self {
        Self {
            name: name.into(),
            height,
            gender,
        }
    }
}

/// Canonical record of an active person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub height: u16,
    pub gender: Gender,
    /// Remaining matches before the person is evicted
    pub number_of_wanted_dates: u32,
}

impl Person {
    pub fn new(id: impl Into<String>, attributes: PersonAttributes, number_of_wanted_dates: u32) -> Self {
        Self {
            id: id.into(),
            name: attributes.name,
            height: attributes.height,
            gender: attributes.gender,
            number_of_wanted_dates,
        }
    }

    pub fn attributes(&self) -> PersonAttributes {
        PersonAttributes {
            name: self.name.clone(),
            height: self.height,
            gender: self.gender,
        }
    }

    /// Consume one date from the quota
    pub fn decrease_date_count(&mut self) {
        self.number_of_wanted_dates = self.number_of_wanted_dates.saturating_sub(1);
    }

    pub fn is_exhausted(&self) -> bool {
        self.number_of_wanted_dates == 0
    }
}

/// Snapshot of store occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub people: usize,
    pub males: usize,
    pub females: usize,
}
