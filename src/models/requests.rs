use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Gender, PersonAttributes};

/// Request to register a person and immediately try one match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddPersonRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1, max = 250))]
    pub height: u16,
    pub gender: Gender,
    #[validate(range(min = 1))]
    pub number_of_wanted_dates: u32,
}

impl AddPersonRequest {
    pub fn attributes(&self) -> PersonAttributes {
        PersonAttributes::new(self.name.clone(), self.height, self.gender)
    }
}

/// Query string of the possible-matches endpoint
///
/// `n` stays a raw string so a missing, non-numeric and non-positive value
/// can each be reported with its own message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PossibleMatchesQuery {
    pub n: Option<String>,
}
