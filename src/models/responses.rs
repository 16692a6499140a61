use serde::{Deserialize, Serialize};
use crate::models::domain::{Gender, Person, StoreStats};

/// Public view of a person (the quota is not exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub height: u16,
    pub gender: Gender,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            height: person.height,
            gender: person.gender,
        }
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            gender: person.gender,
        }
    }
}

/// Response for add-and-match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAndMatchResponse {
    #[serde(rename = "self")]
    pub person: PersonResponse,
    #[serde(rename = "match")]
    pub matched: Option<PersonResponse>,
}

/// Response for possible-matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PossibleMatchesResponse {
    pub matches: Vec<PersonResponse>,
}

/// Remove person response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePersonResponse {
    pub success: bool,
    pub id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub people: StoreStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
