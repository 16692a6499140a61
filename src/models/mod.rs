// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, Person, PersonAttributes, StoreStats};
pub use requests::{AddPersonRequest, PossibleMatchesQuery};
pub use responses::{
    AddAndMatchResponse, ErrorResponse, HealthResponse, PersonResponse, PossibleMatchesResponse,
    RemovePersonResponse,
};
