// Core store exports
pub mod error;
pub mod index;
pub mod registry;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use index::{GenderIndex, HeightIndex, PersonKey};
pub use registry::Registry;
pub use store::MatchStore;
