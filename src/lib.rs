//! Date Match - in-memory matching service with per-person date quotas
//!
//! People register with a height, a gender and a number of wanted dates.
//! The [`MatchStore`] keeps them in a registry plus one height-ordered index
//! per gender and pairs them with opposite-gender candidates by height,
//! consuming a date from both parties on every match and evicting anyone
//! who runs out.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{MatchStore, StoreError, StoreResult};
pub use models::{Gender, Person, PersonAttributes, StoreStats};
pub use services::{IdGenerator, UuidGenerator};
