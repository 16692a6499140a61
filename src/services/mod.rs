// Service exports
pub mod id_generator;

pub use id_generator::{FixedIdGenerator, IdGenerator, SequentialIdGenerator, UuidGenerator};
