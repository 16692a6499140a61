use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh person identifiers
pub trait IdGenerator: Send + Sync {
    fn generate_key(&self) -> String;
}

/// Random v4 UUIDs, used by the running service
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_key(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Always hands out the same id
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate_key(&self) -> String {
        self.id.clone()
    }
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_key(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
