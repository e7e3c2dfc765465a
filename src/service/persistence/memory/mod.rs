mod generic;
mod person;

pub use generic::MemoryPersistence;
