//! Storage implementations for the ship store

pub mod in_memory;

pub use in_memory::InMemoryShipStore;
