//! Adapter implementations for port traits
//!
//! - [`memory`] - In-memory task repository

pub mod memory;

pub use memory::InMemoryTaskRepository;
