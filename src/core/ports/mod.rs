//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between core business logic and
//! storage. Implementations live in the `adapters` module.

mod task_repo;

pub use task_repo::TaskRepository;
