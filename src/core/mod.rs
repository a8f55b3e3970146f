//! Core domain logic for taskflow
//!
//! This module contains pure business logic with no I/O dependencies.
//! All storage interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, TaskStatus, Priority, TaskStats)
//! - `services/` - Status machine and task service
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Domain error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{TaskError, TaskResult};
