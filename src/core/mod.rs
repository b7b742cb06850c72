/// Core Module for Confsnap
///
/// This module contains the shared infrastructure of the crate: the database
/// connectivity layer (descriptors, driver interface, connection manager)
/// and error handling.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{ConfSnapError, Result};
