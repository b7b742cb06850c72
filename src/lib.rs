// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod settings;
pub mod snapshot;
pub mod test_utils;
pub mod types;
