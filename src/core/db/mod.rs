/// Database Module
///
/// This module provides the database connectivity layer of confsnap,
/// organized into focused submodules:
///
/// - **Descriptors** (`url.rs`): Engine identifiers, connection descriptors,
///   and credentials
/// - **Driver Interface** (`driver.rs`): The synchronous client traits the
///   manager delegates to
/// - **Embedded Driver** (`sqlite.rs`): A rusqlite-backed driver for local
///   databases and tests
/// - **Connection Management** (`connection.rs`): The per-call connectivity
///   check and generic row fetch
///
/// All operations use the standardized `ConfSnapError` type for consistent
/// error propagation. Every call opens exactly one connection scoped to that
/// call; there is no pooling or state shared between calls.
pub mod connection;
pub mod driver;
pub mod sqlite;
pub mod url;

pub use connection::*;
pub use driver::*;
pub use sqlite::*;
pub use url::*;
