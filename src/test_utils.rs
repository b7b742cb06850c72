/// Test Utilities Module
///
/// Fixtures for exercising the connection manager through the driver seam
/// without a network. The in-memory driver seeds every connection it opens
/// with a setup batch, so fetches see a populated database even though each
/// call opens a fresh in-memory instance.

use crate::core::Result;
use crate::core::db::driver::{SqlConnection, SqlDriver};
use crate::core::db::sqlite::wrap_connection;
use crate::core::db::url::{ConnectionDescriptor, Credentials};
use rusqlite::Connection;

/// Driver that opens an in-memory database and runs a setup batch on every
/// connection.
pub struct MemoryDriver {
    setup: String,
}

impl MemoryDriver {
    /// Creates a driver that seeds each connection with `setup`.
    pub fn with_setup(setup: impl Into<String>) -> Self {
        MemoryDriver {
            setup: setup.into(),
        }
    }

    /// Creates a driver seeded with the standard sample schema: a `sessions`
    /// table with integer, varchar, and boolean columns and one row
    /// `(1, 'Alice', true)`.
    pub fn with_sample_data() -> Self {
        Self::with_setup(
            "
            CREATE TABLE sessions (
                id INT,
                name VARCHAR(50),
                active BOOLEAN
            );
            INSERT INTO sessions VALUES (1, 'Alice', 1);
        ",
        )
    }
}

impl SqlDriver for MemoryDriver {
    fn connect(
        &self,
        _descriptor: &ConnectionDescriptor,
        _credentials: &Credentials,
    ) -> Result<Box<dyn SqlConnection>> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(&self.setup)?;
        Ok(wrap_connection(conn))
    }
}

/// Standard descriptor for fixture-backed tests.
pub fn memory_descriptor() -> ConnectionDescriptor {
    ConnectionDescriptor::new("mysql", "localhost", 3306, ":memory:")
        .expect("mysql is a supported engine")
}
