/// SQL Driver Interface
///
/// This module defines the synchronous client interface the connection
/// manager delegates to. A driver turns a connection descriptor plus
/// credentials into a live connection; a connection executes a statement and
/// hands back the full result set with column metadata in column order.
///
/// Connections are released by dropping them, so every exit path of a caller
/// releases its resources without explicit cleanup code.

use crate::core::Result;
use crate::core::db::url::{ConnectionDescriptor, Credentials};
use crate::types::SqlValue;

/// Metadata for one result-set column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name as reported by the driver
    pub name: String,
    /// Driver-reported type name; empty when the driver reports none
    pub type_name: String,
}

impl ColumnMeta {
    /// Creates column metadata.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        ColumnMeta {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A fully materialized query result.
///
/// `columns` is in metadata order and every row has exactly one value per
/// column, in the same order.
#[derive(Debug, Clone)]
pub struct ResultSet {
    /// Column metadata in column order
    pub columns: Vec<ColumnMeta>,
    /// Row values, one `Vec<SqlValue>` per row
    pub rows: Vec<Vec<SqlValue>>,
}

/// Factory for database connections.
pub trait SqlDriver {
    /// Opens a connection described by `descriptor`, authenticating with
    /// `credentials`.
    ///
    /// # Errors
    ///
    /// Returns `ConfSnapError::Connection` (or a driver-specific variant)
    /// when the connection cannot be established.
    fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
        credentials: &Credentials,
    ) -> Result<Box<dyn SqlConnection>>;
}

/// A live connection to a database.
///
/// Dropping the connection releases it along with any driver-side statement
/// and result-set resources.
pub trait SqlConnection {
    /// Executes a statement that returns rows.
    fn query(&self, sql: &str) -> Result<ResultSet>;
}
