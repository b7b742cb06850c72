/// Connection Management Module
///
/// This module provides the per-call connectivity check and the generic
/// "fetch all rows" query. Each call opens exactly one connection scoped to
/// that call; dropping the connection releases it on every exit path, so no
/// error can leave a dangling open resource.

use crate::core::{ConfSnapError, Result};
use crate::core::db::driver::SqlDriver;
use crate::core::db::url::{ConnectionDescriptor, Credentials};
use crate::types::{DbType, FieldRecord, Row};
use tracing::{error, info};

/// Connection manager for database operations.
///
/// Generic over the driver so the same fetch logic runs against any engine
/// backend (or an in-memory one under test).
#[derive(Debug)]
pub struct ConnectionManager<D: SqlDriver> {
    driver: D,
}

impl<D: SqlDriver> ConnectionManager<D> {
    /// Creates a manager backed by the given driver.
    pub fn new(driver: D) -> Self {
        ConnectionManager { driver }
    }

    /// Checks whether a connection to the described database can be
    /// established.
    ///
    /// Opens one connection and drops it immediately. On success logs a
    /// notice and returns true; on failure logs the underlying error and
    /// returns false. Never propagates an error to the caller.
    pub fn check_connection(
        &self,
        descriptor: &ConnectionDescriptor,
        credentials: &Credentials,
    ) -> bool {
        match self.driver.connect(descriptor, credentials) {
            Ok(_connection) => {
                info!(
                    "Connection successful to {} database at {}:{}",
                    descriptor.engine(),
                    descriptor.host(),
                    descriptor.port()
                );
                true
            }
            Err(e) => {
                error!("Connection failed: {}", e);
                false
            }
        }
    }

    /// Fetches every row of `table` as a sequence of field records.
    ///
    /// Opens one connection, executes `SELECT * FROM {table}`, and walks the
    /// result columns in metadata order, tagging each value with the column
    /// kind derived from the driver-reported type name. Connection,
    /// statement, and result set are released on every path.
    ///
    /// # Errors
    ///
    /// Returns `ConfSnapError::Query` carrying the cause if the table name
    /// is not a plain identifier, the connection cannot be opened, or the
    /// query fails.
    pub fn fetch_all(
        &self,
        descriptor: &ConnectionDescriptor,
        credentials: &Credentials,
        table: &str,
    ) -> Result<Vec<Row>> {
        validate_table_name(table)?;

        let connection = self
            .driver
            .connect(descriptor, credentials)
            .map_err(|e| ConfSnapError::Query(format!("Failed to open connection: {}", e)))?;

        let result = connection
            .query(&format!("SELECT * FROM {}", table))
            .map_err(|e| ConfSnapError::Query(format!("Query execution failed: {}", e)))?;

        let rows = result
            .rows
            .into_iter()
            .map(|values| {
                result
                    .columns
                    .iter()
                    .zip(values)
                    .map(|(column, value)| {
                        FieldRecord::new(
                            column.name.clone(),
                            value,
                            DbType::from_column_type(&column.type_name),
                        )
                    })
                    .collect()
            })
            .collect();

        Ok(rows)
    }
}

/// Rejects table names that are not plain identifiers.
///
/// The table name is interpolated into the statement, so only
/// `[A-Za-z0-9_.]` names are accepted.
fn validate_table_name(table: &str) -> Result<()> {
    let valid = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(ConfSnapError::Query(format!(
            "Invalid table name: {:?}",
            table
        )))
    }
}
