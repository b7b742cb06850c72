/// Embedded SQLite Driver
///
/// This module backs the driver interface with rusqlite for local databases.
/// It serves the CLI's local mode and the test suite; network engines
/// implement the same traits out of tree.
///
/// The descriptor's database name is treated as a file path, with
/// `:memory:` opening an in-memory database. Credentials are accepted but
/// ignored, and the engine field is not interpreted.

use crate::core::Result;
use crate::core::db::driver::{ColumnMeta, ResultSet, SqlConnection, SqlDriver};
use crate::core::db::url::{ConnectionDescriptor, Credentials};
use crate::types::{DbType, SqlValue};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use rusqlite::types::ValueRef;

/// Driver for local SQLite databases.
#[derive(Debug, Default)]
pub struct SqliteDriver;

impl SqliteDriver {
    /// Creates the embedded driver.
    pub fn new() -> Self {
        SqliteDriver
    }
}

impl SqlDriver for SqliteDriver {
    fn connect(
        &self,
        descriptor: &ConnectionDescriptor,
        _credentials: &Credentials,
    ) -> Result<Box<dyn SqlConnection>> {
        let conn = if descriptor.database() == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(descriptor.database())?
        };
        Ok(Box::new(SqliteConnection { conn }))
    }
}

/// A live connection to a local SQLite database.
struct SqliteConnection {
    conn: Connection,
}

/// Wraps an already-open rusqlite connection in the driver interface.
///
/// Lets fixtures seed a connection before handing it to the manager.
pub fn wrap_connection(conn: Connection) -> Box<dyn SqlConnection> {
    Box::new(SqliteConnection { conn })
}

impl SqlConnection for SqliteConnection {
    fn query(&self, sql: &str) -> Result<ResultSet> {
        let mut stmt = self.conn.prepare(sql)?;

        // Declared column types drive value coercion below; expression
        // columns have no declared type and report an empty name.
        let columns: Vec<ColumnMeta> = stmt
            .columns()
            .iter()
            .map(|c| ColumnMeta::new(c.name(), c.decl_type().unwrap_or("")))
            .collect();
        let column_count = columns.len();

        let rows = stmt
            .query_map([], |row| {
                let mut values = Vec::with_capacity(column_count);
                for (i, column) in columns.iter().enumerate() {
                    values.push(read_value(row.get_ref(i)?, &column.type_name));
                }
                Ok(values)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ResultSet { columns, rows })
    }
}

/// Reads one raw SQLite value, coercing it by the column's declared type.
///
/// SQLite stores booleans as integers and timestamps as text; the declared
/// type is the only record of the intended kind, so BOOL-typed integers
/// become `Boolean` and DATE/TIME-typed text becomes `Date` when parseable.
fn read_value(raw: ValueRef<'_>, type_name: &str) -> SqlValue {
    let declared = DbType::from_column_type(type_name);
    match raw {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => {
            if declared == DbType::Boolean {
                SqlValue::Boolean(i != 0)
            } else {
                SqlValue::Integer(i)
            }
        }
        ValueRef::Real(r) => SqlValue::Real(r),
        ValueRef::Text(t) => {
            let text = String::from_utf8_lossy(t).to_string();
            if declared == DbType::Date {
                if let Some(timestamp) = parse_timestamp(&text) {
                    return SqlValue::Date(timestamp);
                }
            }
            SqlValue::Text(text)
        }
        ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .or_else(|| {
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
            date.and_hms_opt(0, 0, 0)
        })
}
