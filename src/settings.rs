/// Connection Settings Module
///
/// TOML-backed settings for the database connection: which engine to talk
/// to, where it lives, how to authenticate, and which table to read.
/// The settings type also implements [`Snapshot`] so the application's own
/// configuration state can be exported as field records. Credentials are
/// deliberately absent from the snapshot schema so passwords never leave
/// the process through a snapshot.

use crate::core::{ConfSnapError, Result};
use crate::core::db::url::{ConnectionDescriptor, Credentials};
use crate::snapshot::{FieldSpec, Snapshot};
use crate::types::{NativeType, SqlValue};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection settings parsed from a TOML file.
#[derive(Debug, Deserialize)]
pub struct ConnectionSettings {
    /// Engine identifier: mysql, postgresql, or sqlserver
    pub engine: String,
    /// Database host
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// Username for authentication
    pub db_username: Option<String>,
    /// Password for authentication
    pub db_password: Option<String>,
    /// Table targeted by fetches
    pub table: Option<String>,
}

impl ConnectionSettings {
    /// Builds the validated connection descriptor for these settings.
    pub fn descriptor(&self) -> Result<ConnectionDescriptor> {
        ConnectionDescriptor::new(&self.engine, &self.db_host, self.db_port, &self.db_name)
    }

    /// Builds the credential pair, empty strings when unset.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.db_username.clone().unwrap_or_default(),
            self.db_password.clone().unwrap_or_default(),
        )
    }
}

/// Snapshot schema for the connection settings themselves.
///
/// db_username and db_password are intentionally not listed.
const SETTINGS_SCHEMA: &[FieldSpec<ConnectionSettings>] = &[
    FieldSpec {
        name: "engine",
        native_type: NativeType::Text,
        read: |s| Ok(Some(SqlValue::Text(s.engine.clone()))),
    },
    FieldSpec {
        name: "db_host",
        native_type: NativeType::Text,
        read: |s| Ok(Some(SqlValue::Text(s.db_host.clone()))),
    },
    FieldSpec {
        name: "db_port",
        native_type: NativeType::Integer,
        read: |s| Ok(Some(SqlValue::Integer(i64::from(s.db_port)))),
    },
    FieldSpec {
        name: "db_name",
        native_type: NativeType::Text,
        read: |s| Ok(Some(SqlValue::Text(s.db_name.clone()))),
    },
    FieldSpec {
        name: "table",
        native_type: NativeType::Text,
        read: |s| Ok(s.table.clone().map(SqlValue::Text)),
    },
];

impl Snapshot for ConnectionSettings {
    fn schema() -> &'static [FieldSpec<Self>] {
        SETTINGS_SCHEMA
    }
}

/// Loads connection settings from a TOML file at the given path.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ConnectionSettings> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfSnapError::Config(e.to_string()))
}
