/// Connection Descriptor Module
///
/// This module builds engine-specific connection descriptor strings from
/// host/port/database parameters. Descriptor construction is pure: no
/// network activity happens here, and an unsupported engine fails at
/// construction time rather than at connect time.

use crate::core::{ConfSnapError, Result};
use std::fmt;
use std::str::FromStr;

/// Supported database engines.
///
/// The set is fixed; anything outside it is rejected with
/// `ConfSnapError::UnsupportedEngine` when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// MySQL / MariaDB
    MySql,
    /// PostgreSQL
    PostgreSql,
    /// Microsoft SQL Server
    SqlServer,
}

impl Engine {
    /// Canonical lowercase engine identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::MySql => "mysql",
            Engine::PostgreSql => "postgresql",
            Engine::SqlServer => "sqlserver",
        }
    }
}

impl FromStr for Engine {
    type Err = ConfSnapError;

    /// Parses an engine identifier case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Engine::MySql),
            "postgresql" => Ok(Engine::PostgreSql),
            "sqlserver" => Ok(Engine::SqlServer),
            _ => Err(ConfSnapError::UnsupportedEngine(s.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable description of where a database lives.
///
/// Credentials are deliberately not part of the descriptor; they travel
/// alongside it in [`Credentials`] so descriptor strings can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    engine: Engine,
    host: String,
    port: u16,
    database: String,
}

impl ConnectionDescriptor {
    /// Builds a descriptor, validating the engine identifier.
    ///
    /// # Errors
    ///
    /// Returns `ConfSnapError::UnsupportedEngine` if `engine` is not one of
    /// `mysql`, `postgresql`, or `sqlserver` (matched case-insensitively).
    pub fn new(
        engine: &str,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Result<Self> {
        Ok(ConnectionDescriptor {
            engine: engine.parse()?,
            host: host.into(),
            port,
            database: database.into(),
        })
    }

    /// The database engine.
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// The database host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The database port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Renders the JDBC-style connection descriptor string for this engine.
    ///
    /// Pure string formatting; performs no network activity.
    pub fn url(&self) -> String {
        match self.engine {
            Engine::MySql => format!(
                "jdbc:mysql://{}:{}/{}?serverTimezone=UTC",
                self.host, self.port, self.database
            ),
            Engine::PostgreSql => format!(
                "jdbc:postgresql://{}:{}/{}",
                self.host, self.port, self.database
            ),
            Engine::SqlServer => format!(
                "jdbc:sqlserver://{}:{};databaseName={}",
                self.host, self.port, self.database
            ),
        }
    }
}

/// Credentials passed alongside a descriptor, never embedded in it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Username presented to the engine
    pub username: String,
    /// Password presented to the engine
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    // Redact the password so credentials never leak into logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
