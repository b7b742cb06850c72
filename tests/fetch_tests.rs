//! Integration tests for the connection manager over the driver seam.
//!
//! These run entirely against embedded SQLite databases: the in-memory
//! fixture driver for the standard scenarios and a temporary file for the
//! file-backed path.

use confsnap::core::ConfSnapError;
use confsnap::core::db::connection::ConnectionManager;
use confsnap::core::db::sqlite::SqliteDriver;
use confsnap::core::db::url::{ConnectionDescriptor, Credentials};
use confsnap::test_utils::{MemoryDriver, memory_descriptor};
use confsnap::types::{DbType, SqlValue};

#[test]
fn fetch_all_maps_columns_in_order() {
    let manager = ConnectionManager::new(MemoryDriver::with_sample_data());
    let rows = manager
        .fetch_all(&memory_descriptor(), &Credentials::default(), "sessions")
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), 3);

    assert_eq!(row[0].name, "id");
    assert_eq!(row[0].db_type, DbType::Number);
    assert_eq!(row[0].value, SqlValue::Integer(1));

    assert_eq!(row[1].name, "name");
    assert_eq!(row[1].db_type, DbType::Text);
    assert_eq!(row[1].value, SqlValue::Text("Alice".into()));

    assert_eq!(row[2].name, "active");
    assert_eq!(row[2].db_type, DbType::Boolean);
    assert_eq!(row[2].value, SqlValue::Boolean(true));
}

#[test]
fn fetch_all_empty_table_returns_no_rows() {
    let driver = MemoryDriver::with_setup("CREATE TABLE empty_table (id INT, note TEXT);");
    let manager = ConnectionManager::new(driver);
    let rows = manager
        .fetch_all(&memory_descriptor(), &Credentials::default(), "empty_table")
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn fetch_all_null_values_are_preserved() {
    let driver = MemoryDriver::with_setup(
        "
        CREATE TABLE readings (id INT, note TEXT);
        INSERT INTO readings VALUES (1, NULL);
    ",
    );
    let manager = ConnectionManager::new(driver);
    let rows = manager
        .fetch_all(&memory_descriptor(), &Credentials::default(), "readings")
        .unwrap();

    assert!(rows[0][1].value.is_null());
    // Null value, but the column kind still comes from the declared type.
    assert_eq!(rows[0][1].db_type, DbType::Text);
}

#[test]
fn fetch_all_maps_datetime_columns() {
    let driver = MemoryDriver::with_setup(
        "
        CREATE TABLE events (id INT, occurred_at DATETIME);
        INSERT INTO events VALUES (1, '2024-06-15 08:00:00');
    ",
    );
    let manager = ConnectionManager::new(driver);
    let rows = manager
        .fetch_all(&memory_descriptor(), &Credentials::default(), "events")
        .unwrap();

    assert_eq!(rows[0][1].db_type, DbType::Date);
    assert!(matches!(rows[0][1].value, SqlValue::Date(_)));
}

#[test]
fn fetch_all_rejects_non_identifier_table_names() {
    let manager = ConnectionManager::new(MemoryDriver::with_sample_data());
    let result = manager.fetch_all(
        &memory_descriptor(),
        &Credentials::default(),
        "sessions; DROP TABLE sessions",
    );
    assert!(matches!(result, Err(ConfSnapError::Query(_))));
}

#[test]
fn fetch_all_missing_table_fails_with_cause() {
    let manager = ConnectionManager::new(MemoryDriver::with_sample_data());
    let result = manager.fetch_all(&memory_descriptor(), &Credentials::default(), "absent");
    match result {
        Err(ConfSnapError::Query(msg)) => assert!(msg.contains("no such table")),
        _ => panic!("Expected Query error"),
    }
}

#[test]
fn check_connection_reports_boolean_only() {
    let manager = ConnectionManager::new(MemoryDriver::with_sample_data());
    assert!(manager.check_connection(&memory_descriptor(), &Credentials::default()));

    // A file in a directory that does not exist cannot be opened.
    let bad = ConnectionDescriptor::new(
        "postgresql",
        "localhost",
        5432,
        "/nonexistent/dir/confsnap.db",
    )
    .unwrap();
    let manager = ConnectionManager::new(SqliteDriver::new());
    assert!(!manager.check_connection(&bad, &Credentials::default()));
}

#[test]
fn fetch_all_against_file_backed_database() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let path = temp.path().to_str().unwrap().to_string();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE crops (id INT, name VARCHAR(30), yield_ratio DOUBLE);
        INSERT INTO crops VALUES (7, 'wheat', 1.25);
    ",
    )
    .unwrap();
    drop(conn);

    let descriptor = ConnectionDescriptor::new("sqlserver", "localhost", 1433, &path).unwrap();
    let manager = ConnectionManager::new(SqliteDriver::new());
    let rows = manager
        .fetch_all(&descriptor, &Credentials::default(), "crops")
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].value, SqlValue::Integer(7));
    assert_eq!(rows[0][1].value, SqlValue::Text("wheat".into()));
    assert_eq!(rows[0][2].value, SqlValue::Real(1.25));
    assert_eq!(rows[0][2].db_type, DbType::Number);
}
