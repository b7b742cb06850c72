/// Shared Type Vocabulary
///
/// This module defines the column-kind enumeration shared by the export and
/// import directions, the dynamic value slot carried in field records, and
/// the two pure mapping functions that tag values with a column kind.

use chrono::NaiveDateTime;
use std::fmt;

/// Simplified database column kinds.
///
/// `Blob` is the explicit catch-all for anything unrecognized, composite,
/// or binary. It is a named variant rather than a silent default so that new
/// kinds must be added deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    /// Character data (CHAR, VARCHAR, TEXT, CLOB)
    Text,
    /// Integer and exact numeric data (INT, NUMERIC, DECIMAL)
    Number,
    /// Floating-point data
    Real,
    /// Boolean data
    Boolean,
    /// Date and time data
    Date,
    /// Binary, composite, or unrecognized data
    Blob,
}

/// Statically-declared semantic type of a configuration field.
///
/// Stands in for runtime reflection: each entry in a snapshot schema table
/// declares what kind of value its reader produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    /// String-like field
    Text,
    /// Integer field (any width)
    Integer,
    /// Floating-point field
    Float,
    /// Boolean field
    Boolean,
    /// Enumerated field, exported by variant name
    Enum,
    /// Structured or otherwise opaque field
    Composite,
}

/// Ordered substring rules for mapping driver-reported column type names.
///
/// The rules are evaluated top to bottom and the first hit wins. The order
/// is behaviorally significant: substrings overlap (a "NUMERIC" column
/// contains "NUM", an "INTERVAL" column contains "INT"), so this must stay
/// a sequential list, never an unordered map.
const COLUMN_TYPE_RULES: &[(&[&str], DbType)] = &[
    (&["CHAR", "TEXT", "CLOB"], DbType::Text),
    (&["INT", "NUM", "DEC", "REAL", "DOUBLE"], DbType::Number),
    (&["BOOL"], DbType::Boolean),
    (&["DATE", "TIME"], DbType::Date),
];

impl DbType {
    /// Maps a configuration field's native type to its column kind.
    ///
    /// Total and deterministic: string-like and enumerated fields become
    /// `Text`, integers `Number`, floats `Real`, booleans `Boolean`, and
    /// everything structured falls through to `Blob`.
    pub fn from_native(native: NativeType) -> DbType {
        match native {
            NativeType::Text => DbType::Text,
            NativeType::Integer => DbType::Number,
            NativeType::Float => DbType::Real,
            NativeType::Boolean => DbType::Boolean,
            NativeType::Enum => DbType::Text,
            NativeType::Composite => DbType::Blob,
        }
    }

    /// Maps a driver-reported column type name to its column kind.
    ///
    /// Matching is case-insensitive substring search over the ordered rule
    /// table; anything no rule claims (including an empty or missing type
    /// name) is `Blob`. Never fails.
    pub fn from_column_type(type_name: &str) -> DbType {
        let upper = type_name.to_ascii_uppercase();
        for (needles, db_type) in COLUMN_TYPE_RULES {
            if needles.iter().any(|needle| upper.contains(needle)) {
                return *db_type;
            }
        }
        DbType::Blob
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DbType::Text => "TEXT",
            DbType::Number => "NUMBER",
            DbType::Real => "REAL",
            DbType::Boolean => "BOOLEAN",
            DbType::Date => "DATE",
            DbType::Blob => "BLOB",
        };
        write!(f, "{}", name)
    }
}

/// Dynamic value slot of a field record.
///
/// `Null` appears only when the originating field or column held no value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Absent value
    Null,
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Real(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Date/time value
    Date(NaiveDateTime),
    /// Binary value
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl fmt::Display for SqlValue {
    /// Renders a value for logs and CLI output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Real(r) => write!(f, "{}", r),
            SqlValue::Text(t) => write!(f, "{}", t),
            SqlValue::Boolean(b) => write!(f, "{}", b),
            SqlValue::Date(d) => write!(f, "{}", d),
            SqlValue::Blob(b) => write!(f, "<BLOB: {} bytes>", b.len()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Boolean(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(value) => value.into(),
            None => SqlValue::Null,
        }
    }
}

/// A named, typed value snapshotted from configuration or read from a
/// result-set column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    /// Field or column name (non-empty)
    pub name: String,
    /// Current value; `Null` if the source held none
    pub value: SqlValue,
    /// Column kind, a pure function of the originating type
    pub db_type: DbType,
}

impl FieldRecord {
    /// Creates a new field record.
    pub fn new(name: impl Into<String>, value: SqlValue, db_type: DbType) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty());
        FieldRecord {
            name,
            value,
            db_type,
        }
    }
}

/// One result row: a field record per column, in column order.
pub type Row = Vec<FieldRecord>;
