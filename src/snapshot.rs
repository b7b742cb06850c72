/// Configuration Snapshot Module
///
/// This module turns a configuration value into an ordered sequence of
/// field records. Instead of runtime reflection, every snapshottable type
/// declares a static schema table: an ordered list of field name, semantic
/// type, and reader function. Extraction walks the table and re-reads
/// current values on every call, so nothing is cached between calls.

use crate::core::Result;
use crate::types::{DbType, FieldRecord, NativeType, SqlValue};
use serde::Serialize;
use tracing::warn;

/// One entry in a snapshot schema table.
pub struct FieldSpec<C> {
    /// Field name as it should appear in the record
    pub name: &'static str,
    /// Declared semantic type; determines the record's column kind
    pub native_type: NativeType,
    /// Reads the field's current value. `None` means the field holds no
    /// value; an error means the field is unreadable and gets skipped.
    pub read: fn(&C) -> Result<Option<SqlValue>>,
}

/// Types whose fields can be snapshotted into records.
pub trait Snapshot: Sized {
    /// The schema table, in declaration order.
    fn schema() -> &'static [FieldSpec<Self>];
}

/// Extracts a field record for every readable field of `config`.
///
/// Fields are visited in schema-table order. A field whose reader fails is
/// skipped with a warning diagnostic; the extraction continues and still
/// returns records for every other field. The result is therefore never
/// empty solely because one field was inaccessible.
pub fn extract<C: Snapshot + 'static>(config: &C) -> Vec<FieldRecord> {
    let mut records = Vec::with_capacity(C::schema().len());

    for spec in C::schema() {
        match (spec.read)(config) {
            Ok(value) => records.push(FieldRecord::new(
                spec.name,
                value.unwrap_or(SqlValue::Null),
                DbType::from_native(spec.native_type),
            )),
            Err(e) => {
                warn!("Could not access field {}: {}", spec.name, e);
            }
        }
    }

    records
}

/// Serializes a structured field to JSON bytes for the `Blob` value slot.
///
/// Intended for `NativeType::Composite` readers.
pub fn composite_json<T: Serialize>(value: &T) -> Result<Option<SqlValue>> {
    let bytes = serde_json::to_vec(value)?;
    Ok(Some(SqlValue::Blob(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfSnapError;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Mode {
        Passive,
        Aggressive,
    }

    impl Mode {
        fn as_str(&self) -> &'static str {
            match self {
                Mode::Passive => "Passive",
                Mode::Aggressive => "Aggressive",
            }
        }
    }

    #[derive(Serialize)]
    struct Thresholds {
        low: u32,
        high: u32,
    }

    struct SampleConfig {
        label: String,
        db_port: i64,
        ratio: f64,
        enabled: bool,
        mode: Mode,
        thresholds: Thresholds,
        note: Option<String>,
        broken: bool,
    }

    const SAMPLE_SCHEMA: &[FieldSpec<SampleConfig>] = &[
        FieldSpec {
            name: "label",
            native_type: NativeType::Text,
            read: |c| Ok(Some(SqlValue::Text(c.label.clone()))),
        },
        FieldSpec {
            name: "db_port",
            native_type: NativeType::Integer,
            read: |c| Ok(Some(SqlValue::Integer(c.db_port))),
        },
        FieldSpec {
            name: "ratio",
            native_type: NativeType::Float,
            read: |c| Ok(Some(SqlValue::Real(c.ratio))),
        },
        FieldSpec {
            name: "enabled",
            native_type: NativeType::Boolean,
            read: |c| Ok(Some(SqlValue::Boolean(c.enabled))),
        },
        FieldSpec {
            name: "mode",
            native_type: NativeType::Enum,
            read: |c| Ok(Some(SqlValue::Text(c.mode.as_str().to_string()))),
        },
        FieldSpec {
            name: "thresholds",
            native_type: NativeType::Composite,
            read: |c| composite_json(&c.thresholds),
        },
        FieldSpec {
            name: "note",
            native_type: NativeType::Text,
            read: |c| Ok(c.note.clone().map(SqlValue::Text)),
        },
        FieldSpec {
            name: "broken",
            native_type: NativeType::Boolean,
            read: |c| {
                if c.broken {
                    Err(ConfSnapError::FieldAccess("simulated failure".to_string()))
                } else {
                    Ok(Some(SqlValue::Boolean(false)))
                }
            },
        },
    ];

    impl Snapshot for SampleConfig {
        fn schema() -> &'static [FieldSpec<Self>] {
            SAMPLE_SCHEMA
        }
    }

    fn sample() -> SampleConfig {
        SampleConfig {
            label: "worker".to_string(),
            db_port: 3306,
            ratio: 0.75,
            enabled: true,
            mode: Mode::Aggressive,
            thresholds: Thresholds { low: 1, high: 9 },
            note: None,
            broken: false,
        }
    }

    #[test]
    fn test_extract_maps_native_types() {
        let records = extract(&sample());
        let kinds: Vec<(&str, DbType)> = records
            .iter()
            .map(|r| (r.name.as_str(), r.db_type))
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("label", DbType::Text),
                ("db_port", DbType::Number),
                ("ratio", DbType::Real),
                ("enabled", DbType::Boolean),
                ("mode", DbType::Text),
                ("thresholds", DbType::Blob),
                ("note", DbType::Text),
                ("broken", DbType::Boolean),
            ]
        );
    }

    #[test]
    fn test_extract_reads_current_values() {
        let records = extract(&sample());
        assert_eq!(records[0].value, SqlValue::Text("worker".into()));
        assert_eq!(records[1].value, SqlValue::Integer(3306));
        assert_eq!(records[3].value, SqlValue::Boolean(true));
        assert_eq!(records[4].value, SqlValue::Text("Aggressive".into()));
    }

    #[test]
    fn test_extract_absent_value_is_null() {
        let records = extract(&sample());
        let note = records.iter().find(|r| r.name == "note").unwrap();
        assert!(note.value.is_null());
        // Null value, but the column kind still comes from the field type.
        assert_eq!(note.db_type, DbType::Text);
    }

    #[test]
    fn test_extract_skips_unreadable_field_and_continues() {
        let mut config = sample();
        config.broken = true;

        let records = extract(&config);
        assert_eq!(records.len(), SAMPLE_SCHEMA.len() - 1);
        assert!(records.iter().all(|r| r.name != "broken"));
        // Fields after the declaration point of a failing field would still
        // be present; "broken" is last, so check the preceding ones survive.
        assert!(records.iter().any(|r| r.name == "thresholds"));
    }

    #[test]
    fn test_composite_json_round_trip() {
        let value = composite_json(&Thresholds { low: 2, high: 5 }).unwrap().unwrap();
        match value {
            SqlValue::Blob(bytes) => {
                let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
                assert_eq!(parsed["low"], 2);
                assert_eq!(parsed["high"], 5);
            }
            other => panic!("Expected Blob value, got {:?}", other),
        }
    }
}
