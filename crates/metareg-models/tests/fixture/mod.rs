//! Shared snapshot fixtures for the integration suites.

#![allow(dead_code)]

use metareg_models::prelude::*;
use serde_json::json;

/// Plain aspect record carrying only an @Aspect annotation.
pub fn aspect(record_name: &str, aspect_name: &str) -> RecordSchema {
    RecordSchema::new(record_name).with_property("Aspect", json!({ "name": aspect_name }))
}

/// Key aspect with the given string-typed identifier fields.
pub fn key_aspect(record_name: &str, aspect_name: &str, fields: &[&str]) -> RecordSchema {
    let mut record = aspect(record_name, aspect_name);
    for field in fields {
        record = record.with_field(RecordField::new(*field, DataSchema::string()));
    }

    record
}

/// Entity snapshot record: `urn: typeref<string>` plus
/// `aspects: array<typeref<union<...>>>` and an @Entity annotation.
pub fn snapshot(
    record_name: &str,
    entity_name: &str,
    key_aspect_name: &str,
    aspects: impl IntoIterator<Item = RecordSchema>,
) -> DataSchema {
    let members = aspects.into_iter().map(DataSchema::Record);

    DataSchema::Record(
        RecordSchema::new(record_name)
            .with_property(
                "Entity",
                json!({ "name": entity_name, "keyAspect": key_aspect_name }),
            )
            .with_field(RecordField::new(
                "urn",
                DataSchema::typeref("Urn", DataSchema::string()),
            ))
            .with_field(RecordField::new(
                "aspects",
                DataSchema::array(DataSchema::typeref(
                    format!("{record_name}Aspects"),
                    DataSchema::union(members),
                )),
            )),
    )
}

/// Union of entity snapshots, wrapped in a typeref as registries declare it.
pub fn snapshot_union(snapshots: impl IntoIterator<Item = DataSchema>) -> DataSchema {
    DataSchema::typeref("Snapshot", DataSchema::union(snapshots))
}
