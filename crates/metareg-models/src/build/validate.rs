//! Structural validation shared by the builders. Every check fails fast
//! with the first violation found.

use crate::{error::ModelValidationError, spec::AspectSpec};
use metareg_schema::{
    node::{DataSchema, RecordSchema, TyperefSchema, UnionSchema},
    types::{Primitive, SchemaKind},
};

const URN_FIELD_NAME: &str = "urn";
const ASPECTS_FIELD_NAME: &str = "aspects";
const TIMESTAMP_FIELD_NAME: &str = "timestampMillis";

fn schema_label(schema: &DataSchema) -> String {
    schema.name().map_or_else(|| "<anonymous>".to_string(), ToString::to_string)
}

/// Require a record shape, without dereferencing.
pub(crate) fn require_record(
    schema: &DataSchema,
) -> Result<&RecordSchema, ModelValidationError> {
    schema
        .as_record()
        .ok_or_else(|| ModelValidationError::Shape {
            schema: schema_label(schema),
            expected: SchemaKind::Record,
            found: schema.kind(),
        })
}

/// Require that the schema dereferences to a union (registry build input).
pub(crate) fn require_union(schema: &DataSchema) -> Result<&UnionSchema, ModelValidationError> {
    schema
        .dereferenced()
        .as_union()
        .ok_or_else(|| ModelValidationError::Shape {
            schema: schema_label(schema),
            expected: SchemaKind::Union,
            found: schema.dereferenced_kind(),
        })
}

///
/// EntityRecordParts
///
/// Pre-resolved pieces of a structurally valid entity record.
///

pub(crate) struct EntityRecordParts<'a> {
    pub record: &'a RecordSchema,
    pub aspect_typeref: &'a TyperefSchema,
    pub aspect_union: &'a UnionSchema,
}

/// Structural checks on an entity record: `urn: string` and
/// `aspects: array<typeref<union>>`, all after dereferencing.
pub(crate) fn validate_entity_record(
    schema: &DataSchema,
) -> Result<EntityRecordParts<'_>, ModelValidationError> {
    let record = require_record(schema)?;

    let urn_ok = record
        .field(URN_FIELD_NAME)
        .is_some_and(|f| f.ty.dereferenced_kind() == SchemaKind::String);
    if !urn_ok {
        return Err(ModelValidationError::MissingField {
            schema: record.name.clone(),
            field: URN_FIELD_NAME,
            reason: "expected a field of string type".to_string(),
        });
    }

    let Some(aspects) = record.field(ASPECTS_FIELD_NAME) else {
        return Err(aspects_field_error(record));
    };
    let Some(array) = aspects.ty.dereferenced().as_array() else {
        return Err(aspects_field_error(record));
    };

    // The array item must be a typeref wrapping the aspect union.
    let Some(aspect_typeref) = array.items().as_typeref() else {
        return Err(aspects_field_error(record));
    };
    let Some(aspect_union) = array.items().dereferenced().as_union() else {
        return Err(aspects_field_error(record));
    };

    Ok(EntityRecordParts {
        record,
        aspect_typeref,
        aspect_union,
    })
}

fn aspects_field_error(record: &RecordSchema) -> ModelValidationError {
    ModelValidationError::MissingField {
        schema: record.name.clone(),
        field: ASPECTS_FIELD_NAME,
        reason: "expected an array of a type-aliased union".to_string(),
    }
}

/// Key aspects must be serializable as flat identifier components: every
/// field dereferences to String or Enum.
pub(crate) fn validate_key_aspect(
    key_aspect: &AspectSpec,
    entity: &str,
) -> Result<(), ModelValidationError> {
    for field in &key_aspect.record_schema().fields {
        let kind = field.ty.dereferenced_kind();
        if !matches!(kind, SchemaKind::String | SchemaKind::Enum) {
            return Err(ModelValidationError::KeyAspect {
                entity: entity.to_string(),
                reason: format!(
                    "key aspect '{}' field '{}' is {kind}-typed; only String or Enum fields are allowed",
                    key_aspect.name(),
                    field.name,
                ),
            });
        }
    }

    Ok(())
}

/// Timeseries aspects must carry a 64-bit millisecond timestamp field.
pub(crate) fn validate_timeseries(aspect: &AspectSpec) -> Result<(), ModelValidationError> {
    if !aspect.is_timeseries() {
        return Ok(());
    }

    let timestamp_ok = aspect
        .record_schema()
        .field(TIMESTAMP_FIELD_NAME)
        .is_some_and(|f| f.ty.dereferenced() == &DataSchema::Primitive(Primitive::Long));
    if !timestamp_ok {
        return Err(ModelValidationError::MissingField {
            schema: aspect.record_schema().name.clone(),
            field: TIMESTAMP_FIELD_NAME,
            reason: format!(
                "timeseries aspect '{}' requires a 64-bit integer timestamp field",
                aspect.name()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AspectAnnotation, AspectKind};
    use metareg_schema::node::{EnumSchema, RecordField};

    fn aspect_spec(record: RecordSchema, kind: Option<AspectKind>) -> AspectSpec {
        AspectSpec::new(
            AspectAnnotation {
                name: record.name.to_lowercase(),
                kind,
            },
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            record,
        )
    }

    fn entity_record() -> RecordSchema {
        RecordSchema::new("UserSnapshot")
            .with_field(RecordField::new(
                "urn",
                DataSchema::typeref("Urn", DataSchema::string()),
            ))
            .with_field(RecordField::new(
                "aspects",
                DataSchema::array(DataSchema::typeref(
                    "UserAspect",
                    DataSchema::union([DataSchema::Record(RecordSchema::new("UserKey"))]),
                )),
            ))
    }

    #[test]
    fn accepts_a_well_shaped_entity_record() {
        let schema = DataSchema::Record(entity_record());
        assert!(validate_entity_record(&schema).is_ok());
    }

    #[test]
    fn rejects_non_record_input() {
        let schema = DataSchema::string();
        let result = validate_entity_record(&schema);

        assert!(matches!(result, Err(ModelValidationError::Shape { .. })));
    }

    #[test]
    fn rejects_missing_or_mistyped_urn() {
        let mut record = entity_record();
        record.fields[0] = RecordField::new("urn", DataSchema::long());
        let schema = DataSchema::Record(record);
        let result = validate_entity_record(&schema);

        assert!(matches!(
            result,
            Err(ModelValidationError::MissingField { field: "urn", .. })
        ));
    }

    #[test]
    fn rejects_aspects_array_without_typeref_items() {
        let mut record = entity_record();
        record.fields[1] = RecordField::new(
            "aspects",
            DataSchema::array(DataSchema::union([DataSchema::string()])),
        );
        let schema = DataSchema::Record(record);
        let result = validate_entity_record(&schema);

        assert!(matches!(
            result,
            Err(ModelValidationError::MissingField {
                field: "aspects",
                ..
            })
        ));
    }

    #[test]
    fn key_aspect_allows_string_and_enum_fields_only() {
        let good = RecordSchema::new("UserKey")
            .with_field(RecordField::new("username", DataSchema::string()))
            .with_field(RecordField::new(
                "tier",
                DataSchema::Enum(EnumSchema::new("Tier", ["FREE", "PAID"])),
            ));
        assert!(validate_key_aspect(&aspect_spec(good, None), "user").is_ok());

        let bad = RecordSchema::new("UserKey")
            .with_field(RecordField::new("createdAt", DataSchema::long()));
        assert!(matches!(
            validate_key_aspect(&aspect_spec(bad, None), "user"),
            Err(ModelValidationError::KeyAspect { .. })
        ));
    }

    #[test]
    fn timeseries_aspect_requires_long_timestamp() {
        let missing = RecordSchema::new("Profile");
        assert!(matches!(
            validate_timeseries(&aspect_spec(missing, Some(AspectKind::Timeseries))),
            Err(ModelValidationError::MissingField {
                field: "timestampMillis",
                ..
            })
        ));

        let present = RecordSchema::new("Profile").with_field(RecordField::new(
            "timestampMillis",
            DataSchema::typeref("Time", DataSchema::long()),
        ));
        assert!(validate_timeseries(&aspect_spec(present, Some(AspectKind::Timeseries))).is_ok());
    }

    #[test]
    fn non_timeseries_aspect_skips_the_timestamp_check() {
        let record = RecordSchema::new("Profile");
        assert!(validate_timeseries(&aspect_spec(record, None)).is_ok());
    }
}
