// canon/ingest.rs — ingest-side value validation (RULE-001, 002, 009, 010)
//
// Applied to a value decoded from external JSON, before a MemoryObject is
// built from it. Generalizes the float-rejection recursive walk in
// momentum-sez-stack's `msez-core::canonical::coerce_json_value` to the
// four ingest rules this spec names.
//
// Scope: only the 6 fields that feed the hash (category, created_at, key,
// relationships, source, value) are walked. The other 5 fields
// (updated_at, version, access_count, last_accessed, confidence) are
// operational metadata invisible to the hasher (spec §3) and are never
// inspected here — `confidence` in particular is a float by definition,
// and RULE-002 must not reject it.
//
// Open question resolution (see DESIGN.md): RULE-010 (null prohibition)
// does not reject a bare top-level `value: null` — the hasher treats
// `value == null` as an intentional, hashable state (test vector
// `null_value`). Every other null, anywhere in a hashed field including
// nested inside a non-null `value`, is rejected.

use serde_json::Value;

use crate::error::HeliosError;

/// The 6 fields that participate in the hash (spec §3's `HashInput`).
/// Ingest validation is scoped to exactly these; everything else in the
/// document is operational metadata the hasher never sees.
const HASHED_FIELDS: [&str; 6] = [
    "category",
    "created_at",
    "key",
    "relationships",
    "source",
    "value",
];

/// Validate a fully decoded memory-object JSON document before it is
/// projected into a `MemoryObject`.
///
/// `root` is the top-level JSON object. Schema version is checked first
/// (RULE-001), then each of the 6 hashed fields present is walked
/// recursively for null/float/integer-range violations, with `value`
/// exempted from the top-level null check only. Non-hashed fields
/// (`confidence` and friends) are never visited.
pub fn validate_document(root: &Value) -> Result<(), HeliosError> {
    let obj = root.as_object().ok_or(HeliosError::SchemaVersionMissing)?;

    match obj.get("_helios_schema_version") {
        None => return Err(HeliosError::SchemaVersionMissing),
        Some(Value::String(v)) if v == "1" => {}
        Some(_) => return Err(HeliosError::SchemaVersionInvalid),
    }

    for field in HASHED_FIELDS {
        let Some(val) = obj.get(field) else {
            continue;
        };
        if field == "value" {
            validate_value_field(val)?;
        } else {
            validate_recursive(val)?;
        }
    }

    Ok(())
}

/// Validate the `value` field: a bare top-level null is allowed, but any
/// null nested underneath a non-null container is still rejected.
fn validate_value_field(val: &Value) -> Result<(), HeliosError> {
    match val {
        Value::Null => Ok(()),
        Value::Array(arr) => {
            for item in arr {
                validate_recursive(item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            for v in map.values() {
                validate_recursive(v)?;
            }
            Ok(())
        }
        other => validate_scalar(other),
    }
}

/// Validate any value, including nulls, recursively. Used for every field
/// other than the top-level `value`.
fn validate_recursive(val: &Value) -> Result<(), HeliosError> {
    match val {
        Value::Null => Err(HeliosError::NullProhibited),
        Value::Array(arr) => {
            for item in arr {
                validate_recursive(item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            for v in map.values() {
                validate_recursive(v)?;
            }
            Ok(())
        }
        other => validate_scalar(other),
    }
}

fn validate_scalar(val: &Value) -> Result<(), HeliosError> {
    match val {
        Value::Number(n) => validate_number(n),
        _ => Ok(()),
    }
}

fn validate_number(n: &serde_json::Number) -> Result<(), HeliosError> {
    let text = n.to_string();
    if text.contains('.') || text.contains('e') || text.contains('E') {
        return Err(HeliosError::FloatProhibited);
    }
    match text.parse::<i64>() {
        Ok(_) => Ok(()),
        Err(_) => Err(HeliosError::IntegerOutOfRange),
    }
}
