// hasher.rs — content-hash pipeline orchestration
//
// Step numbering in both the function body and its comments mirrors
// spec §4.2 and the orchestration style of
// tools/scqcs/src/vbw/build.rs::run_build (a numbered sequence of
// well-named steps, each delegating to a single-purpose helper).

use serde_json::{Map, Value};

use crate::canon;
use crate::canon::relationships::RelationshipRecord;
use crate::error::HeliosError;
use crate::hash;
use crate::model::{HashInput, MemoryObject};

/// Compute the Helios content hash of a memory object.
///
/// Returns a 64-character lowercase hexadecimal SHA-256 digest, or the
/// first normalization/serialization error encountered. Pure: calling
/// this twice on the same input returns the same string, byte for byte.
pub fn content_hash(obj: &MemoryObject) -> Result<String, HeliosError> {
    // 1. Project to the 6-field HashInput. No other field may participate.
    let input = HashInput::from(obj);

    // 2. Normalize created_at.
    let created_at = canon::timestamp::normalize(&input.created_at)?;

    // 3-4. Build the explicit two-key relationship form, then sort it.
    let records: Vec<RelationshipRecord> =
        input.relationships.iter().map(RelationshipRecord::from).collect();
    let sorted = canon::relationships::sort(records);

    // 5. Apply NFC to category, key, source, each relationship key/type,
    //    and value when it is a string.
    let category = canon::string::nfc(&input.category);
    let key = canon::string::nfc(&input.key);
    let source = canon::string::nfc(&input.source);
    let value = normalize_value(input.value);

    let relationships_value: Vec<Value> = sorted
        .into_iter()
        .map(|r| {
            let mut m = Map::new();
            m.insert("key".to_string(), Value::String(canon::string::nfc(&r.key)));
            m.insert(
                "type".to_string(),
                Value::String(canon::string::nfc(&r.r#type)),
            );
            Value::Object(m)
        })
        .collect();

    // 6. Construct the CanonicalFieldMap with exactly 7 keys.
    let mut field_map = Map::new();
    field_map.insert(
        "_helios_schema_version".to_string(),
        Value::String("1".to_string()),
    );
    field_map.insert("category".to_string(), Value::String(category));
    field_map.insert("created_at".to_string(), Value::String(created_at));
    field_map.insert("key".to_string(), Value::String(key));
    field_map.insert("relationships".to_string(), Value::Array(relationships_value));
    field_map.insert("source".to_string(), Value::String(source));
    field_map.insert("value".to_string(), value);

    // 7. Serialize, 8. SHA-256, 9. lowercase hex.
    let bytes = canon::json::canonical_bytes(&Value::Object(field_map))?;
    Ok(hash::sha256_hex(&bytes))
}

/// Apply NFC to `value` if and only if it is a string; leave every other
/// shape (including null) untouched.
fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(canon::string::nfc(&s)),
        other => other,
    }
}
