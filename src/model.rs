// model.rs — the logical memory object, its hash-input projection, and
// the relationship record.
//
// Field doc comments follow tools/scqcs/src/vbw/model.rs's density: one
// line per field, noting hashed/not-hashed status since that boundary is
// the single most important invariant in this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canon::relationships::RelationshipRecord;

/// A logical memory object. Eleven fields: six are part of the content
/// hash (see `HashInput`), five are purely operational metadata and are
/// never visible to the hasher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryObject {
    /// Hashed.
    pub category: String,
    /// Hashed. Must be a canonical timestamp (§4.1.2) by the time it
    /// reaches the hasher; the hasher itself performs the normalization.
    pub created_at: String,
    /// Hashed.
    pub key: String,
    /// Hashed after sort. An empty array is a legitimate, stable value —
    /// distinct from the field being absent.
    pub relationships: Vec<Relationship>,
    /// Hashed.
    pub source: String,
    /// Hashed. May be `null`; that is a real, intentional value distinct
    /// from the field being missing.
    pub value: Value,

    /// NOT hashed. Purely operational bookkeeping.
    pub updated_at: String,
    /// NOT hashed.
    pub version: i64,
    /// NOT hashed.
    pub access_count: i64,
    /// NOT hashed.
    pub last_accessed: String,
    /// NOT hashed.
    pub confidence: f64,
}

/// `{ key, type }`. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub key: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl From<&Relationship> for RelationshipRecord {
    fn from(r: &Relationship) -> Self {
        RelationshipRecord {
            key: r.key.clone(),
            r#type: r.r#type.clone(),
        }
    }
}

/// The 6-field projection that actually reaches the hasher. Constructing
/// a `HashInput` from a `MemoryObject` is the only way to produce one —
/// there is no path by which `updated_at`, `version`, `access_count`,
/// `last_accessed`, or `confidence` can participate in a hash.
#[derive(Debug, Clone)]
pub struct HashInput {
    pub category: String,
    pub created_at: String,
    pub key: String,
    pub relationships: Vec<Relationship>,
    pub source: String,
    pub value: Value,
}

impl From<&MemoryObject> for HashInput {
    fn from(obj: &MemoryObject) -> Self {
        HashInput {
            category: obj.category.clone(),
            created_at: obj.created_at.clone(),
            key: obj.key.clone(),
            relationships: obj.relationships.clone(),
            source: obj.source.clone(),
            value: obj.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryObject {
        MemoryObject {
            category: "project".to_string(),
            created_at: "2025-01-15T10:30:00.000Z".to_string(),
            key: "test/basic_memory".to_string(),
            relationships: vec![Relationship {
                key: "project/helios".to_string(),
                r#type: "related_to".to_string(),
            }],
            source: "user".to_string(),
            value: Value::String("This is a test memory for hash verification.".to_string()),
            updated_at: "2025-06-01T00:00:00.000Z".to_string(),
            version: 3,
            access_count: 7,
            last_accessed: "2025-06-01T00:00:00.000Z".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn hash_input_carries_only_six_fields() {
        let obj = sample();
        let input = HashInput::from(&obj);
        assert_eq!(input.category, obj.category);
        assert_eq!(input.created_at, obj.created_at);
        assert_eq!(input.key, obj.key);
        assert_eq!(input.relationships, obj.relationships);
        assert_eq!(input.source, obj.source);
        assert_eq!(input.value, obj.value);
    }

    #[test]
    fn differing_non_hashed_fields_produce_identical_hash_input() {
        let mut a = sample();
        let mut b = sample();
        a.version = 1;
        b.version = 999;
        a.confidence = 0.1;
        b.confidence = 0.99;
        a.access_count = 0;
        b.access_count = 5000;
        let ia = HashInput::from(&a);
        let ib = HashInput::from(&b);
        assert_eq!(ia.category, ib.category);
        assert_eq!(ia.created_at, ib.created_at);
        assert_eq!(ia.key, ib.key);
        assert_eq!(ia.relationships, ib.relationships);
        assert_eq!(ia.source, ib.source);
        assert_eq!(ia.value, ib.value);
    }

    #[test]
    fn relationship_converts_to_record() {
        let r = Relationship {
            key: "a".to_string(),
            r#type: "b".to_string(),
        };
        let rec = RelationshipRecord::from(&r);
        assert_eq!(rec.key, "a");
        assert_eq!(rec.r#type, "b");
    }

    #[test]
    fn memory_object_round_trips_through_json() {
        let obj = sample();
        let json = serde_json::to_string(&obj).unwrap();
        let back: MemoryObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, obj.category);
        assert_eq!(back.value, obj.value);
    }
}
