// canon/json.rs — canonical JSON byte emission
//
// This is the wire-compatibility contract: every byte this module emits
// must be byte-identical across implementations for the same logical
// input. Built on `serde_json::Value` with the `arbitrary_precision`
// feature enabled, which preserves a parsed number's original source
// text verbatim (the "number-preserving decode" the spec requires) —
// there is no separate hand-rolled value enum because `Value` already
// is the tagged sum {Null, Bool, Number, String, Array, Object} the
// spec's design notes describe, and `Number` carries integers, floats,
// and arbitrary-precision literals alike.
//
// Sorting object keys is an explicit pre-pass at serialize time, not a
// property relied on from `serde_json::Map`'s storage — this matches
// `tools/scqcs/src/vbw/canonical.rs::write_canonical`.

use serde_json::Value;

use crate::error::HeliosError;

/// Alias for the value universe the canonical serializer accepts.
pub type CanonValue = Value;

/// Serialize a value to its canonical byte sequence.
pub fn canonical_bytes(value: &CanonValue) -> Result<Vec<u8>, HeliosError> {
    let mut out = String::new();
    write_canonical(value, &mut out)?;
    Ok(out.into_bytes())
}

fn write_canonical(value: &Value, out: &mut String) -> Result<(), HeliosError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            // Under `arbitrary_precision`, `Number`'s Display/to_string
            // reproduces the exact source text for JSON-parsed numbers,
            // and serde_json's own shortest-round-trip formatter for
            // numbers built internally (e.g. via `serde_json::json!`).
            out.push_str(&n.to_string());
        }
        Value::String(s) => {
            // serde_json's string escaping already matches §4.1.5 exactly:
            // required escapes plus lowercase `\u00XX` for other control
            // characters, and raw UTF-8 (no `\uXXXX`) for everything else.
            out.push_str(&serde_json::to_string(s)?);
        }
        Value::Array(arr) => {
            out.push('[');
            for (i, v) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(v, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(*key)?);
                out.push(':');
                write_canonical(&map[*key], out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for JSON-compatible values with no floats — integers only,
    /// matching the ingest-validated domain this serializer actually sees.
    fn json_value_no_floats() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ café]{0,40}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::hash_map("[a-z_]{1,10}", inner, 0..8)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn canonical_bytes_never_panics(value in json_value_no_floats()) {
            prop_assert!(canonical_bytes(&value).is_ok());
        }

        #[test]
        fn canonical_bytes_is_deterministic(value in json_value_no_floats()) {
            let a = canonical_bytes(&value).unwrap();
            let b = canonical_bytes(&value).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn canonical_bytes_is_valid_utf8(value in json_value_no_floats()) {
            let bytes = canonical_bytes(&value).unwrap();
            prop_assert!(std::str::from_utf8(&bytes).is_ok());
        }

        #[test]
        fn canonical_bytes_is_idempotent_on_reparse(value in json_value_no_floats()) {
            let once = canonical_bytes(&value).unwrap();
            let reparsed: Value = serde_json::from_slice(&once).unwrap();
            let twice = canonical_bytes(&reparsed).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn flat_object_keys_appear_in_ascending_order(
            map in prop::collection::hash_map("[a-z_]{1,10}", any::<i64>(), 1..8)
        ) {
            let value = Value::Object(
                map.into_iter().map(|(k, v)| (k, serde_json::json!(v))).collect(),
            );
            let s = String::from_utf8(canonical_bytes(&value).unwrap()).unwrap();
            let obj = value.as_object().unwrap();
            let mut expected: Vec<&String> = obj.keys().collect();
            expected.sort();

            let mut positions = Vec::new();
            let mut search_from = 0;
            for key in &expected {
                let quoted = serde_json::to_string(key).unwrap();
                let pos = s[search_from..].find(quoted.as_str()).unwrap() + search_from;
                positions.push(pos);
                search_from = pos + quoted.len();
            }
            let mut sorted_positions = positions.clone();
            sorted_positions.sort();
            prop_assert_eq!(positions, sorted_positions);
        }
    }
}
