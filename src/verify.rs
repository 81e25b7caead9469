// verify.rs — conformance harness
//
// Structurally modeled on tools/scqcs/src/vbw/verify.rs: load a bundle
// (here, a vectors file) off disk, decode each component, compare
// against an expected value, and accumulate a per-item verdict plus an
// overall pass/fail rollup. That file's `Verdict` enum becomes `VerifyResult`
// here since there is no "verified with variance" state for a content hash —
// a vector either reproduces the frozen digest or it does not.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::canon::ingest;
use crate::error::HeliosError;
use crate::hasher;
use crate::model::MemoryObject;

#[derive(Debug, Deserialize)]
struct VectorsFile {
    vectors: Vec<Vector>,
}

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    input: Value,
    expected_content_hash: String,
}

/// Outcome of checking a single vector.
#[derive(Debug, Clone)]
pub struct VerifyResult {
    pub name: String,
    pub expected: String,
    pub got: Option<String>,
    pub pass: bool,
}

/// Load a vectors file and check every entry's input against its
/// frozen `expected_content_hash`.
///
/// Returns the full per-vector result list. A parse error on the
/// vectors file itself (not an individual vector) short-circuits the
/// whole run.
pub fn run_verify(vectors_path: &Path) -> Result<Vec<VerifyResult>, HeliosError> {
    let raw = fs::read_to_string(vectors_path)?;
    let file: VectorsFile = serde_json::from_str(&raw)?;

    let results = file
        .vectors
        .into_iter()
        .map(check_vector)
        .collect::<Vec<_>>();

    Ok(results)
}

fn check_vector(vector: Vector) -> VerifyResult {
    match decode_and_hash(&vector.input) {
        Ok(got) => VerifyResult {
            pass: got == vector.expected_content_hash,
            name: vector.name,
            expected: vector.expected_content_hash,
            got: Some(got),
        },
        Err(_) => VerifyResult {
            name: vector.name,
            expected: vector.expected_content_hash,
            got: None,
            pass: false,
        },
    }
}

fn decode_and_hash(input: &Value) -> Result<String, HeliosError> {
    ingest::validate_document(input)?;
    let obj: MemoryObject = serde_json::from_value(input.clone())?;
    hasher::content_hash(&obj)
}

/// `true` if every result in the list passed.
pub fn all_passed(results: &[VerifyResult]) -> bool {
    results.iter().all(|r| r.pass)
}
