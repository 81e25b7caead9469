// canon/ — canonicalization and normalization primitives
//
// string.rs        — Unicode NFC normalization for hashed string fields
// timestamp.rs      — strict timestamp validation and re-emission
// relationships.rs  — stable sort for relationship records
// json.rs           — canonical JSON byte emission (the wire-compatibility contract)
// ingest.rs         — ingest-side value validation (RULE-001/002/009/010)
//
// Every function here is pure: no I/O, no global state, no wall-clock reads.

pub mod ingest;
pub mod json;
pub mod relationships;
pub mod string;
pub mod timestamp;

pub use json::{canonical_bytes, CanonValue};
