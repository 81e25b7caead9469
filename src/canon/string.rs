// canon/string.rs — Unicode NFC normalization of hashed string fields
//
// NFC is applied to input values before serialization, never to already-
// emitted output bytes. Only strings that are part of the hash input are
// ever normalized (category, key, source, relationship key/type, and
// value when it is itself a string) — see spec §4.1.1.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string to Unicode Normalization Form C.
pub fn nfc(input: &str) -> String {
    input.nfc().collect()
}
