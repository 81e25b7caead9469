// canon/timestamp.rs — strict timestamp validation and re-emission
//
// Output shape: YYYY-MM-DDTHH:MM:SS.sssZ, sss always exactly 3 digits.
// Validation order matters (spec §4.1.2): UTC suffix, then precision
// shape, then full date-time parse. A variable-precision parser that
// accepts ".1", ".12", ".1234" would silently break cross-implementation
// byte equivalence, so the 3-digit check happens before chrono ever sees
// the string.

use chrono::NaiveDateTime;

use crate::error::HeliosError;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Validate and re-emit a timestamp in canonical form.
pub fn normalize(input: &str) -> Result<String, HeliosError> {
    if !input.ends_with('Z') {
        return Err(HeliosError::TimestampNonUtc);
    }

    let body = &input[..input.len() - 1];
    let dot_pos = body.rfind('.').ok_or(HeliosError::TimestampInvalidPrecision)?;
    let frac = &body[dot_pos + 1..];
    if frac.len() != 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HeliosError::TimestampInvalidPrecision);
    }

    // The fractional shape is confirmed; a failure past this point means
    // the calendar/time components themselves are invalid (e.g. month 13)
    // or there is junk elsewhere in the string. The spec names no separate
    // error for that case, so it is reported under the same precision
    // identifier as the closest-matching rule in its taxonomy.
    let dt = NaiveDateTime::parse_from_str(input, FORMAT)
        .map_err(|_| HeliosError::TimestampInvalidPrecision)?;

    Ok(dt.format(FORMAT).to_string())
}
