//! Vector grammar: validation, metric extraction, canonical formatting
//!
//! The grammar is fixed and non-recursive (six metric groups in exact order,
//! exact separators), so a hand-written character scanner replaces a regex
//! engine. Matching is a *search*: the vector may appear at any offset of the
//! input, so callers wanting strict full-string validity must additionally
//! check length/position themselves. Labels and codes match ASCII
//! case-insensitively.

use crate::errors::ParseError;
use crate::metrics::MetricSet;

/// Default vector prefix used for the canonical form
pub const DEFAULT_PREFIX: &str = "CVSS2#";

/// The six metric groups in vector order: literal label, then the valid codes
/// for the single-letter slot that follows it.
const SLOTS: [(&str, &[u8]); 6] = [
    ("AV:", b"LAN"),
    ("/AC:", b"HML"),
    ("/Au:", b"MSN"),
    ("/C:", b"NPC"),
    ("/I:", b"NPC"),
    ("/A:", b"NPC"),
];

/// Try to match the full grammar starting at `start`, returning the six
/// uppercased codes on success.
fn match_at(bytes: &[u8], start: usize) -> Option<[char; 6]> {
    let mut pos = start;
    let mut codes = ['\0'; 6];

    for (i, (label, valid)) in SLOTS.iter().enumerate() {
        let label = label.as_bytes();
        if bytes.len() < pos + label.len() + 1 {
            return None;
        }
        if !bytes[pos..pos + label.len()].eq_ignore_ascii_case(label) {
            return None;
        }
        pos += label.len();

        let code = bytes[pos].to_ascii_uppercase();
        if !valid.contains(&code) {
            return None;
        }
        codes[i] = code as char;
        pos += 1;
    }

    Some(codes)
}

/// Search the input for the first grammar match
pub(crate) fn search(input: &str) -> Option<MetricSet> {
    let bytes = input.as_bytes();
    for start in 0..bytes.len() {
        if let Some(codes) = match_at(bytes, start) {
            return MetricSet::from_codes(codes);
        }
    }
    None
}

/// Determine whether the input contains a valid CVSS v2 base vector
///
/// Case-insensitive; never errors. Recommended pre-check before the parsing
/// entry points when a boolean is wanted rather than a propagated error.
pub fn is_valid_vector(input: &str) -> bool {
    search(input).is_some()
}

/// Extract the six metric codes from the input
///
/// Fails with [`ParseError::Malformed`] when the grammar matches nowhere.
pub fn extract_metrics(input: &str) -> Result<MetricSet, ParseError> {
    search(input).ok_or_else(|| ParseError::Malformed {
        input: input.to_string(),
    })
}

/// Reconstruct the canonical uppercase form with the given prefix
///
/// The prefix is forced to uppercase but not otherwise validated; callers may
/// pass arbitrary prefixes.
pub fn format_vector(input: &str, prefix: &str) -> Result<String, ParseError> {
    let metrics = extract_metrics(input)?;
    Ok(format!(
        "{}{}",
        prefix.to_uppercase(),
        metrics.to_vector_string()
    ))
}
