//! Error types for vector parsing
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Parse failure surfaced by every parsing entry point
///
/// A vector either fully exists with all six valid metrics or does not exist;
/// there are no partial successes. Callers wanting a boolean pre-check should
/// use [`crate::grammar::is_valid_vector`] instead of matching on this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed CVSS v2 base vector: {input:?}")]
    Malformed { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ParseError::Malformed {
            input: "AV:N/AC:L".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed CVSS v2 base vector: \"AV:N/AC:L\""
        );
    }
}
