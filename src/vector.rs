//! The `BaseVector` value object
//!
//! An immutable aggregate of the six validated base metrics plus its
//! canonical string form. Vectors either fully exist with all six valid
//! metrics or fail construction with [`ParseError::Malformed`]; derived
//! values (score, severity) are recomputed on demand, never cached.

use crate::errors::ParseError;
use crate::grammar::{self, DEFAULT_PREFIX};
use crate::metrics::{AccessComplexity, AccessVector, Authentication, Impact, MetricSet};
use crate::score;
use crate::severity::{nvd_severity, Severity};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated CVSS v2 base vector
///
/// Equality is structural on the canonical form, so two vectors parsed from
/// differently-cased or differently-prefixed inputs compare equal.
#[derive(Debug, Clone)]
pub struct BaseVector {
    metrics: MetricSet,
    canonical: String,
}

impl BaseVector {
    /// Parse a base vector from a string
    ///
    /// The grammar is searched anywhere in the input, case-insensitive.
    /// Fails with [`ParseError::Malformed`] when no match is found.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let metrics = grammar::extract_metrics(input)?;
        Ok(Self::from_metric_set(metrics))
    }

    /// Parse a base vector, accepting a display prefix
    ///
    /// The prefix argument exists for signature compatibility with
    /// [`grammar::format_vector`]; the stored canonical form always uses
    /// [`DEFAULT_PREFIX`], matching the original behavior.
    pub fn parse_with_prefix(input: &str, _prefix: &str) -> Result<Self, ParseError> {
        Self::parse(input)
    }

    /// Build directly from an already-validated metric set
    pub fn from_metric_set(metrics: MetricSet) -> Self {
        let canonical = format!("{}{}", DEFAULT_PREFIX, metrics.to_vector_string());
        Self { metrics, canonical }
    }

    /// Canonical uppercase form, `CVSS2#`-prefixed
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The six validated metrics
    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    /// Access Vector (AV)
    pub fn access_vector(&self) -> AccessVector {
        self.metrics.access_vector
    }

    /// Access Complexity (AC)
    pub fn access_complexity(&self) -> AccessComplexity {
        self.metrics.access_complexity
    }

    /// Authentication (Au)
    pub fn authentication(&self) -> Authentication {
        self.metrics.authentication
    }

    /// Confidentiality Impact (C)
    pub fn confidentiality(&self) -> Impact {
        self.metrics.confidentiality
    }

    /// Integrity Impact (I)
    pub fn integrity(&self) -> Impact {
        self.metrics.integrity
    }

    /// Availability Impact (A)
    pub fn availability(&self) -> Impact {
        self.metrics.availability
    }

    /// Whether the vulnerability is purely denial-of-service
    ///
    /// For PCI ASV use: true iff confidentiality and integrity impact are
    /// None while availability impact is not.
    pub fn is_purely_denial_of_service(&self) -> bool {
        self.metrics.confidentiality == Impact::None
            && self.metrics.integrity == Impact::None
            && self.metrics.availability != Impact::None
    }

    /// Calculate the CVSS v2 base score
    pub fn base_score(&self) -> Decimal {
        score::base_score(&self.metrics)
    }

    /// NVD severity rating for the base score
    pub fn severity(&self) -> Severity {
        nvd_severity(self.base_score())
    }
}

impl PartialEq for BaseVector {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for BaseVector {}

impl fmt::Display for BaseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl Serialize for BaseVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for BaseVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BaseVector::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Build a vector from six discrete metric values
///
/// Arguments follow vector order (av, ac, au, c, i, a). Only the first
/// character of each argument is significant and is uppercased before being
/// substituted into the canonical template, so whole words such as "Network"
/// are accepted. Fails with [`ParseError::Malformed`] if any first character
/// is outside its slot's valid set.
pub fn vector_from_metrics(
    av: &str,
    ac: &str,
    au: &str,
    c: &str,
    i: &str,
    a: &str,
) -> Result<BaseVector, ParseError> {
    let assembled = format!(
        "AV:{}/AC:{}/Au:{}/C:{}/I:{}/A:{}",
        first_code(av),
        first_code(ac),
        first_code(au),
        first_code(c),
        first_code(i),
        first_code(a)
    );
    BaseVector::parse(&assembled)
}

/// [`vector_from_metrics`] with a display prefix
///
/// The prefix is accepted for signature compatibility; the constructed
/// vector's canonical form always uses [`DEFAULT_PREFIX`].
pub fn vector_from_metrics_with_prefix(
    av: &str,
    ac: &str,
    au: &str,
    c: &str,
    i: &str,
    a: &str,
    _prefix: &str,
) -> Result<BaseVector, ParseError> {
    vector_from_metrics(av, ac, au, c, i, a)
}

/// First character of a metric argument, uppercased; a blank for empty input
/// so that parsing fails with the assembled string in the error.
fn first_code(value: &str) -> char {
    value
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(' ')
}
