//! The six CVSS v2 base metrics
//!
//! Each metric is a small enum constrained to its single-letter codes,
//! carrying the exact weight the CVSS v2 guide assigns to it. Weights are
//! held as exact decimals (no floating-point approximations) so the scoring
//! formula rounds identically to the reference tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access Vector (AV): how remote an attacker can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessVector {
    /// L: requires local access
    #[serde(rename = "L")]
    Local,
    /// A: requires access to the adjacent network
    #[serde(rename = "A")]
    AdjacentNetwork,
    /// N: remotely exploitable
    #[serde(rename = "N")]
    Network,
}

impl AccessVector {
    /// Parse a single-letter code, case-insensitive
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'L' => Some(AccessVector::Local),
            'A' => Some(AccessVector::AdjacentNetwork),
            'N' => Some(AccessVector::Network),
            _ => None,
        }
    }

    /// Uppercase single-letter code
    pub fn code(&self) -> char {
        match self {
            AccessVector::Local => 'L',
            AccessVector::AdjacentNetwork => 'A',
            AccessVector::Network => 'N',
        }
    }

    /// Weight per the CVSS v2 base equation
    pub fn weight(&self) -> Decimal {
        match self {
            AccessVector::Local => Decimal::from_str_exact("0.395").unwrap(),
            AccessVector::AdjacentNetwork => Decimal::from_str_exact("0.646").unwrap(),
            AccessVector::Network => Decimal::from_str_exact("1.0").unwrap(),
        }
    }
}

/// Access Complexity (AC): difficulty of mounting the attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessComplexity {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
}

impl AccessComplexity {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'H' => Some(AccessComplexity::High),
            'M' => Some(AccessComplexity::Medium),
            'L' => Some(AccessComplexity::Low),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            AccessComplexity::High => 'H',
            AccessComplexity::Medium => 'M',
            AccessComplexity::Low => 'L',
        }
    }

    pub fn weight(&self) -> Decimal {
        match self {
            AccessComplexity::High => Decimal::from_str_exact("0.35").unwrap(),
            AccessComplexity::Medium => Decimal::from_str_exact("0.61").unwrap(),
            AccessComplexity::Low => Decimal::from_str_exact("0.71").unwrap(),
        }
    }
}

/// Authentication (Au): number of times an attacker must authenticate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authentication {
    #[serde(rename = "M")]
    Multiple,
    #[serde(rename = "S")]
    Single,
    #[serde(rename = "N")]
    None,
}

impl Authentication {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Authentication::Multiple),
            'S' => Some(Authentication::Single),
            'N' => Some(Authentication::None),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Authentication::Multiple => 'M',
            Authentication::Single => 'S',
            Authentication::None => 'N',
        }
    }

    pub fn weight(&self) -> Decimal {
        match self {
            Authentication::Multiple => Decimal::from_str_exact("0.45").unwrap(),
            Authentication::Single => Decimal::from_str_exact("0.56").unwrap(),
            Authentication::None => Decimal::from_str_exact("0.704").unwrap(),
        }
    }
}

/// Impact level shared by the Confidentiality (C), Integrity (I), and
/// Availability (A) slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "N")]
    None,
    #[serde(rename = "P")]
    Partial,
    #[serde(rename = "C")]
    Complete,
}

impl Impact {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'N' => Some(Impact::None),
            'P' => Some(Impact::Partial),
            'C' => Some(Impact::Complete),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Impact::None => 'N',
            Impact::Partial => 'P',
            Impact::Complete => 'C',
        }
    }

    pub fn weight(&self) -> Decimal {
        match self {
            Impact::None => Decimal::from_str_exact("0.0").unwrap(),
            Impact::Partial => Decimal::from_str_exact("0.275").unwrap(),
            Impact::Complete => Decimal::from_str_exact("0.660").unwrap(),
        }
    }
}

impl fmt::Display for AccessVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for AccessComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validated aggregate of the six base metrics
///
/// A `MetricSet` only ever holds codes from the valid sets; construction goes
/// through the grammar or through per-slot `from_code` lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricSet {
    pub access_vector: AccessVector,
    pub access_complexity: AccessComplexity,
    pub authentication: Authentication,
    pub confidentiality: Impact,
    pub integrity: Impact,
    pub availability: Impact,
}

impl MetricSet {
    /// Build from the six uppercase codes in vector order (AV, AC, Au, C, I, A)
    ///
    /// Returns None if any code is outside its slot's valid set.
    pub fn from_codes(codes: [char; 6]) -> Option<Self> {
        Some(Self {
            access_vector: AccessVector::from_code(codes[0])?,
            access_complexity: AccessComplexity::from_code(codes[1])?,
            authentication: Authentication::from_code(codes[2])?,
            confidentiality: Impact::from_code(codes[3])?,
            integrity: Impact::from_code(codes[4])?,
            availability: Impact::from_code(codes[5])?,
        })
    }

    /// Unprefixed canonical form: `AV:{x}/AC:{x}/Au:{x}/C:{x}/I:{x}/A:{x}`
    pub fn to_vector_string(&self) -> String {
        format!(
            "AV:{}/AC:{}/Au:{}/C:{}/I:{}/A:{}",
            self.access_vector,
            self.access_complexity,
            self.authentication,
            self.confidentiality,
            self.integrity,
            self.availability
        )
    }
}

impl fmt::Display for MetricSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_vector_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(AccessVector::from_code('n'), Some(AccessVector::Network));
        assert_eq!(AccessVector::from_code('N'), Some(AccessVector::Network));
        assert_eq!(AccessComplexity::from_code('h'), Some(AccessComplexity::High));
        assert_eq!(Authentication::from_code('s'), Some(Authentication::Single));
        assert_eq!(Impact::from_code('p'), Some(Impact::Partial));
    }

    #[test]
    fn test_from_code_rejects_invalid() {
        assert_eq!(AccessVector::from_code('H'), None);
        assert_eq!(AccessComplexity::from_code('N'), None);
        assert_eq!(Authentication::from_code('L'), None);
        assert_eq!(Impact::from_code('H'), None);
        assert_eq!(Impact::from_code('/'), None);
    }

    #[test]
    fn test_weights_match_reference_tables() {
        assert_eq!(
            AccessVector::Local.weight(),
            Decimal::from_str_exact("0.395").unwrap()
        );
        assert_eq!(
            AccessComplexity::Medium.weight(),
            Decimal::from_str_exact("0.61").unwrap()
        );
        assert_eq!(
            Authentication::None.weight(),
            Decimal::from_str_exact("0.704").unwrap()
        );
        assert_eq!(Impact::None.weight(), Decimal::ZERO);
        assert_eq!(
            Impact::Complete.weight(),
            Decimal::from_str_exact("0.660").unwrap()
        );
    }

    #[test]
    fn test_from_codes() {
        let metrics = MetricSet::from_codes(['N', 'L', 'N', 'N', 'I', 'P']);
        assert!(metrics.is_none(), "I is not a valid integrity code");

        let metrics = MetricSet::from_codes(['N', 'L', 'N', 'N', 'N', 'P']).unwrap();
        assert_eq!(metrics.access_vector, AccessVector::Network);
        assert_eq!(metrics.availability, Impact::Partial);
    }

    #[test]
    fn test_vector_string() {
        let metrics = MetricSet::from_codes(['L', 'H', 'S', 'P', 'P', 'N']).unwrap();
        assert_eq!(metrics.to_vector_string(), "AV:L/AC:H/Au:S/C:P/I:P/A:N");
    }

    #[test]
    fn test_metric_serialization() {
        let json = serde_json::to_string(&Impact::Partial).unwrap();
        assert_eq!(json, "\"P\"");

        let deserialized: AccessVector = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(deserialized, AccessVector::AdjacentNetwork);
    }
}
