//! NVD severity classification
//!
//! The National Vulnerability Database maps the numeric base score onto a
//! three-tier rating with fixed thresholds, inclusive at the lower bound of
//! each band.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NVD vulnerability severity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// 0.0 - 3.9
    Low,
    /// 4.0 - 6.9
    Medium,
    /// 7.0 - 10.0
    High,
}

impl Severity {
    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a base score into its NVD severity rating
pub fn nvd_severity(score: Decimal) -> Severity {
    let medium = Decimal::from_str_exact("4.0").unwrap();
    let high = Decimal::from_str_exact("7.0").unwrap();

    if score < medium {
        Severity::Low
    } else if score < high {
        Severity::Medium
    } else {
        Severity::High
    }
}
