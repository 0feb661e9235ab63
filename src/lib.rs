//! CVSS v2 base vector library
//!
//! Parses, validates, and scores CVSS (Common Vulnerability Scoring System)
//! version 2 base vectors such as `AV:N/AC:L/Au:N/C:N/I:N/A:P`, deriving the
//! numeric base score and the NVD severity rating from them.
//!
//! All scoring arithmetic uses exact decimal fixed-point representation, so
//! scores match the CVSS v2 guide bit-for-bit at the one-decimal rounding
//! boundary.
//!
//! # Modules
//! - `metrics`: the six base metrics and their weight tables
//! - `grammar`: vector validation, metric extraction, canonical formatting
//! - `vector`: the `BaseVector` value object
//! - `score`: the base-score formula
//! - `severity`: NVD severity classification
//! - `errors`: error taxonomy

// Public modules
pub mod errors;
pub mod grammar;
pub mod metrics;
pub mod score;
pub mod severity;
pub mod vector;

// Library version constant
pub const LIB_VERSION: &str = "0.4.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::grammar::*;
    pub use crate::metrics::*;
    pub use crate::score::*;
    pub use crate::severity::*;
    pub use crate::vector::*;
}
