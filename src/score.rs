//! CVSS v2 base score formula
//!
//! Pure function over a [`MetricSet`] using exact decimal arithmetic.
//! Binary floating point would drift by 0.1 at formula boundaries, so all
//! terms stay in `rust_decimal` and the final quantization to one decimal
//! place rounds ties away from zero.

use crate::metrics::MetricSet;
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculate the CVSS v2 base score for a metric set
///
/// ```text
/// impact         = 10.41 * (1 - (1-C)*(1-I)*(1-A))
/// f(impact)      = 0 if impact == 0 else 1.176
/// exploitability = 20 * AV * AC * Au
/// base           = round_1dp((0.6*impact + 0.4*exploitability - 1.5) * f(impact))
/// ```
pub fn base_score(metrics: &MetricSet) -> Decimal {
    let one = Decimal::ONE;

    let impact = Decimal::from_str_exact("10.41").unwrap()
        * (one
            - (one - metrics.confidentiality.weight())
                * (one - metrics.integrity.weight())
                * (one - metrics.availability.weight()));

    let f_impact = if impact.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::from_str_exact("1.176").unwrap()
    };

    let exploitability = Decimal::from(20)
        * metrics.access_vector.weight()
        * metrics.access_complexity.weight()
        * metrics.authentication.weight();

    let raw = (Decimal::from_str_exact("0.6").unwrap() * impact
        + Decimal::from_str_exact("0.4").unwrap() * exploitability
        - Decimal::from_str_exact("1.5").unwrap())
        * f_impact;

    raw.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
