// 🏥 DRG Length-of-Stay Billing Engine
// Excess-payment rules for stays beyond the covered maximum LOS, in two
// jurisdictional variants:
//
//   German: excess payment = daily_rate * cost_weight_factor * excess_days
//   Swiss:  payment = (cost_weight + (excess_days + 1) * daily_increment) * base_rate
//
// The Swiss `(excess_days + 1)` multiplier charges the increment for one more
// day than the raw excess. That asymmetry against the German rule is carried
// over verbatim from the billing tables; the tests pin it down so a domain
// review can confirm or correct it.

use serde::{Deserialize, Serialize};

use super::{parse_days, parse_decimal, round2, round4};

// ============================================================================
// GERMAN VARIANT
// ============================================================================

/// Raw form fields for the German DRG calculator. Kept as strings so a single
/// missing or malformed field invalidates the whole computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GermanLosInput {
    /// Contractually covered stay length (days)
    pub max_length_of_stay: String,
    /// Bundesland rate per excess day (EUR)
    pub daily_rate: String,
    /// Multiplier applied to the excess-day payment
    pub cost_weight_factor: String,
    /// Days actually stayed
    pub actual_length_of_stay: String,
}

impl GermanLosInput {
    pub fn new(max_los: &str, daily_rate: &str, factor: &str, actual_los: &str) -> Self {
        GermanLosInput {
            max_length_of_stay: max_los.to_string(),
            daily_rate: daily_rate.to_string(),
            cost_weight_factor: factor.to_string(),
            actual_length_of_stay: actual_los.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GermanLosResult {
    /// Stay is within the covered maximum, no excess payment due
    WithinLimit,

    /// Stay exceeded the maximum; `amount` is rounded to 2 decimals
    Excess { excess_days: i64, amount: f64 },

    /// One or more fields missing or non-numeric; no partial result
    Invalid,
}

impl GermanLosResult {
    /// Result line as shown in the calculator panel.
    pub fn summary(&self) -> String {
        match self {
            GermanLosResult::WithinLimit => "LOS within limit.".to_string(),
            GermanLosResult::Excess { excess_days, amount } => {
                format!("Extended: {} days → {:.2} EUR", excess_days, amount)
            }
            GermanLosResult::Invalid => "Please enter valid numbers".to_string(),
        }
    }
}

/// German DRG excess payment. Pure and deterministic; recomputed on every
/// input change with no debounce.
pub fn compute_german_los(input: &GermanLosInput) -> GermanLosResult {
    let (max_los, daily_rate, factor, actual_los) = match (
        parse_days(&input.max_length_of_stay),
        parse_decimal(&input.daily_rate),
        parse_decimal(&input.cost_weight_factor),
        parse_days(&input.actual_length_of_stay),
    ) {
        (Some(m), Some(r), Some(f), Some(a)) => (m, r, f, a),
        _ => return GermanLosResult::Invalid,
    };

    let excess_days = actual_los - max_los;
    if excess_days <= 0 {
        return GermanLosResult::WithinLimit;
    }

    let amount = round2(daily_rate * factor * excess_days as f64);
    GermanLosResult::Excess { excess_days, amount }
}

// ============================================================================
// SWISS VARIANT
// ============================================================================

/// Raw form fields for the Swiss DRG calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwissLosInput {
    /// Base relative-value unit for the DRG
    pub cost_weight: String,
    /// Contractually covered stay length (days)
    pub max_length_of_stay: String,
    /// CHF per cost-weight unit
    pub base_rate: String,
    /// Cost weight added per excess day
    pub daily_cost_weight_increment: String,
    /// Days actually stayed
    pub actual_length_of_stay: String,
}

impl SwissLosInput {
    pub fn new(
        cost_weight: &str,
        max_los: &str,
        base_rate: &str,
        increment: &str,
        actual_los: &str,
    ) -> Self {
        SwissLosInput {
            cost_weight: cost_weight.to_string(),
            max_length_of_stay: max_los.to_string(),
            base_rate: base_rate.to_string(),
            daily_cost_weight_increment: increment.to_string(),
            actual_length_of_stay: actual_los.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwissLosResult {
    /// Stay within limit; payment is cost_weight * base_rate, 2 decimals
    WithinLimit { base_payment: f64 },

    /// Stay exceeded the maximum. `final_cost_weight` is rounded to 4
    /// decimals, `payment` to 2.
    Excess {
        excess_days: i64,
        final_cost_weight: f64,
        payment: f64,
    },

    /// One or more fields missing or non-numeric
    Invalid,
}

impl SwissLosResult {
    pub fn summary(&self) -> String {
        match self {
            SwissLosResult::WithinLimit { base_payment } => {
                format!("LOS within limit. Payment: {:.2} CHF", base_payment)
            }
            SwissLosResult::Excess {
                excess_days,
                final_cost_weight,
                payment,
            } => format!(
                "Excess days: {}. Final CW: {:.4} → {:.2} CHF",
                excess_days, final_cost_weight, payment
            ),
            SwissLosResult::Invalid => "Please enter valid numbers".to_string(),
        }
    }
}

/// Swiss DRG payment. The excess branch charges the daily increment for
/// `excess_days + 1` days (domain rule, see module header).
pub fn compute_swiss_los(input: &SwissLosInput) -> SwissLosResult {
    let (cost_weight, max_los, base_rate, increment, actual_los) = match (
        parse_decimal(&input.cost_weight),
        parse_days(&input.max_length_of_stay),
        parse_decimal(&input.base_rate),
        parse_decimal(&input.daily_cost_weight_increment),
        parse_days(&input.actual_length_of_stay),
    ) {
        (Some(c), Some(m), Some(r), Some(f), Some(a)) => (c, m, r, f, a),
        _ => return SwissLosResult::Invalid,
    };

    let excess_days = actual_los - max_los;
    if excess_days <= 0 {
        return SwissLosResult::WithinLimit {
            base_payment: round2(cost_weight * base_rate),
        };
    }

    let final_cost_weight = cost_weight + (excess_days + 1) as f64 * increment;
    let payment = final_cost_weight * base_rate;

    SwissLosResult::Excess {
        excess_days,
        final_cost_weight: round4(final_cost_weight),
        payment: round2(payment),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn german(max: &str, rate: &str, factor: &str, actual: &str) -> GermanLosResult {
        compute_german_los(&GermanLosInput::new(max, rate, factor, actual))
    }

    fn swiss(cw: &str, max: &str, rate: &str, inc: &str, actual: &str) -> SwissLosResult {
        compute_swiss_los(&SwissLosInput::new(cw, max, rate, inc, actual))
    }

    #[test]
    fn test_german_within_limit_when_actual_below_max() {
        assert_eq!(german("6", "4206.51", "0.051", "4"), GermanLosResult::WithinLimit);
    }

    #[test]
    fn test_german_within_limit_at_exact_boundary() {
        // excess_days == 0 is still within limit
        assert_eq!(german("6", "4206.51", "0.051", "6"), GermanLosResult::WithinLimit);
    }

    #[test]
    fn test_german_within_limit_regardless_of_rates() {
        // rate/factor values never flip the branch
        for (rate, factor) in [("0", "0"), ("999999", "5.0"), ("-100", "2")] {
            assert_eq!(german("10", rate, factor, "10"), GermanLosResult::WithinLimit);
            assert_eq!(german("10", rate, factor, "3"), GermanLosResult::WithinLimit);
        }
    }

    #[test]
    fn test_german_reference_scenario() {
        // 3 excess days at 4206.51 EUR weighted by 0.051
        let result = german("6", "4206.51", "0.051", "9");
        assert_eq!(
            result,
            GermanLosResult::Excess {
                excess_days: 3,
                amount: 643.60,
            }
        );
        assert_eq!(result.summary(), "Extended: 3 days → 643.60 EUR");
    }

    #[test]
    fn test_german_single_excess_day() {
        // excess == 1 pays exactly rate * factor
        let result = german("6", "4206.51", "0.051", "7");
        assert_eq!(
            result,
            GermanLosResult::Excess {
                excess_days: 1,
                amount: 214.53,
            }
        );
    }

    #[test]
    fn test_german_any_blank_field_is_invalid() {
        let fields = ["6", "4206.51", "0.051", "9"];
        for blank in 0..fields.len() {
            let mut f = fields;
            f[blank] = "";
            assert_eq!(
                german(f[0], f[1], f[2], f[3]),
                GermanLosResult::Invalid,
                "field {} blanked should invalidate",
                blank
            );
        }
    }

    #[test]
    fn test_german_non_numeric_field_is_invalid() {
        assert_eq!(german("6", "abc", "0.051", "9"), GermanLosResult::Invalid);
        assert_eq!(german("six", "4206.51", "0.051", "9"), GermanLosResult::Invalid);
    }

    #[test]
    fn test_german_idempotent() {
        let input = GermanLosInput::new("6", "4206.51", "0.051", "9");
        assert_eq!(compute_german_los(&input), compute_german_los(&input));
    }

    #[test]
    fn test_swiss_within_limit_reference_scenario() {
        let result = swiss("0.977", "6", "13500", "0.153", "6");
        assert_eq!(
            result,
            SwissLosResult::WithinLimit {
                base_payment: 13189.50,
            }
        );
        assert_eq!(result.summary(), "LOS within limit. Payment: 13189.50 CHF");
    }

    #[test]
    fn test_swiss_within_limit_when_actual_below_max() {
        assert_eq!(
            swiss("0.977", "6", "13500", "0.153", "2"),
            SwissLosResult::WithinLimit {
                base_payment: 13189.50,
            }
        );
    }

    #[test]
    fn test_swiss_excess_reference_scenario() {
        // finalCW = 0.977 + (3+1)*0.153 = 1.589, payment = 1.589 * 13500
        let result = swiss("0.977", "6", "13500", "0.153", "9");
        assert_eq!(
            result,
            SwissLosResult::Excess {
                excess_days: 3,
                final_cost_weight: 1.589,
                payment: 21451.50,
            }
        );
        assert_eq!(result.summary(), "Excess days: 3. Final CW: 1.5890 → 21451.50 CHF");
    }

    #[test]
    fn test_swiss_increment_charged_for_excess_plus_one_days() {
        // Domain rule under review: a single excess day charges the increment
        // twice, unlike the German variant which charges it once.
        let result = swiss("0.977", "6", "13500", "0.153", "7");
        match result {
            SwissLosResult::Excess {
                excess_days,
                final_cost_weight,
                ..
            } => {
                assert_eq!(excess_days, 1);
                assert_eq!(final_cost_weight, round4(0.977 + 2.0 * 0.153));
            }
            other => panic!("expected Excess, got {:?}", other),
        }
    }

    #[test]
    fn test_german_increment_charged_for_exactly_excess_days() {
        // Counterpart of the Swiss off-by-one test: German charges excess only
        match german("6", "100", "1.0", "7") {
            GermanLosResult::Excess { excess_days, amount } => {
                assert_eq!(excess_days, 1);
                assert_eq!(amount, 100.0);
            }
            other => panic!("expected Excess, got {:?}", other),
        }
    }

    #[test]
    fn test_swiss_any_blank_field_is_invalid() {
        let fields = ["0.977", "6", "13500", "0.153", "9"];
        for blank in 0..fields.len() {
            let mut f = fields;
            f[blank] = "";
            assert_eq!(
                swiss(f[0], f[1], f[2], f[3], f[4]),
                SwissLosResult::Invalid,
                "field {} blanked should invalidate",
                blank
            );
        }
    }

    #[test]
    fn test_swiss_non_finite_field_is_invalid() {
        assert_eq!(swiss("inf", "6", "13500", "0.153", "9"), SwissLosResult::Invalid);
        assert_eq!(swiss("0.977", "6", "NaN", "0.153", "9"), SwissLosResult::Invalid);
    }

    #[test]
    fn test_swiss_idempotent() {
        let input = SwissLosInput::new("0.977", "6", "13500", "0.153", "9");
        assert_eq!(compute_swiss_los(&input), compute_swiss_los(&input));
    }

    #[test]
    fn test_invalid_summaries() {
        assert_eq!(GermanLosResult::Invalid.summary(), "Please enter valid numbers");
        assert_eq!(SwissLosResult::Invalid.summary(), "Please enter valid numbers");
    }
}
