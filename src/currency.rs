// 💱 Currency Converter - the only networked component in the portal
// One outbound GET per conversion, no retry, no cancellation, no timeout
// policy beyond the client default. A failed or incomplete response surfaces
// only as a display string in the result.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculators::round2;

// ============================================================================
// CURRENCY DIRECTORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Currencies offered by the converter page.
pub const CURRENCIES: [Currency; 10] = [
    Currency { code: "USD", name: "US Dollar", flag: "🇺🇸" },
    Currency { code: "EUR", name: "Euro", flag: "🇪🇺" },
    Currency { code: "GBP", name: "British Pound", flag: "🇬🇧" },
    Currency { code: "CHF", name: "Swiss Franc", flag: "🇨🇭" },
    Currency { code: "CAD", name: "Canadian Dollar", flag: "🇨🇦" },
    Currency { code: "AUD", name: "Australian Dollar", flag: "🇦🇺" },
    Currency { code: "JPY", name: "Japanese Yen", flag: "🇯🇵" },
    Currency { code: "CNY", name: "Chinese Yuan", flag: "🇨🇳" },
    Currency { code: "INR", name: "Indian Rupee", flag: "🇮🇳" },
    Currency { code: "BRL", name: "Brazilian Real", flag: "🇧🇷" },
];

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

// ============================================================================
// RATE SOURCE
// ============================================================================

/// Rate table as returned by the provider: `{ "rates": { CODE: number } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

/// Boundary to the exchange-rate provider. Kept as a trait so the compute
/// path can be exercised without a live endpoint.
pub trait RateSource {
    fn latest_rates(&self, base: &str) -> Result<RateTable>;
}

/// exchangerate-api.com provider (keyed by three-letter source currency).
pub struct ExchangeRateApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ExchangeRateApi {
    pub fn new() -> Self {
        ExchangeRateApi {
            client: reqwest::blocking::Client::new(),
            base_url: "https://api.exchangerate-api.com/v4/latest".to_string(),
        }
    }

    /// Override the endpoint (used by tests and self-hosted mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ExchangeRateApi {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ExchangeRateApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for ExchangeRateApi {
    fn latest_rates(&self, base: &str) -> Result<RateTable> {
        let url = format!("{}/{}", self.base_url, base);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach rate provider: {}", url))?
            .error_for_status()
            .context("Rate provider returned an error status")?;

        response
            .json::<RateTable>()
            .context("Failed to parse rate provider response")
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionResult {
    /// Converted via a fetched rate; `amount` rounded to 2 decimals
    Converted { amount: f64, rate: f64, to: String },

    /// Source and target are identical; no fetch performed
    SameCurrency { amount: f64 },

    /// Amount missing, non-numeric, or not strictly positive
    InvalidAmount,

    /// Rate missing from the table or network failure; display-only error
    Unavailable { reason: String },
}

impl ConversionResult {
    pub fn summary(&self) -> String {
        match self {
            ConversionResult::Converted { amount, to, .. } => format!("{:.2} {}", amount, to),
            ConversionResult::SameCurrency { amount } => format!("Result: {:.2}", amount),
            ConversionResult::InvalidAmount => "Please enter a valid amount".to_string(),
            ConversionResult::Unavailable { reason } => format!("Error: {}", reason),
        }
    }
}

/// Convert `amount_raw` from `from` to `to` using a single rate lookup.
pub fn convert(
    amount_raw: &str,
    from: &str,
    to: &str,
    source: &dyn RateSource,
) -> ConversionResult {
    let amount = match amount_raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => return ConversionResult::InvalidAmount,
    };

    // The rate table is keyed by uppercase ISO codes
    let from = from.trim().to_ascii_uppercase();
    let to = to.trim().to_ascii_uppercase();

    if from == to {
        return ConversionResult::SameCurrency {
            amount: round2(amount),
        };
    }

    let table = match source.latest_rates(&from) {
        Ok(table) => table,
        Err(_) => {
            return ConversionResult::Unavailable {
                reason: "Network issue or API unavailable".to_string(),
            }
        }
    };

    match table.rate_for(&to) {
        Some(rate) => ConversionResult::Converted {
            amount: round2(amount * rate),
            rate,
            to,
        },
        None => ConversionResult::Unavailable {
            reason: "Unable to fetch exchange rate".to_string(),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedRates(HashMap<String, f64>);

    impl RateSource for FixedRates {
        fn latest_rates(&self, _base: &str) -> Result<RateTable> {
            Ok(RateTable {
                rates: self.0.clone(),
            })
        }
    }

    struct DownProvider;

    impl RateSource for DownProvider {
        fn latest_rates(&self, _base: &str) -> Result<RateTable> {
            Err(anyhow!("connection refused"))
        }
    }

    fn usd_rates() -> FixedRates {
        let mut rates = HashMap::new();
        rates.insert("EUR".to_string(), 0.92);
        rates.insert("CHF".to_string(), 0.88);
        FixedRates(rates)
    }

    #[test]
    fn test_convert_with_fetched_rate() {
        let result = convert("100", "USD", "EUR", &usd_rates());
        assert_eq!(
            result,
            ConversionResult::Converted {
                amount: 92.0,
                rate: 0.92,
                to: "EUR".to_string(),
            }
        );
        assert_eq!(result.summary(), "92.00 EUR");
    }

    #[test]
    fn test_same_currency_skips_fetch() {
        // DownProvider would fail if the fetch happened
        let result = convert("42.5", "USD", "USD", &DownProvider);
        assert_eq!(result, ConversionResult::SameCurrency { amount: 42.5 });
    }

    #[test]
    fn test_invalid_amounts() {
        let rates = usd_rates();
        assert_eq!(convert("", "USD", "EUR", &rates), ConversionResult::InvalidAmount);
        assert_eq!(convert("abc", "USD", "EUR", &rates), ConversionResult::InvalidAmount);
        assert_eq!(convert("0", "USD", "EUR", &rates), ConversionResult::InvalidAmount);
        assert_eq!(convert("-5", "USD", "EUR", &rates), ConversionResult::InvalidAmount);
    }

    #[test]
    fn test_missing_target_rate_is_unavailable() {
        let result = convert("100", "USD", "JPY", &usd_rates());
        assert_eq!(
            result,
            ConversionResult::Unavailable {
                reason: "Unable to fetch exchange rate".to_string(),
            }
        );
    }

    #[test]
    fn test_network_failure_is_display_only() {
        let result = convert("100", "USD", "EUR", &DownProvider);
        assert_eq!(
            result.summary(),
            "Error: Network issue or API unavailable"
        );
    }

    #[test]
    fn test_currency_directory() {
        assert_eq!(CURRENCIES.len(), 10);
        assert_eq!(find_currency("chf").unwrap().name, "Swiss Franc");
        assert!(find_currency("XXX").is_none());
    }

    #[test]
    fn test_flags_are_well_formed() {
        for currency in &CURRENCIES {
            assert!(
                !currency.flag.contains('\u{FFFD}'),
                "currency {} flag contains U+FFFD replacement character",
                currency.code
            );
            // Flag emoji are exactly two regional-indicator code points
            let indicators: Vec<char> = currency.flag.chars().collect();
            assert_eq!(indicators.len(), 2, "currency {} flag is malformed", currency.code);
            for c in indicators {
                assert!(
                    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c),
                    "currency {} flag has a non-regional-indicator char",
                    currency.code
                );
            }
        }
    }

    #[test]
    fn test_convert_accepts_lowercase_codes() {
        let result = convert("100", "usd", "eur", &usd_rates());
        assert_eq!(
            result,
            ConversionResult::Converted {
                amount: 92.0,
                rate: 0.92,
                to: "EUR".to_string(),
            }
        );
        assert_eq!(
            convert("42.5", "usd", "USD", &DownProvider),
            ConversionResult::SameCurrency { amount: 42.5 }
        );
    }
}
