// Healthcare Operations Portal - Core Library
// Exposes all modules for use in the TUI, API server, and tests

pub mod calculators;
pub mod charts;
pub mod currency;
pub mod dashboard;
pub mod links;
pub mod production;
pub mod sop;

// Re-export commonly used types
pub use calculators::basic::{
    date_difference_days, percentage_of, DateDiffResult, PercentageResult,
};
pub use calculators::drg::{
    compute_german_los, compute_swiss_los, GermanLosInput, GermanLosResult, SwissLosInput,
    SwissLosResult,
};
pub use currency::{
    convert, find_currency, ConversionResult, Currency, ExchangeRateApi, RateSource, RateTable,
    CURRENCIES,
};
pub use dashboard::{ActivityEntry, DepartmentMetric, StatCard};
pub use links::{LinkCategory, LinkEntry};
pub use production::{Procedure, ProcedureStatus, StatusCounts};
pub use sop::{SopCategory, SopProcedure, SopUpdate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
