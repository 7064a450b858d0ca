//! Per-domain parsers turning summary prose into typed records.
//!
//! Parsers never fail outward. When a field table cannot be used the parser
//! logs the problem and returns the domain's default record, so a parse
//! problem reads as "unknown" rather than as a missing domain.

use once_cell::sync::Lazy;
use tracing::warn;

use crate::error::ExtractError;
use crate::extract::FieldTable;

mod air;
mod crime;
mod health;
mod markets;
mod traffic;
mod weather;

pub use air::parse_air_quality;
pub use crime::parse_crime;
pub use health::parse_health;
pub use markets::parse_markets;
pub use traffic::parse_traffic;
pub use weather::parse_weather;

type CompiledTable = Lazy<Result<FieldTable, ExtractError>>;

fn table(cell: &'static CompiledTable) -> Result<&'static FieldTable, ExtractError> {
    cell.as_ref().map_err(Clone::clone)
}

fn recover<T: Default>(domain: &str, result: Result<T, ExtractError>) -> T {
    result.unwrap_or_else(|e| {
        warn!("Falling back to default {domain} record: {e}");
        T::default()
    })
}
