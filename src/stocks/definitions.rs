// src/stocks/definitions.rs
//! Display rows shown in the watchlist table.
//
//! Prices arrive pre-formatted; a row is a pure rendering value and is
//! never mutated after creation. Replace `mock_stock_rows()` with a real
//! quote source whenever one exists.

pub type Symbol = String;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One table row. All three prices are display strings, already rounded
/// to two decimals by whoever produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    /// Ticker shown in the first column (e.g. "AAPL").
    pub symbol: Symbol,
    /// Best bid, formatted.
    pub bid_price: String,
    /// Best ask, formatted.
    pub ask_price: String,
    /// Last traded price, formatted.
    pub last_price: String,
}

/// Convenience factory so call-sites stay concise.
impl StockRow {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>, T3: Into<String>, T4: Into<String>>(
        symbol: T1,
        bid_price: T2,
        ask_price: T3,
        last_price: T4,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            bid_price: bid_price.into(),
            ask_price: ask_price.into(),
            last_price: last_price.into(),
        }
    }
}

/// How many synthetic rows the mock feed produces.
pub const MOCK_ROW_COUNT: usize = 5;

// Built once, cloned per load. The fixture is deterministic so tests can
// pin exact values.
static MOCK_ROWS: Lazy<Vec<StockRow>> = Lazy::new(|| {
    (0..MOCK_ROW_COUNT)
        .map(|i| {
            let price = format!("{:.2}", i as f64);
            StockRow::new(format!("GOOGL {i}"), price.clone(), price.clone(), price)
        })
        .collect()
});

/// The synthetic rows shown while no real market data source is wired up.
#[inline]
pub fn mock_stock_rows() -> Vec<StockRow> {
    MOCK_ROWS.clone()
}
