// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod shared_types;
pub mod stocks;
pub mod store;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::definitions::{MOCK_ROW_COUNT, StockRow, Symbol, mock_stock_rows};

// --- From our `store` core ---
pub use store::WatchlistStore;

// --- From `types` ---
pub use types::watchlist::{MOCK_WATCHLIST_COUNT, Watchlist, mock_watchlists};

// --- From `shared_types` ---
pub use shared_types::ChangeEvent;
