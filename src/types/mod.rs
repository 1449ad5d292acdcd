// src/types/mod.rs
pub mod watchlist;

pub use watchlist::{MOCK_WATCHLIST_COUNT, Watchlist, mock_watchlists};
