// src/shared_types.rs

/// Which slice of screen state just changed. One event is emitted per
/// mutation, so a successful delete produces a `WatchlistsChanged`
/// followed by a `SelectionChanged`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ChangeEvent {
    StocksChanged,
    WatchlistsChanged,
    SelectionChanged,
}
