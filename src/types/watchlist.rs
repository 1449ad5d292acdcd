// src/types/watchlist.rs

use serde::{Deserialize, Serialize};

/// A named, user-manageable collection of symbols. Ids are plain strings
/// handed out by the store; lookups are linear, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: String,
    pub name: String,
}

impl Watchlist {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(id: T1, name: T2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// How many synthetic watchlists a fresh load seeds.
pub const MOCK_WATCHLIST_COUNT: usize = 5;

/// The synthetic watchlists seeded on load: ids are the stringified
/// index, names follow the "watchlists {i}" pattern.
#[inline]
pub fn mock_watchlists() -> Vec<Watchlist> {
    (0..MOCK_WATCHLIST_COUNT)
        .map(|i| Watchlist::new(i.to_string(), format!("watchlists {i}")))
        .collect()
}

// -----------------------------------------------------------------------------
//  Unit tests: mock watchlist fixture
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_stringified_indices() {
        let lists = mock_watchlists();
        assert_eq!(lists.len(), MOCK_WATCHLIST_COUNT);
        for (i, list) in lists.iter().enumerate() {
            assert_eq!(list.id, i.to_string());
            assert_eq!(list.name, format!("watchlists {i}"));
        }
    }
}
