use crate::value::{Key, KeyRef};
use std::collections::BTreeMap;

///
/// Level
///
/// One level of a nested array property. Generated decode code walks the
/// source container level by level and asks each destination level for the
/// slot under the same key, creating it on first use.
///

pub trait Level: Default {
    type Item: Default;

    /// Slot for `key`, created with `Default` when missing.
    fn entry(&mut self, key: Key) -> &mut Self::Item;

    /// Populated slots in iteration order.
    fn entries(&self) -> impl Iterator<Item = (Key, &Self::Item)>;
}

/// Furthest a `Vec` level grows past its end to reach an integer key.
/// Keys beyond it append instead.
pub const MAX_LIST_GAP: usize = 4096;

// Vec: integer keys address positions, growing the vec to reach them;
// text keys and unreachable positions append
impl<T: Default> Level for Vec<T> {
    type Item = T;

    fn entry(&mut self, key: Key) -> &mut T {
        let index = match key {
            Key::Int(i) => usize::try_from(i)
                .ok()
                .filter(|i| *i < self.len().saturating_add(MAX_LIST_GAP)),
            Key::Text(_) => None,
        };

        let index = index.unwrap_or(self.len());
        if index >= self.len() {
            self.resize_with(index + 1, T::default);
        }

        &mut self[index]
    }

    fn entries(&self) -> impl Iterator<Item = (Key, &T)> {
        self.iter().enumerate().map(|(i, item)| (Key::from(i), item))
    }
}

// BTreeMap: keys are kept, integer keys by their decimal spelling
impl<T: Default> Level for BTreeMap<String, T> {
    type Item = T;

    fn entry(&mut self, key: Key) -> &mut T {
        BTreeMap::entry(self, key.to_string()).or_default()
    }

    fn entries(&self) -> impl Iterator<Item = (Key, &T)> {
        self.iter().map(|(k, item)| (Key::from(KeyRef::from(k)), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_merges_known_positions_and_appends_text_keys() {
        let mut level = vec!["a".to_string(), "b".to_string()];

        *Level::entry(&mut level, Key::Int(1)) = "B".to_string();
        *Level::entry(&mut level, Key::Int(2)) = "c".to_string();
        *Level::entry(&mut level, Key::from("x")) = "d".to_string();

        assert_eq!(level, ["a", "B", "c", "d"]);
    }

    #[test]
    fn vec_places_out_of_order_keys_by_position() {
        let mut level: Vec<String> = Vec::new();

        *Level::entry(&mut level, Key::Int(1)) = "b".to_string();
        *Level::entry(&mut level, Key::Int(0)) = "a".to_string();

        assert_eq!(level, ["a", "b"]);
    }

    #[test]
    fn vec_fills_gaps_with_defaults() {
        let mut level: Vec<u8> = Vec::new();

        *Level::entry(&mut level, Key::Int(2)) = 3;
        *Level::entry(&mut level, Key::Int(-1)) = 4;

        assert_eq!(level, [0, 0, 3, 4]);
    }

    #[test]
    fn vec_appends_keys_past_the_gap_limit() {
        let mut level = vec![1u8];
        let far = i64::try_from(MAX_LIST_GAP + 1).unwrap();

        *Level::entry(&mut level, Key::Int(far)) = 2;

        assert_eq!(level, [1, 2]);
    }

    #[test]
    fn vec_entries_are_positional() {
        let level = vec![10u8, 20u8];
        let entries: Vec<_> = Level::entries(&level).collect();

        assert_eq!(entries, [(Key::Int(0), &10), (Key::Int(1), &20)]);
    }

    #[test]
    fn map_keeps_keys_and_normalises_numeric_spelling() {
        let mut level: BTreeMap<String, u8> = BTreeMap::new();
        *Level::entry(&mut level, Key::from("a")) = 1;
        *Level::entry(&mut level, Key::Int(2)) = 2;

        let entries: Vec<_> = Level::entries(&level).collect();
        assert_eq!(entries, [(Key::Int(2), &2), (Key::from("a"), &1)]);
    }
}
