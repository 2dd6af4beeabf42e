//! Ordered pin storage
//!
//! Order is meaningful: it is the drawing order, the playback order and the
//! sequence connectors are drawn along. Every mutation reports whether it
//! changed anything so callers can skip redraws for ignored requests.

use crate::model::pin::Pin;

/// Ordered sequence of pins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinStore {
    pins: Vec<Pin>,
}

impl PinStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether the store has no pins
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// All pins in order
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Pin at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Pin> {
        self.pins.get(index)
    }

    /// Index of the last pin, `None` when empty
    pub fn last_index(&self) -> Option<usize> {
        self.pins.len().checked_sub(1)
    }

    /// Remove every pin
    pub fn clear(&mut self) {
        self.pins.clear();
    }

    /// Append an unlabeled pin and return its index
    pub fn add(&mut self, x: f32, y: f32) -> usize {
        self.pins.push(Pin::new(x, y));
        self.pins.len() - 1
    }

    /// Replace the label of the pin at `index`
    ///
    /// Returns false when `index` is out of range.
    pub fn set_label(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.pins.get_mut(index) {
            Some(pin) => {
                pin.label = text.into();
                true
            }
            None => false,
        }
    }

    /// Swap the pin at `index` with the one before it
    ///
    /// No-op for the first pin or an out-of-range index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.pins.len() {
            return false;
        }
        self.pins.swap(index - 1, index);
        true
    }

    /// Swap the pin at `index` with the one after it
    ///
    /// No-op for the last pin or an out-of-range index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.pins.len() {
            return false;
        }
        self.pins.swap(index, index + 1);
        true
    }

    /// Remove the pin at `index`, shifting later pins down by one
    pub fn remove(&mut self, index: usize) -> Option<Pin> {
        (index < self.pins.len()).then(|| self.pins.remove(index))
    }
}

impl FromIterator<Pin> for PinStore {
    fn from_iter<I: IntoIterator<Item = Pin>>(iter: I) -> Self {
        Self {
            pins: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(store: &PinStore) -> Vec<&str> {
        store.pins().iter().map(|p| p.label.as_str()).collect()
    }

    fn sample() -> PinStore {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, l)| Pin::with_label(i as f32, i as f32, *l))
            .collect()
    }

    #[test]
    fn test_add_appends_unlabeled() {
        let mut store = PinStore::new();
        assert_eq!(store.add(5.0, 6.0), 0);
        assert_eq!(store.add(7.0, 8.0), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(Pin::x), Some(7.0));
        assert!(store.pins().iter().all(|p| p.label.is_empty()));
    }

    #[test]
    fn test_set_label_out_of_range() {
        let mut store = sample();
        assert!(!store.set_label(3, "z"));
        assert_eq!(labels(&store), ["a", "b", "c"]);
        assert!(store.set_label(1, "z"));
        assert_eq!(labels(&store), ["a", "z", "c"]);
    }

    #[test]
    fn test_move_up_and_down() {
        let mut store = sample();
        assert!(store.move_up(2));
        assert_eq!(labels(&store), ["a", "c", "b"]);
        assert!(store.move_down(0));
        assert_eq!(labels(&store), ["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_boundaries() {
        let mut store = sample();
        assert!(!store.move_up(0));
        assert!(!store.move_down(2));
        assert!(!store.move_down(17));
        assert_eq!(labels(&store), ["a", "b", "c"]);

        let mut empty = PinStore::new();
        assert!(!empty.move_up(0));
        assert!(!empty.move_down(0));
    }

    #[test]
    fn test_remove_shifts() {
        let mut store = sample();
        let removed = store.remove(1);
        assert_eq!(removed.map(|p| p.label), Some("b".to_string()));
        assert_eq!(labels(&store), ["a", "c"]);
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_last_index() {
        assert_eq!(PinStore::new().last_index(), None);
        assert_eq!(sample().last_index(), Some(2));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn store_of(len: usize) -> PinStore {
            (0..len)
                .map(|i| Pin::with_label(i as f32, 0.0, i.to_string()))
                .collect()
        }

        proptest! {
            /// Property: removing index i drops exactly that pin and keeps the rest in order
            #[test]
            fn remove_shifts_indices(len in 1usize..30, pick in 0usize..30) {
                let index = pick % len;
                let mut store = store_of(len);
                let mut expected: Vec<Pin> = store.pins().to_vec();
                expected.remove(index);

                store.remove(index);
                prop_assert_eq!(store.len(), len - 1);
                prop_assert_eq!(store.pins(), expected.as_slice());
            }

            /// Property: reordering at the boundaries never changes the store
            #[test]
            fn boundary_reorders_are_noops(len in 0usize..30) {
                let mut store = store_of(len);
                let before = store.clone();
                store.move_up(0);
                store.move_down(len.saturating_sub(1));
                prop_assert_eq!(store, before);
            }

            /// Property: moving down then up restores the original order
            #[test]
            fn move_down_then_up_is_identity(len in 2usize..30, pick in 0usize..30) {
                let index = pick % (len - 1);
                let mut store = store_of(len);
                let before = store.clone();
                prop_assert!(store.move_down(index));
                prop_assert!(store.move_up(index + 1));
                prop_assert_eq!(store, before);
            }
        }
    }
}
