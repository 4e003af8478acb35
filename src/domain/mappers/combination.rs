//! Order-independent lookup for two-card selection screens.

use std::collections::HashMap;
use std::hash::Hash;

/// An unordered pair of cards.
///
/// Construction sorts the two cards, so `(X, Y)` and `(Y, X)` produce the
/// same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardPair<C> {
    low: C,
    high: C,
}

impl<C: Ord + Copy> CardPair<C> {
    pub fn new(a: C, b: C) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two cards, lower first.
    pub fn cards(&self) -> (C, C) {
        (self.low, self.high)
    }

    /// False when the same card was picked twice.
    pub fn is_distinct(&self) -> bool {
        self.low != self.high
    }
}

/// Static table from card pairs to a screen-specific result.
#[derive(Debug, Clone)]
pub struct CombinationTable<C, V> {
    entries: HashMap<CardPair<C>, V>,
}

impl<C: Ord + Copy + Hash, V> CombinationTable<C, V> {
    /// Builds the table; each entry is keyed order-independently.
    ///
    /// A pair listed twice keeps the later value.
    pub fn from_entries(entries: impl IntoIterator<Item = (C, C, V)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(a, b, value)| (CardPair::new(a, b), value))
                .collect(),
        }
    }

    /// Looks up a selection regardless of pick order.
    pub fn lookup(&self, a: C, b: C) -> Option<&V> {
        self.entries.get(&CardPair::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_normalized() {
        assert_eq!(CardPair::new('b', 'a'), CardPair::new('a', 'b'));
        assert_eq!(CardPair::new('d', 'c').cards(), ('c', 'd'));
    }

    #[test]
    fn same_card_twice_is_not_distinct() {
        assert!(!CardPair::new('a', 'a').is_distinct());
        assert!(CardPair::new('a', 'b').is_distinct());
    }

    #[test]
    fn lookup_ignores_pick_order() {
        let table = CombinationTable::from_entries([('a', 'b', 1), ('d', 'c', 2)]);
        assert_eq!(table.lookup('a', 'b'), Some(&1));
        assert_eq!(table.lookup('b', 'a'), Some(&1));
        assert_eq!(table.lookup('c', 'd'), Some(&2));
        assert_eq!(table.lookup('a', 'c'), None);
        assert_eq!(table.len(), 2);
    }
}
