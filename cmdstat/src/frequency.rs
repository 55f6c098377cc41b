use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use derive_more::Deref;

use crate::Percentage;

/// One entry of a frequency distribution
#[derive(Debug, Clone, PartialEq)]
pub struct Share<K> {
    pub key: K,
    pub percentage: Percentage,
}

/// A percentage distribution over keys of type `K`
///
/// Entries keep the order in which their keys were first seen. Dereferences to a
/// slice of [`Share`]s.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Frequencies<K> {
    #[deref]
    entries: Vec<Share<K>>,
}

impl<K: PartialEq> Frequencies<K> {
    /// Get the percentage recorded for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<Percentage>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|share| Borrow::<Q>::borrow(&share.key) == key)
            .map(|share| share.percentage)
    }

    /// Entries sorted by descending percentage.
    ///
    /// The sort is stable: equal percentages keep their first-seen order.
    pub fn ranked(&self) -> Vec<&Share<K>> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        ranked
    }

    /// Sum of all percentages. `100.0` (within rounding) for any non-empty distribution.
    pub fn total(&self) -> Percentage {
        self.entries.iter().map(|share| share.percentage).sum()
    }
}

/// Raw occurrence counter preserving first-seen key order
#[derive(Debug, Clone)]
pub(crate) struct Counter<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, usize)>,
}

impl<K> Default for Counter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Counter<K> {
    pub(crate) fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub(crate) fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map_or(0, |&position| self.counts[position].1)
    }

    /// Convert the raw counts into percentages of `total`.
    ///
    /// Consumes the counter; `total` must be non-zero.
    pub(crate) fn into_frequencies(self, total: usize) -> Frequencies<K> {
        let total = total as Percentage;
        let entries = self
            .counts
            .into_iter()
            .map(|(key, count)| Share {
                key,
                percentage: count as Percentage / total * 100.0,
            })
            .collect();

        Frequencies { entries }
    }
}
