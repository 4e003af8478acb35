//! Signal categories, the accumulated signal vector and partial deltas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the six fixed aptitude/preference categories.
///
/// Declaration order is the canonical iteration order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKey {
    Analytical,
    Creative,
    Social,
    Structured,
    Exploratory,
    Practical,
}

impl SignalKey {
    /// All signal keys in canonical order.
    pub const ALL: [SignalKey; 6] = [
        SignalKey::Analytical,
        SignalKey::Creative,
        SignalKey::Social,
        SignalKey::Structured,
        SignalKey::Exploratory,
        SignalKey::Practical,
    ];

    /// Returns the wire name used in persisted documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKey::Analytical => "analytical",
            SignalKey::Creative => "creative",
            SignalKey::Social => "social",
            SignalKey::Structured => "structured",
            SignalKey::Exploratory => "exploratory",
            SignalKey::Practical => "practical",
        }
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated score per signal category.
///
/// All six keys are always present; an unknown key cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalVector {
    #[serde(default)]
    analytical: f64,
    #[serde(default)]
    creative: f64,
    #[serde(default)]
    social: f64,
    #[serde(default)]
    structured: f64,
    #[serde(default)]
    exploratory: f64,
    #[serde(default)]
    practical: f64,
}

impl SignalVector {
    /// Creates an all-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a vector from `(key, value)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (SignalKey, f64)>) -> Self {
        let mut vector = Self::zero();
        for (key, value) in pairs {
            *vector.slot_mut(key) = value;
        }
        vector
    }

    /// Returns the accumulator for a key.
    pub fn get(&self, key: SignalKey) -> f64 {
        match key {
            SignalKey::Analytical => self.analytical,
            SignalKey::Creative => self.creative,
            SignalKey::Social => self.social,
            SignalKey::Structured => self.structured,
            SignalKey::Exploratory => self.exploratory,
            SignalKey::Practical => self.practical,
        }
    }

    fn slot_mut(&mut self, key: SignalKey) -> &mut f64 {
        match key {
            SignalKey::Analytical => &mut self.analytical,
            SignalKey::Creative => &mut self.creative,
            SignalKey::Social => &mut self.social,
            SignalKey::Structured => &mut self.structured,
            SignalKey::Exploratory => &mut self.exploratory,
            SignalKey::Practical => &mut self.practical,
        }
    }

    /// Adds `delta` to the accumulator for `key`. Negative deltas are allowed.
    pub fn add(&mut self, key: SignalKey, delta: f64) {
        *self.slot_mut(key) += delta;
    }

    /// Adds every present entry of a delta.
    pub fn apply(&mut self, delta: &SignalDelta) {
        for (key, value) in delta.iter() {
            self.add(key, value);
        }
    }

    /// Iterates `(key, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalKey, f64)> + '_ {
        SignalKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Sum of all accumulators.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// True when every accumulator is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, value)| value == 0.0)
    }

    /// Divides each accumulator by the total.
    ///
    /// A total of zero or below yields the zero vector, so anti-signals
    /// never flip the sign of the shares.
    pub fn normalized(&self) -> SignalVector {
        let total = self.total();
        if total <= 0.0 {
            return SignalVector::zero();
        }
        SignalVector::from_pairs(self.iter().map(|(key, value)| (key, value / total)))
    }

    /// Key with the highest accumulator; ties go to the earlier key.
    pub fn strongest(&self) -> Option<SignalKey> {
        if self.is_zero() {
            return None;
        }
        let mut best: Option<(SignalKey, f64)> = None;
        for (key, value) in self.iter() {
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((key, value)),
            }
        }
        best.map(|(key, _)| key)
    }
}

/// Partial signal contribution from one screen.
///
/// Absent keys mean "no contribution", which is distinct from an explicit zero
/// only for inspection; applying either leaves the accumulator unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalDelta(BTreeMap<SignalKey, f64>);

impl SignalDelta {
    /// Creates an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SignalDelta::add`].
    pub fn with(mut self, key: SignalKey, value: f64) -> Self {
        self.add(key, value);
        self
    }

    /// Accumulates `value` into `key`, creating the entry when absent.
    pub fn add(&mut self, key: SignalKey, value: f64) {
        *self.0.entry(key).or_insert(0.0) += value;
    }

    /// Returns the contribution for a key, if any.
    pub fn get(&self, key: SignalKey) -> Option<f64> {
        self.0.get(&key).copied()
    }

    /// Folds another delta into this one.
    pub fn merge(&mut self, other: &SignalDelta) {
        for (key, value) in other.iter() {
            self.add(key, value);
        }
    }

    /// Returns a copy with every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> SignalDelta {
        SignalDelta(self.0.iter().map(|(k, v)| (*k, v * factor)).collect())
    }

    /// Iterates present entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(SignalKey, f64)> for SignalDelta {
    fn from_iter<I: IntoIterator<Item = (SignalKey, f64)>>(iter: I) -> Self {
        let mut delta = SignalDelta::new();
        for (key, value) in iter {
            delta.add(key, value);
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_vector_has_all_six_keys() {
        let json = serde_json::to_value(SignalVector::zero()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for key in SignalKey::ALL {
            assert_eq!(obj[key.as_str()], 0.0);
        }
    }

    #[test]
    fn missing_keys_deserialize_as_zero() {
        let vector: SignalVector = serde_json::from_str(r#"{"analytical": 2}"#).unwrap();
        assert_eq!(vector.get(SignalKey::Analytical), 2.0);
        assert_eq!(vector.get(SignalKey::Practical), 0.0);
    }

    #[test]
    fn add_accepts_negative_deltas() {
        let mut vector = SignalVector::zero();
        vector.add(SignalKey::Social, 2.0);
        vector.add(SignalKey::Social, -1.0);
        assert_eq!(vector.get(SignalKey::Social), 1.0);
    }

    #[test]
    fn normalized_all_zero_is_all_zero() {
        let normalized = SignalVector::zero().normalized();
        for (_, value) in normalized.iter() {
            assert_eq!(value, 0.0);
            assert!(!value.is_nan());
        }
    }

    #[test]
    fn normalized_negative_total_is_all_zero() {
        let vector = SignalVector::from_pairs([
            (SignalKey::Social, -2.0),
            (SignalKey::Exploratory, -1.0),
        ]);

        let normalized = vector.normalized();

        assert_eq!(normalized.get(SignalKey::Social), 0.0);
        assert_eq!(normalized.get(SignalKey::Exploratory), 0.0);
        assert!(normalized.is_zero());
    }

    #[test]
    fn normalized_matches_documented_scenario() {
        let vector = SignalVector::from_pairs([
            (SignalKey::Analytical, 6.0),
            (SignalKey::Structured, 3.0),
            (SignalKey::Social, 1.0),
        ]);
        let normalized = vector.normalized();
        assert!((normalized.get(SignalKey::Analytical) - 0.6).abs() < EPS);
        assert!((normalized.get(SignalKey::Structured) - 0.3).abs() < EPS);
        assert!((normalized.get(SignalKey::Social) - 0.1).abs() < EPS);
        assert_eq!(normalized.get(SignalKey::Creative), 0.0);
    }

    #[test]
    fn strongest_prefers_earlier_key_on_tie() {
        let vector = SignalVector::from_pairs([
            (SignalKey::Creative, 3.0),
            (SignalKey::Exploratory, 3.0),
        ]);
        assert_eq!(vector.strongest(), Some(SignalKey::Creative));
        assert_eq!(SignalVector::zero().strongest(), None);
    }

    #[test]
    fn delta_accumulates_repeated_keys() {
        let delta = SignalDelta::new()
            .with(SignalKey::Social, 2.0)
            .with(SignalKey::Social, 1.0);
        assert_eq!(delta.get(SignalKey::Social), Some(3.0));
        assert_eq!(delta.get(SignalKey::Creative), None);
    }

    #[test]
    fn delta_scaled_multiplies_every_entry() {
        let delta = SignalDelta::new()
            .with(SignalKey::Analytical, 2.0)
            .with(SignalKey::Structured, 1.0)
            .scaled(1.5);
        assert_eq!(delta.get(SignalKey::Analytical), Some(3.0));
        assert_eq!(delta.get(SignalKey::Structured), Some(1.5));
    }

    fn signal_key() -> impl Strategy<Value = SignalKey> {
        prop::sample::select(SignalKey::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn accumulation_is_independent_of_grouping(
            deltas in prop::collection::vec((signal_key(), -10i32..10i32), 0..40),
            split in 0usize..40,
        ) {
            let mut one_by_one = SignalVector::zero();
            for (key, value) in &deltas {
                one_by_one.add(*key, f64::from(*value));
            }

            let split = split.min(deltas.len());
            let first: SignalDelta = deltas[..split].iter().map(|(k, v)| (*k, f64::from(*v))).collect();
            let second: SignalDelta = deltas[split..].iter().map(|(k, v)| (*k, f64::from(*v))).collect();
            let mut grouped = SignalVector::zero();
            grouped.apply(&second);
            grouped.apply(&first);

            for key in SignalKey::ALL {
                let expected: f64 = deltas.iter().filter(|(k, _)| *k == key).map(|(_, v)| f64::from(*v)).sum();
                prop_assert!((one_by_one.get(key) - expected).abs() < EPS);
                prop_assert!((grouped.get(key) - expected).abs() < EPS);
            }
        }

        #[test]
        fn normalized_non_zero_vector_sums_to_one(
            values in prop::collection::vec(0u32..100u32, 6),
        ) {
            prop_assume!(values.iter().any(|v| *v > 0));
            let vector = SignalVector::from_pairs(
                SignalKey::ALL.iter().copied().zip(values.iter().map(|v| f64::from(*v))),
            );
            prop_assert!((vector.normalized().total() - 1.0).abs() < 1e-9);
        }
    }
}
