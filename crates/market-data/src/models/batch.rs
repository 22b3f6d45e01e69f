use serde::ser::{Serialize, SerializeMap, Serializer};

use super::quote::QuoteOutcome;

/// Outcome of a batch fetch: exactly one entry per requested symbol, in the
/// order the symbols were requested.
///
/// Serializes as a JSON object keyed by symbol, preserving request order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchResult {
    entries: Vec<(String, QuoteOutcome)>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, symbol: &str) -> Option<&QuoteOutcome> {
        self.entries
            .iter()
            .find(|(key, _)| key == symbol)
            .map(|(_, outcome)| outcome)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Requested symbols, in request order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuoteOutcome)> {
        self.entries
            .iter()
            .map(|(key, outcome)| (key.as_str(), outcome))
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
}

impl FromIterator<(String, QuoteOutcome)> for BatchResult {
    fn from_iter<I: IntoIterator<Item = (String, QuoteOutcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BatchResult {
    type Item = (String, QuoteOutcome);
    type IntoIter = std::vec::IntoIter<(String, QuoteOutcome)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, outcome) in &self.entries {
            map.serialize_entry(symbol, outcome)?;
        }
        map.end()
    }
}
