//! Growth-special tables: the forward metabolism table and its inverse index.
use log::{debug, warn};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::constants::STANDARD_METABOLISM_BOOSTS;
use crate::error::DependencyError;
use crate::metabolism::Metabolism;

/// Forward table from metabolism to the specials that boost its growth.
///
/// Every metabolism has an entry, possibly empty. Specials keep the order
/// they were listed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetabolismBoostMap {
    boosts: BTreeMap<Metabolism, Vec<String>>,
}

/// A special listed more than once in a [`MetabolismBoostMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoostConflict {
    pub boost: String,
    pub first: Metabolism,
    pub second: Metabolism,
}

impl From<BoostConflict> for DependencyError {
    fn from(value: BoostConflict) -> Self {
        if value.first == value.second {
            return Self::RepeatedBoost {
                boost: value.boost,
                metabolism: value.first,
            };
        }
        Self::DuplicateBoost {
            boost: value.boost,
            first: value.first,
            second: value.second,
        }
    }
}

/// Untyped metabolism table as written in content files.
///
/// Entries keep their written order and repeated keys survive parsing, so
/// [`MetabolismBoostMap::from_raw`] can reject them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawBoostTable(pub Vec<(String, Vec<String>)>);

impl RawBoostTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for RawBoostTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for RawBoostTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, boosts) in &self.0 {
            map.serialize_entry(key, boosts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawBoostTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawBoostTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping metabolism keys to lists of specials")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(RawBoostTable(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl MetabolismBoostMap {
    /// The built-in table shipped with the game content.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_METABOLISM_BOOSTS.iter().map(|(metabolism, boosts)| {
            (
                *metabolism,
                boosts.iter().map(|boost| (*boost).to_string()).collect(),
            )
        }))
    }

    /// Build a table from typed entries. Categories that are not listed get
    /// an empty entry; a repeated category replaces the earlier list.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Metabolism, Vec<String>)>,
    {
        let mut boosts: BTreeMap<Metabolism, Vec<String>> = Metabolism::ALL
            .iter()
            .map(|metabolism| (*metabolism, Vec::new()))
            .collect();
        boosts.extend(entries);
        Self { boosts }
    }

    /// Build a table from untyped category keys, as found in content files.
    ///
    /// # Errors
    ///
    /// Returns an error when no category is listed, when a key is not a known
    /// metabolism, when a category is listed twice, or when a special
    /// identifier is blank.
    pub fn from_raw(raw: RawBoostTable) -> Result<Self, DependencyError> {
        if raw.is_empty() {
            return Err(DependencyError::EmptyCategorySet);
        }
        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(raw.0.len());
        for (key, boosts) in raw.0 {
            let metabolism: Metabolism = key.parse()?;
            if !seen.insert(metabolism) {
                return Err(DependencyError::DuplicateCategory { metabolism });
            }
            if boosts.iter().any(|boost| boost.trim().is_empty()) {
                return Err(DependencyError::EmptyBoost { metabolism });
            }
            entries.push((metabolism, boosts));
        }
        Ok(Self::from_entries(entries))
    }

    /// Load a table from a JSON object keyed by metabolism.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::from_raw`].
    pub fn from_json(json: &str) -> Result<Self, DependencyError> {
        let raw: RawBoostTable = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    #[must_use]
    pub fn boosts_for(&self, metabolism: Metabolism) -> &[String] {
        self.boosts
            .get(&metabolism)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = Metabolism> + '_ {
        self.boosts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metabolism, &[String])> + '_ {
        self.boosts
            .iter()
            .map(|(metabolism, boosts)| (*metabolism, boosts.as_slice()))
    }

    /// Number of listed specials, counting repeats.
    #[must_use]
    pub fn total_boosts(&self) -> usize {
        self.boosts.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains_boost(&self, boost: &str) -> bool {
        self.boosts
            .values()
            .any(|boosts| boosts.iter().any(|listed| listed == boost))
    }

    /// Every repeated listing, in derivation order. `first` is the category
    /// that listed the special first.
    #[must_use]
    pub fn conflicts(&self) -> Vec<BoostConflict> {
        let mut seen: BTreeMap<&str, Metabolism> = BTreeMap::new();
        let mut conflicts = Vec::new();
        for (metabolism, boosts) in self.iter() {
            for boost in boosts {
                match seen.entry(boost.as_str()) {
                    Entry::Vacant(slot) => {
                        slot.insert(metabolism);
                    }
                    Entry::Occupied(slot) => conflicts.push(BoostConflict {
                        boost: boost.clone(),
                        first: *slot.get(),
                        second: metabolism,
                    }),
                }
            }
        }
        conflicts
    }

    /// # Errors
    ///
    /// Returns `DependencyError::DuplicateBoost` for the first special listed
    /// more than once.
    pub fn validate_unique(&self) -> Result<(), DependencyError> {
        match self.conflicts().into_iter().next() {
            Some(conflict) => Err(conflict.into()),
            None => Ok(()),
        }
    }
}

impl Default for MetabolismBoostMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// Reverse lookup from growth special to the metabolism it boosts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct BoostIndex {
    by_boost: BTreeMap<String, Metabolism>,
}

impl BoostIndex {
    /// Invert a forward table.
    ///
    /// Categories are visited in canonical order and specials in listed
    /// order. A special listed under several categories maps to the last
    /// one visited.
    #[must_use]
    pub fn derive(map: &MetabolismBoostMap) -> Self {
        let mut by_boost = BTreeMap::new();
        for (metabolism, boosts) in map.iter() {
            for boost in boosts {
                if let Some(previous) = by_boost.insert(boost.clone(), metabolism)
                    && previous != metabolism
                {
                    warn!("boost {boost} reassigned from {previous} to {metabolism}");
                }
            }
        }
        debug!(
            "derived boost index with {} specials across {} categories",
            by_boost.len(),
            Metabolism::ALL.len()
        );
        Self { by_boost }
    }

    #[must_use]
    pub fn metabolism_for(&self, boost: &str) -> Option<Metabolism> {
        self.by_boost.get(boost).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_boost.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_boost.is_empty()
    }

    /// Entries sorted by special identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Metabolism)> + '_ {
        self.by_boost
            .iter()
            .map(|(boost, metabolism)| (boost.as_str(), *metabolism))
    }

    pub fn boosts(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_boost.keys().map(String::as_str)
    }
}
