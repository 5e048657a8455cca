//! Frequency tables of real types.
//!
//! A [`FrequencyTable`] summarises a sequence of values as `(tag, count)`
//! pairs, sorted by tag name with no duplicates and no zero counts. It is the
//! Rust counterpart of an `Object.entries()` result such as
//! `[['boolean', 3], ['string', 5]]`.

use std::collections::BTreeMap;
use std::fmt;

use core_types::{RealTag, Value};
use serde::Serialize;

use crate::classify::classify_all_real;

/// How many values of a sequence carry one real tag.
///
/// Serializes as a two-element array, e.g. `["boolean", 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "(RealTag, usize)")]
pub struct FrequencyEntry {
    /// The real tag being counted
    pub tag: RealTag,
    /// Number of values with that tag, always at least one
    pub count: usize,
}

impl From<FrequencyEntry> for (RealTag, usize) {
    fn from(entry: FrequencyEntry) -> Self {
        (entry.tag, entry.count)
    }
}

/// Real-type counts sorted ascending by tag name.
///
/// # Examples
///
/// ```
/// use core_types::{RealTag, Value};
/// use type_classifier::count_by_real_type;
///
/// let table = count_by_real_type(&[Value::Boolean(true), Value::Null, Value::Boolean(false)]);
/// assert_eq!(table.count_of(RealTag::Boolean), 2);
/// assert_eq!(table.to_string(), "boolean,2,null,1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Builds a table by counting already-classified tags.
    pub fn from_tags<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = RealTag>,
    {
        let mut counts: BTreeMap<RealTag, usize> = BTreeMap::new();
        for tag in tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
        let entries = counts
            .into_iter()
            .map(|(tag, count)| FrequencyEntry { tag, count })
            .collect();
        Self { entries }
    }

    /// The entries in ascending tag order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Iterates over the entries in ascending tag order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table was built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for one tag, zero when the tag never occurred.
    pub fn count_of(&self, tag: RealTag) -> usize {
        self.entries
            .binary_search_by(|e| e.tag.cmp(&tag))
            .map_or(0, |i| self.entries[i].count)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<FrequencyTable> for Vec<(RealTag, usize)> {
    fn from(table: FrequencyTable) -> Self {
        table.entries.into_iter().map(Into::into).collect()
    }
}

/// Joins tags and counts with commas, the way an array of pairs stringifies.
impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{},{}", entry.tag, entry.count)?;
        }
        Ok(())
    }
}

/// Counts values by real type.
///
/// The result does not depend on the order of `values`.
///
/// # Examples
///
/// ```
/// use core_types::{RealTag, Value};
/// use type_classifier::count_by_real_type;
///
/// let values = vec![
///     Value::object::<&str>(vec![]),
///     Value::Smi(3),
///     Value::Smi(5),
///     Value::date(0.0),
///     Value::Boolean(true),
///     Value::map(vec![]),
/// ];
/// let pairs: Vec<(RealTag, usize)> = count_by_real_type(&values).into();
/// assert_eq!(
///     pairs,
///     vec![
///         (RealTag::Boolean, 1),
///         (RealTag::Date, 1),
///         (RealTag::Map, 1),
///         (RealTag::Number, 2),
///         (RealTag::Object, 1),
///     ]
/// );
/// ```
pub fn count_by_real_type(values: &[Value]) -> FrequencyTable {
    let table = FrequencyTable::from_tags(classify_all_real(values));
    tracing::debug!(values = values.len(), distinct = table.len(), "counted real types");
    table
}
