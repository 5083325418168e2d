//! An ordered collection of [`Record`]s with filtering and extremal queries.
//!
//! | Operation | Returns | Empty catalogue |
//! |-----------|---------|-----------------|
//! | [`filter_by_category`](Catalogue::filter_by_category), [`filter_by_region`](Catalogue::filter_by_region) | new `Catalogue` | empty result |
//! | [`get_by_id`](Catalogue::get_by_id) | `&Record` | `NotFound` |
//! | [`nearest`](Catalogue::nearest) | `Option<Neighbour>` | `None` |
//! | [`brightest`](Catalogue::brightest), [`most_distant`](Catalogue::most_distant), ... | `&Record` | `EmptyCatalogue` |
//! | [`mean_magnitude`](Catalogue::mean_magnitude) | `f64` | `EmptyCatalogue` |
//!
//! Filters clone the matching records; the source catalogue is never modified by a
//! query. Extremal queries return the first record in catalogue order when several tie.

use crate::error::{CatalogueError, CatalogueResult};
use crate::ingest::{ingest_lines, IngestOptions};
use crate::record::Record;
use messier_core::Angle;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    records: Vec<Record>,
}

/// Result of [`Catalogue::nearest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    pub record: &'a Record,
    pub separation: Angle,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Removes the first record whose primary id is `id`.
    pub fn remove_by_id(&mut self, id: &str) -> CatalogueResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.primary_id() == id)
            .ok_or_else(|| CatalogueError::not_found(format!("no record with id {id}")))?;
        Ok(self.records.remove(index))
    }

    /// Removes the first record equal to `record` in every field.
    pub fn remove(&mut self, record: &Record) -> CatalogueResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r == record)
            .ok_or_else(|| {
                CatalogueError::not_found(format!("no record equal to {}", record.primary_id()))
            })?;
        Ok(self.records.remove(index))
    }

    /// Sorts brightest first. Records of equal magnitude keep their relative order.
    pub fn sort(&mut self) {
        self.records.sort_by(Record::cmp_brightness);
    }

    /// Records satisfying `predicate`, in catalogue order.
    pub fn filter<P>(&self, mut predicate: P) -> Catalogue
    where
        P: FnMut(&Record) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Records whose category equals `category` exactly.
    pub fn filter_by_category(&self, category: &str) -> Catalogue {
        self.filter(|r| r.category() == category)
    }

    /// Records whose region equals `region` exactly.
    pub fn filter_by_region(&self, region: &str) -> Catalogue {
        self.filter(|r| r.region() == region)
    }

    /// First record whose primary id is `id`.
    pub fn get_by_id(&self, id: &str) -> CatalogueResult<&Record> {
        self.records
            .iter()
            .find(|r| r.primary_id() == id)
            .ok_or_else(|| CatalogueError::not_found(format!("no record with id {id}")))
    }

    /// The record closest on the sky to `reference`.
    ///
    /// Records at exactly zero separation are skipped, so `reference` itself (and any
    /// record at the identical position) never comes back. `None` if nothing remains.
    pub fn nearest(&self, reference: &Record) -> Option<Neighbour<'_>> {
        let mut best: Option<Neighbour<'_>> = None;
        for record in &self.records {
            let separation = reference.angular_distance(record);
            if separation.radians() == 0.0 {
                continue;
            }
            if best.map_or(true, |b| separation.radians() < b.separation.radians()) {
                best = Some(Neighbour { record, separation });
            }
        }
        best
    }

    /// Record with the smallest `key`; the first one on ties.
    pub fn min_by_key<F>(&self, operation: &'static str, key: F) -> CatalogueResult<&Record>
    where
        F: Fn(&Record) -> f64,
    {
        self.extreme_by(operation, key, |candidate, best| candidate < best)
    }

    /// Record with the largest `key`; the first one on ties.
    pub fn max_by_key<F>(&self, operation: &'static str, key: F) -> CatalogueResult<&Record>
    where
        F: Fn(&Record) -> f64,
    {
        self.extreme_by(operation, key, |candidate, best| candidate > best)
    }

    /// Lowest magnitude.
    pub fn brightest(&self) -> CatalogueResult<&Record> {
        self.min_by_key("brightest", Record::magnitude)
    }

    /// Highest magnitude.
    pub fn faintest(&self) -> CatalogueResult<&Record> {
        self.max_by_key("faintest", Record::magnitude)
    }

    /// Largest upper distance bound.
    pub fn most_distant(&self) -> CatalogueResult<&Record> {
        self.max_by_key("most distant", Record::highest_distance)
    }

    pub fn lowest_declination(&self) -> CatalogueResult<&Record> {
        self.min_by_key("lowest declination", |r| r.declination().radians())
    }

    pub fn highest_declination(&self) -> CatalogueResult<&Record> {
        self.max_by_key("highest declination", |r| r.declination().radians())
    }

    /// Arithmetic mean of the magnitudes.
    pub fn mean_magnitude(&self) -> CatalogueResult<f64> {
        if self.records.is_empty() {
            return Err(CatalogueError::empty("mean magnitude"));
        }
        let sum: f64 = self.records.iter().map(Record::magnitude).sum();
        Ok(sum / self.records.len() as f64)
    }

    /// Canonical lines joined by `\n`, with no trailing newline.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn extreme_by<F, B>(
        &self,
        operation: &'static str,
        key: F,
        better: B,
    ) -> CatalogueResult<&Record>
    where
        F: Fn(&Record) -> f64,
        B: Fn(f64, f64) -> bool,
    {
        let mut iter = self.records.iter();
        let first = iter.next().ok_or_else(|| CatalogueError::empty(operation))?;
        let (best, _) = iter.fold((first, key(first)), |(best, best_key), record| {
            let k = key(record);
            if better(k, best_key) {
                (record, k)
            } else {
                (best, best_key)
            }
        });
        Ok(best)
    }
}

impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Parses one record per line, failing on the first bad line.
impl FromStr for Catalogue {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ingest_lines(s.lines(), &IngestOptions::default())?.catalogue)
    }
}

impl FromIterator<Record> for Catalogue {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for Catalogue {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Catalogue {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Catalogue {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
