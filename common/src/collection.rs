//! Append-only, insertion-ordered brewery collection keyed by id.

use std::collections::HashMap;

use crate::brewery::{Brewery, BreweryId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreweryCollection {
    records: Vec<Brewery>,
    // id -> position in `records`
    positions: HashMap<BreweryId, usize>,
}

impl BreweryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every candidate whose id is not already present, keeping response order.
    /// Returns the appended subset.
    pub fn merge(&mut self, candidates: impl IntoIterator<Item = Brewery>) -> Vec<Brewery> {
        let mut appended = Vec::new();
        for brewery in candidates {
            // also catches repeats inside this batch
            if self.positions.contains_key(&brewery.id) {
                continue;
            }
            self.positions.insert(brewery.id.clone(), self.records.len());
            appended.push(brewery.clone());
            self.records.push(brewery);
        }
        appended
    }

    pub fn contains(&self, id: &BreweryId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &BreweryId) -> Option<&Brewery> {
        self.positions.get(id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[Brewery] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brewery> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a BreweryCollection {
    type Item = &'a Brewery;
    type IntoIter = std::slice::Iter<'a, Brewery>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
