//! Filtering and group-by counts over the accumulated breweries.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::brewery::Brewery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Name,
    BreweryType,
    State,
    Country,
}

/// Active search criteria. `None` (or an empty name query) matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryFilter {
    pub name_query: String,
    pub brewery_type: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl BreweryFilter {
    /// Sets one predicate; an empty value unsets it ("All" in the selects).
    pub fn set(&mut self, kind: FilterKind, value: impl Into<String>) {
        let value = value.into();
        let exact = if value.is_empty() { None } else { Some(value.clone()) };
        match kind {
            FilterKind::Name => self.name_query = value,
            FilterKind::BreweryType => self.brewery_type = exact,
            FilterKind::State => self.state = exact,
            FilterKind::Country => self.country = exact,
        }
    }

    pub fn get(&self, kind: FilterKind) -> Option<&str> {
        match kind {
            FilterKind::Name => Some(self.name_query.as_str()).filter(|q| !q.is_empty()),
            FilterKind::BreweryType => self.brewery_type.as_deref(),
            FilterKind::State => self.state.as_deref(),
            FilterKind::Country => self.country.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unrestricted(&self) -> bool {
        self.name_query.is_empty() && self.brewery_type.is_none() && self.state.is_none() && self.country.is_none()
    }

    pub fn matches(&self, brewery: &Brewery) -> bool {
        self.matches_name(brewery)
            && exact_match(&self.brewery_type, &brewery.brewery_type)
            && exact_match(&self.state, &brewery.state)
            && exact_match(&self.country, &brewery.country)
    }

    fn matches_name(&self, brewery: &Brewery) -> bool {
        if self.name_query.is_empty() {
            return true;
        }
        brewery.name.to_lowercase().contains(&self.name_query.to_lowercase())
    }
}

// category/region/nation are enumerated codes: case-sensitive
fn exact_match(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
    }
}

/// Keeps the breweries passing every active predicate, in collection order.
pub fn apply_filters<'a>(breweries: &'a [Brewery], filter: &BreweryFilter) -> Vec<&'a Brewery> {
    if filter.is_unrestricted() {
        return breweries.iter().collect();
    }
    breweries.iter().filter(|brewery| filter.matches(brewery)).collect()
}

/// Attribute used to bucket breweries for the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupDimension {
    #[default]
    BreweryType,
    State,
    Country,
}

impl GroupDimension {
    pub const ALL: [GroupDimension; 3] = [GroupDimension::BreweryType, GroupDimension::State, GroupDimension::Country];

    /// Toggle order of the chart button: type, state, nation, back to type.
    pub fn next(self) -> Self {
        match self {
            GroupDimension::BreweryType => GroupDimension::State,
            GroupDimension::State => GroupDimension::Country,
            GroupDimension::Country => GroupDimension::BreweryType,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            GroupDimension::BreweryType => "type",
            GroupDimension::State => "state",
            GroupDimension::Country => "nation",
        }
    }

    /// Caption of the button that switches to the next dimension.
    pub fn toggle_label(self) -> &'static str {
        match self.next() {
            GroupDimension::BreweryType => "Show by Type",
            GroupDimension::State => "Show by US State",
            GroupDimension::Country => "Show by Nation",
        }
    }

    pub fn attribute(self, brewery: &Brewery) -> Option<&str> {
        match self {
            GroupDimension::BreweryType => brewery.brewery_type.as_deref(),
            GroupDimension::State => brewery.state.as_deref(),
            GroupDimension::Country => brewery.country.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketKey {
    Value(String),
    /// Attribute absent on the record.
    Unknown,
}

impl BucketKey {
    pub fn value(value: impl Into<String>) -> Self {
        BucketKey::Value(value.into())
    }
}

impl Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketKey::Value(value) => write!(f, "{value}"),
            BucketKey::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub key: BucketKey,
    pub count: u64,
}

impl ChartBucket {
    pub fn new(key: BucketKey, count: u64) -> Self {
        Self { key, count }
    }
}

/// Counts breweries per attribute value. Buckets come out in first-seen order.
pub fn group_by<'a>(breweries: impl IntoIterator<Item = &'a Brewery>, dimension: GroupDimension) -> Vec<ChartBucket> {
    let mut buckets: Vec<ChartBucket> = Vec::new();
    let mut positions: HashMap<BucketKey, usize> = HashMap::new();
    for brewery in breweries {
        let key = match dimension.attribute(brewery) {
            Some(value) => BucketKey::value(value),
            None => BucketKey::Unknown,
        };
        match positions.get(&key) {
            Some(&position) => buckets[position].count += 1,
            None => {
                positions.insert(key.clone(), buckets.len());
                buckets.push(ChartBucket::new(key, 1));
            }
        }
    }
    buckets
}
