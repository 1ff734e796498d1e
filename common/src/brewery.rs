//! Brewery records and the ingestion boundary for raw API payloads.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::fetch_error::FetchError;

const UNKNOWN: &str = "Unknown";

/// Opaque identifier assigned by the listing API. Sole deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreweryId(pub String);

impl BreweryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BreweryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// route segments need FromStr + Display
impl FromStr for BreweryId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for BreweryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brewery {
    pub id: BreweryId,
    pub name: String,
    pub brewery_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub website_url: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
}

impl Brewery {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: BreweryId::new(id),
            name: name.into(),
            brewery_type: None,
            city: None,
            state: None,
            country: None,
            phone: None,
            website_url: None,
            street: None,
            postal_code: None,
        }
    }

    pub fn with_brewery_type(mut self, brewery_type: impl Into<String>) -> Self {
        self.brewery_type = Some(brewery_type.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// "City, State" as shown on the brewery cards.
    pub fn location_line(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => format!("{UNKNOWN} location"),
        }
    }

    /// Prose description used on the detail page.
    pub fn description(&self) -> String {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN.to_string());
        let mut address = field(&self.street);
        if let Some(postal_code) = &self.postal_code {
            address = format!("{address} {postal_code}");
        }
        let mut text = format!(
            "This brewery is a {} brewery located in {} in the nation of {}. The address for this brewery is {}.",
            field(&self.brewery_type),
            self.location_line(),
            field(&self.country),
            address,
        );
        if let Some(phone) = &self.phone {
            text.push_str(&format!(" You can reach the brewery at {phone}."));
        }
        text
    }
}

/// Shape of one object as returned by the listing API.
#[derive(Debug, Deserialize)]
struct RawBrewery {
    id: String,
    name: String,
    brewery_type: Option<String>,
    city: Option<String>,
    state: Option<String>,
    state_province: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    website_url: Option<String>,
    street: Option<String>,
    address_1: Option<String>,
    postal_code: Option<String>,
}

impl RawBrewery {
    fn into_brewery(self) -> Result<Brewery, FetchError> {
        if self.id.trim().is_empty() {
            return Err(FetchError::MalformedResponse(format!("brewery {:?} has an empty id", self.name)));
        }
        Ok(Brewery {
            id: BreweryId(self.id),
            name: self.name,
            brewery_type: self.brewery_type,
            city: self.city,
            state: self.state.or(self.state_province),
            country: self.country,
            phone: self.phone,
            website_url: self.website_url,
            street: self.street.or(self.address_1),
            postal_code: self.postal_code,
        })
    }
}

/// Parses one page of the listing endpoint. A single malformed element rejects the page.
pub fn parse_brewery_page(body: &str) -> Result<Vec<Brewery>, FetchError> {
    let raw = serde_json::from_str::<Vec<RawBrewery>>(body)?;
    raw.into_iter().map(RawBrewery::into_brewery).collect()
}

/// Parses the single-record endpoint.
pub fn parse_brewery(body: &str) -> Result<Brewery, FetchError> {
    let raw = serde_json::from_str::<RawBrewery>(body)?;
    raw.into_brewery()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_with_missing_and_null_fields() {
        let body = r#"[
            {"id": "a1", "name": "Ale House", "brewery_type": "micro", "city": "Austin",
             "state": "Texas", "country": "United States", "phone": null, "longitude": -97.7},
            {"id": "b2", "name": "Hop Co"}
        ]"#;
        let page = parse_brewery_page(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, BreweryId::new("a1"));
        assert_eq!(page[0].state.as_deref(), Some("Texas"));
        assert_eq!(page[0].phone, None);
        assert_eq!(page[1].brewery_type, None);
        assert_eq!(page[1].country, None);
    }

    #[test]
    fn state_province_fills_missing_state() {
        let body = r#"{"id": "x", "name": "Bière", "state_province": "Bretagne", "country": "France"}"#;
        let brewery = parse_brewery(body).unwrap();
        assert_eq!(brewery.state.as_deref(), Some("Bretagne"));
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_brewery_page(r#"{"message": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn one_bad_element_rejects_whole_page() {
        let body = r#"[{"id": "a", "name": "Fine"}, {"name": "No Id"}]"#;
        assert!(matches!(parse_brewery_page(body), Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn rejects_empty_id() {
        let body = r#"[{"id": "  ", "name": "Blank"}]"#;
        assert!(matches!(parse_brewery_page(body), Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn empty_page_is_valid() {
        assert_eq!(parse_brewery_page("[]").unwrap(), vec![]);
    }

    #[test]
    fn location_line_handles_missing_parts() {
        let brewery = Brewery::new("1", "A").with_city("Austin");
        assert_eq!(brewery.location_line(), "Austin");
        assert_eq!(brewery.clone().with_state("Texas").location_line(), "Austin, Texas");
        assert_eq!(Brewery::new("2", "B").location_line(), "Unknown location");
    }

    #[test]
    fn description_mentions_type_and_country() {
        let mut brewery = Brewery::new("1", "Ale House")
            .with_brewery_type("micro")
            .with_city("Austin")
            .with_state("Texas")
            .with_country("United States");
        brewery.street = Some("1 Main St".to_string());
        brewery.postal_code = Some("78701".to_string());
        brewery.phone = Some("5125550100".to_string());
        assert_eq!(
            brewery.description(),
            "This brewery is a micro brewery located in Austin, Texas in the nation of United States. \
             The address for this brewery is 1 Main St 78701. You can reach the brewery at 5125550100."
        );
    }

    #[test]
    fn description_marks_missing_fields_as_unknown() {
        let brewery = Brewery::new("9", "Mystery Ales");
        assert_eq!(
            brewery.description(),
            "This brewery is a Unknown brewery located in Unknown location in the nation of Unknown. \
             The address for this brewery is Unknown."
        );
        assert!(!brewery.description().contains("unknown"));
    }
}
