//! Listing API defaults and the option lists offered by the filter controls.

pub const DEFAULT_BREWERY_API_URL: &str = "https://api.openbrewerydb.org/v1/breweries";

/// The listing API caps `per_page` at 200.
pub const MAX_PER_PAGE: u32 = 200;
pub const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;

pub const FIRST_PAGE: u64 = 1;

pub const BREWERY_TYPES: &[&str] = &[
    "micro", "nano", "regional", "brewpub", "large", "planning", "bar", "contract", "proprietor", "closed",
];

pub const US_STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut", "Delaware",
    "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky",
    "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota", "Mississippi",
    "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey", "New Mexico",
    "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania",
    "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont",
    "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

pub const NATIONS: &[&str] = &[
    "Austria", "England", "France", "Isle of Man", "Ireland", "Poland", "Portugal",
    "Scotland", "Singapore", "South Korea", "United States",
];
