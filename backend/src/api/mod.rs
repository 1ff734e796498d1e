pub mod breweries;
