//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::{Country, FetchError, JsonClient};
use crate::core::format::NumberLocale;
use crate::core::state::App;

/// A client that answers from a fixed table instead of the network.
pub struct FixtureClient {
    responses: HashMap<String, Result<Value, FetchError>>,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with(mut self, url: &str, response: Result<Value, FetchError>) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }
}

#[async_trait]
impl JsonClient for FixtureClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::HttpStatus { status: 404 }))
    }
}

/// Creates a test App pointed at a fake base URL.
pub fn test_app() -> App {
    App::new("http://countries.test".to_string(), NumberLocale::En)
}

/// Three records in the upstream's shape, in upstream order.
pub fn fixture_countries_json() -> Value {
    json!([
        {
            "cca3": "FRA",
            "name": {"common": "France", "official": "French Republic"},
            "flags": {"svg": "https://flagcdn.com/fr.svg", "png": "https://flagcdn.com/w320/fr.png"},
            "flag": "🇫🇷",
            "capital": ["Paris"],
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 67391582,
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
        },
        {
            "cca3": "JPN",
            "name": {"common": "Japan", "official": "Japan"},
            "flags": {"svg": "https://flagcdn.com/jp.svg"},
            "flag": "🇯🇵",
            "capital": ["Tokyo"],
            "region": "Asia",
            "subregion": "Eastern Asia",
            "population": 125836021,
            "currencies": {"JPY": {"name": "Japanese yen", "symbol": "¥"}}
        },
        {
            "cca3": "ATA",
            "name": {"common": "Antarctica", "official": "Antarctica"},
            "flags": {"svg": "https://flagcdn.com/aq.svg"},
            "flag": "🇦🇶",
            "region": "Antarctic",
            "population": 1000
        }
    ])
}

pub fn fixture_countries() -> Vec<Country> {
    serde_json::from_value(fixture_countries_json()).unwrap()
}

/// A small record with no currencies, population 12345.
pub fn fixture_small_country() -> Country {
    serde_json::from_value(json!({
        "cca3": "TST",
        "name": {"common": "Testland", "official": "Republic of Testland"},
        "flags": {"svg": "https://flagcdn.com/ts.svg"},
        "capital": ["Testville", "Second City"],
        "region": "Nowhere",
        "subregion": "Far Nowhere",
        "population": 12345
    }))
    .unwrap()
}
