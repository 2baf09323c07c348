//! # REST Countries Types
//!
//! Serde shapes for the records returned by the upstream API. Only the
//! fields the views read are modelled; unknown fields are ignored.
//!
//! Both endpoints return a JSON array of these records. The list endpoint
//! is asked for a reduced field set, so everything except `cca3` and `name`
//! falls back to a default when absent.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, unique per record.
    pub cca3: String,
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    /// Flag emoji, e.g. "🇫🇷".
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub currencies: Option<Currencies>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    /// Upstream's description of the flag's design.
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Currencies keyed by code, in the order the upstream listed them.
///
/// Relies on serde_json's `preserve_order` so the order survives the
/// intermediate `Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Currencies(pub Vec<(String, Currency)>);

impl Currencies {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Currency)> {
        self.0.iter().map(|(code, currency)| (code.as_str(), currency))
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.iter().find(|(c, _)| *c == code).map(|(_, currency)| currency)
    }
}

impl<'de> Deserialize<'de> for Currencies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Currencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of currency code to currency")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Currencies, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, currency)) = map.next_entry::<String, Currency>()? {
                    entries.push((code, currency));
                }
                Ok(Currencies(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

impl Country {
    /// Capital cities joined with ", ", or an empty string when absent.
    pub fn capital_label(&self) -> String {
        self.capital
            .as_deref()
            .map(|caps| caps.join(", "))
            .unwrap_or_default()
    }

    /// The flag emoji if the record carries one, else the alpha-3 code in brackets.
    pub fn flag_label(&self) -> String {
        match self.flag.as_deref() {
            Some(flag) if !flag.is_empty() => flag.to_string(),
            _ => format!("[{}]", self.cca3),
        }
    }
}

impl Currency {
    /// "Euro (€)", or just the name when the upstream omits a symbol.
    pub fn label(&self) -> String {
        match self.symbol.as_deref() {
            Some(symbol) => format!("{} ({})", self.name, symbol),
            None => self.name.clone(),
        }
    }
}
