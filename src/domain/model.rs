use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One country as returned by the directory service.
///
/// Only the fields the explorer displays are typed. Everything else the
/// service sends is kept in `extra` so a cached record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn capital_line(&self) -> String {
        self.capital.join(", ")
    }

    pub fn languages_line(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn timezones_line(&self) -> String {
        self.timezones.join(", ")
    }

    /// First currency by ISO code, which is what the one-line display shows.
    pub fn primary_currency(&self) -> Option<&Currency> {
        self.currencies.values().next()
    }
}

impl Currency {
    /// `Euro (€)`, or just the name when the service gives no symbol.
    pub fn label(&self) -> String {
        match &self.symbol {
            Some(symbol) => format!("{} ({})", self.name, symbol),
            None => self.name.clone(),
        }
    }
}
