use serde::{Deserialize, Serialize};

/// A country record as it appears on the wire.
///
/// Fields missing from an incoming JSON body deserialize to their empty
/// defaults; no validation beyond structural parsing is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub name: String,
    pub alpha2_code: String,
    pub capital: String,
    pub currencies: Vec<Currency>,
}

/// A currency carried inside a country's currency list. Pure value type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}
