use serde::Deserialize;
use serde::Serialize;

use super::Fields;

/// A single byline author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub first: Option<String>,
    /// middle names, in byline order.
    #[serde(default)]
    pub middle: Vec<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub affiliation: Fields,
    #[serde(default)]
    pub email: Option<String>,
}
