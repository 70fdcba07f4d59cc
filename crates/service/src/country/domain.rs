use serde::{Deserialize, Serialize};

/// A catalog entry. `country_code` is the business key; `id` is assigned by
/// the store and stays `None` until the record has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub country_code: i32,
    pub country: String,
    pub city: String,
}

impl Country {
    pub fn new(country_code: i32, country: impl Into<String>, city: impl Into<String>) -> Self {
        Self { id: None, country_code, country: country.into(), city: city.into() }
    }
}

impl From<models::country::Model> for Country {
    fn from(m: models::country::Model) -> Self {
        Self { id: Some(m.id), country_code: m.country_code, country: m.country, city: m.city }
    }
}
