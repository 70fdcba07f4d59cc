//! Filter resolution for `GET /countries`.
//!
//! A request carries up to three optional filters. Exactly one lookup
//! strategy is chosen from them, in this order:
//!
//! 1. country code
//! 2. country prefix **or** city prefix (both given, union of matches)
//! 3. country prefix
//! 4. city prefix
//! 5. everything

use configs::PrefixMatch;

/// Optional filters for a multi-record lookup. Blank prefixes are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    pub country_code: Option<i32>,
    pub country_starts_with: Option<String>,
    pub city_starts_with: Option<String>,
}

/// The single retrieval strategy a filter resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryLookup<'a> {
    ByCountryCode(i32),
    ByCountryOrCityPrefix { country: &'a str, city: &'a str },
    ByCountryPrefix(&'a str),
    ByCityPrefix(&'a str),
    All,
}

impl CountryFilter {
    pub fn new(
        country_code: Option<i32>,
        country_starts_with: Option<String>,
        city_starts_with: Option<String>,
    ) -> Self {
        Self {
            country_code,
            country_starts_with: country_starts_with.filter(|s| !s.is_empty()),
            city_starts_with: city_starts_with.filter(|s| !s.is_empty()),
        }
    }

    pub fn by_code(code: i32) -> Self {
        Self { country_code: Some(code), ..Self::default() }
    }

    pub fn country_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.country_starts_with = Some(prefix.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn city_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.city_starts_with = Some(prefix.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn resolve(&self) -> CountryLookup<'_> {
        let country = self.country_starts_with.as_deref().filter(|s| !s.is_empty());
        let city = self.city_starts_with.as_deref().filter(|s| !s.is_empty());
        match (self.country_code, country, city) {
            (Some(code), _, _) => CountryLookup::ByCountryCode(code),
            (None, Some(country), Some(city)) => CountryLookup::ByCountryOrCityPrefix { country, city },
            (None, Some(country), None) => CountryLookup::ByCountryPrefix(country),
            (None, None, Some(city)) => CountryLookup::ByCityPrefix(city),
            (None, None, None) => CountryLookup::All,
        }
    }
}

/// Literal left-anchored prefix test, as the in-memory store applies it.
pub fn matches_prefix(mode: PrefixMatch, value: &str, prefix: &str) -> bool {
    match mode {
        PrefixMatch::CaseSensitive => value.starts_with(prefix),
        PrefixMatch::IgnoreCase => value.to_lowercase().starts_with(&prefix.to_lowercase()),
    }
}

/// Build a `LIKE` pattern that matches `prefix` literally, escaping with `\`.
pub fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
