//! Service layer for the country catalog.
//! - Decides which lookup strategy a set of filters maps to.
//! - Guards inserts, updates and deletes keyed by country code.
//! - Talks to storage only through the `CountryRepository` trait.

pub mod errors;
pub mod country;
#[cfg(test)]
pub mod test_support;
