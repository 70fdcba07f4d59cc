//! Country catalog: domain, query resolution, repository abstraction and service.

pub mod domain;
pub mod query;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Country;
pub use query::{CountryFilter, CountryLookup};
pub use repository::CountryRepository;
pub use service::CountryService;
