use async_trait::async_trait;

use super::domain::Country;
use crate::errors::ServiceError;

/// Record store consumed by [`CountryService`](super::CountryService).
///
/// Multi-record methods return rows in store order. `update` and `delete`
/// identify the row by `country_code` and report `NotFound` when no row was
/// affected; `insert` reports `Duplicate` when the store's own uniqueness
/// constraint rejects the code.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Country>, ServiceError>;
    async fn list_by_country_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError>;
    async fn list_by_city_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError>;
    async fn list_by_country_or_city_prefix(&self, country_prefix: &str, city_prefix: &str) -> Result<Vec<Country>, ServiceError>;
    async fn list_by_country_code(&self, code: i32) -> Result<Vec<Country>, ServiceError>;

    async fn get_by_country_code(&self, code: i32) -> Result<Option<Country>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, ServiceError>;

    /// Persist a new record and return it as stored (with its `id`).
    async fn insert(&self, record: &Country) -> Result<Country, ServiceError>;
    async fn update(&self, record: &Country) -> Result<(), ServiceError>;
    async fn delete(&self, record: &Country) -> Result<(), ServiceError>;
}
