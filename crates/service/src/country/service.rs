use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::country::{validate_city_name, validate_country_name};

use super::domain::Country;
use super::query::{CountryFilter, CountryLookup};
use super::repository::CountryRepository;
use crate::errors::ServiceError;

/// Application service for the country catalog, independent of web framework.
///
/// Every operation re-reads the store; nothing is cached between calls.
/// Mutations are check-then-act. The guard's own check yields the typed
/// `Duplicate` / `NotFound` outcome, and a store that enforces the same
/// constraints (unique index, affected-row count) reports the same variants
/// when a concurrent request wins the race in between.
pub struct CountryService<R: CountryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CountryRepository + ?Sized> CountryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Multi-record lookup; an empty result is not an error.
    ///
    /// # Examples
    /// ```
    /// use service::country::{Country, CountryFilter, CountryService};
    /// use service::country::repo::InMemoryCountryRepository;
    /// use std::sync::Arc;
    /// let repo = InMemoryCountryRepository::default()
    ///     .with_rows([Country::new(31, "Netherlands", "Amsterdam"), Country::new(33, "France", "Paris")]);
    /// let svc = CountryService::new(Arc::new(repo));
    /// let found = tokio_test::block_on(svc.get_countries(&CountryFilter::default().country_prefix("F"))).unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].city, "Paris");
    /// ```
    #[instrument(skip(self))]
    pub async fn get_countries(&self, filter: &CountryFilter) -> Result<Vec<Country>, ServiceError> {
        let lookup = filter.resolve();
        debug!(?lookup, "resolved country lookup");
        match lookup {
            CountryLookup::ByCountryCode(code) => self.repo.list_by_country_code(code).await,
            CountryLookup::ByCountryOrCityPrefix { country, city } => {
                self.repo.list_by_country_or_city_prefix(country, city).await
            }
            CountryLookup::ByCountryPrefix(prefix) => self.repo.list_by_country_prefix(prefix).await,
            CountryLookup::ByCityPrefix(prefix) => self.repo.list_by_city_prefix(prefix).await,
            CountryLookup::All => self.repo.list().await,
        }
    }

    pub async fn find_by_country_code(&self, code: i32) -> Result<Country, ServiceError> {
        self.repo
            .get_by_country_code(code)
            .await?
            .ok_or_else(|| ServiceError::country_not_found(code))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Country, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::country_id_not_found(id))
    }

    /// Create a record for a code that is not yet in the catalog.
    ///
    /// # Examples
    /// ```
    /// use service::country::CountryService;
    /// use service::country::repo::InMemoryCountryRepository;
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = CountryService::new(Arc::new(InMemoryCountryRepository::default()));
    /// let created = tokio_test::block_on(svc.insert(81, "Japan", "Tokyo")).unwrap();
    /// assert_eq!(created.country_code, 81);
    /// let again = tokio_test::block_on(svc.insert(81, "Japan", "Osaka"));
    /// assert!(matches!(again, Err(ServiceError::Duplicate(_))));
    /// ```
    #[instrument(skip(self, country, city), fields(country_code = code))]
    pub async fn insert(&self, code: i32, country: &str, city: &str) -> Result<Country, ServiceError> {
        validate_country_name(country)?;
        validate_city_name(city)?;
        if let Some(existing) = self.repo.get_by_country_code(code).await? {
            debug!(country = %existing.country, "insert rejected: code taken");
            return Err(ServiceError::country_duplicated(code));
        }
        let created = self.repo.insert(&Country::new(code, country, city)).await?;
        info!(country_code = code, id = ?created.id, country = %created.country, "country_created");
        Ok(created)
    }

    /// Replace name and city of an existing record; the code never changes.
    #[instrument(skip(self, country, city), fields(country_code = code))]
    pub async fn update(&self, code: i32, country: &str, city: &str) -> Result<Country, ServiceError> {
        validate_country_name(country)?;
        validate_city_name(city)?;
        let mut record = self.find_existing(code).await?;
        record.country = country.to_string();
        record.city = city.to_string();
        self.repo.update(&record).await?;
        info!(country_code = code, country = %record.country, city = %record.city, "country_updated");
        Ok(record)
    }

    /// Remove a record and hand back the value it had just before removal.
    #[instrument(skip(self), fields(country_code = code))]
    pub async fn delete(&self, code: i32) -> Result<Country, ServiceError> {
        let record = self.find_existing(code).await?;
        self.repo.delete(&record).await?;
        info!(country_code = code, "country_deleted");
        Ok(record)
    }

    async fn find_existing(&self, code: i32) -> Result<Country, ServiceError> {
        match self.repo.get_by_country_code(code).await? {
            Some(record) => Ok(record),
            None => {
                debug!("mutation rejected: code absent");
                Err(ServiceError::country_not_found(code))
            }
        }
    }
}
