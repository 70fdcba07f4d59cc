//! In-memory store. Rows keep insertion order; ids are handed out sequentially.

use async_trait::async_trait;
use configs::PrefixMatch;
use tokio::sync::Mutex;

use crate::country::domain::Country;
use crate::country::query::matches_prefix;
use crate::country::repository::CountryRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Table {
    rows: Vec<Country>,
    next_id: i32,
}

impl Table {
    fn push(&mut self, mut record: Country) -> Country {
        self.next_id += 1;
        record.id = Some(self.next_id);
        self.rows.push(record.clone());
        record
    }
}

#[derive(Default)]
pub struct InMemoryCountryRepository {
    table: Mutex<Table>,
    prefix_match: PrefixMatch,
}

impl InMemoryCountryRepository {
    pub fn new(prefix_match: PrefixMatch) -> Self {
        Self { table: Mutex::default(), prefix_match }
    }

    /// Seed rows before the store is shared. Duplicate codes are skipped.
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Country>) -> Self {
        let table = self.table.get_mut();
        for row in rows {
            if !table.rows.iter().any(|r| r.country_code == row.country_code) {
                table.push(row);
            }
        }
        self
    }

    async fn select(&self, pred: impl Fn(&Country) -> bool) -> Vec<Country> {
        let table = self.table.lock().await;
        table.rows.iter().filter(|r| pred(r)).cloned().collect()
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, ServiceError> {
        Ok(self.select(|_| true).await)
    }

    async fn list_by_country_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let mode = self.prefix_match;
        Ok(self.select(|r| matches_prefix(mode, &r.country, prefix)).await)
    }

    async fn list_by_city_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let mode = self.prefix_match;
        Ok(self.select(|r| matches_prefix(mode, &r.city, prefix)).await)
    }

    async fn list_by_country_or_city_prefix(&self, country_prefix: &str, city_prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let mode = self.prefix_match;
        Ok(self
            .select(|r| matches_prefix(mode, &r.country, country_prefix) || matches_prefix(mode, &r.city, city_prefix))
            .await)
    }

    async fn list_by_country_code(&self, code: i32) -> Result<Vec<Country>, ServiceError> {
        Ok(self.select(|r| r.country_code == code).await)
    }

    async fn get_by_country_code(&self, code: i32) -> Result<Option<Country>, ServiceError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|r| r.country_code == code).cloned())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, ServiceError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|r| r.id == Some(id)).cloned())
    }

    async fn insert(&self, record: &Country) -> Result<Country, ServiceError> {
        let mut table = self.table.lock().await;
        if table.rows.iter().any(|r| r.country_code == record.country_code) {
            return Err(ServiceError::country_duplicated(record.country_code));
        }
        Ok(table.push(record.clone()))
    }

    async fn update(&self, record: &Country) -> Result<(), ServiceError> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.country_code == record.country_code)
            .ok_or_else(|| ServiceError::country_not_found(record.country_code))?;
        row.country = record.country.clone();
        row.city = record.city.clone();
        Ok(())
    }

    async fn delete(&self, record: &Country) -> Result<(), ServiceError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.country_code != record.country_code);
        if table.rows.len() == before {
            return Err(ServiceError::country_not_found(record.country_code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(mode: PrefixMatch) -> InMemoryCountryRepository {
        InMemoryCountryRepository::new(mode).with_rows([
            Country::new(31, "Netherlands", "Amsterdam"),
            Country::new(33, "France", "Paris"),
            Country::new(49, "Germany", "Berlin"),
        ])
    }

    fn codes(rows: &[Country]) -> Vec<i32> {
        rows.iter().map(|r| r.country_code).collect()
    }

    #[tokio::test]
    async fn seeding_assigns_sequential_ids_and_skips_duplicates() {
        let repo = store(PrefixMatch::CaseSensitive).with_rows([Country::new(31, "Dup", "Dup")]);
        let rows = repo.list().await.unwrap();
        assert_eq!(codes(&rows), vec![31, 33, 49]);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn prefix_lookups_follow_match_mode() {
        let strict = store(PrefixMatch::CaseSensitive);
        assert_eq!(codes(&strict.list_by_country_prefix("G").await.unwrap()), vec![49]);
        assert!(strict.list_by_country_prefix("g").await.unwrap().is_empty());

        let loose = store(PrefixMatch::IgnoreCase);
        assert_eq!(codes(&loose.list_by_country_prefix("g").await.unwrap()), vec![49]);
        assert_eq!(codes(&loose.list_by_city_prefix("PA").await.unwrap()), vec![33]);
    }

    #[tokio::test]
    async fn union_lookup_keeps_store_order() {
        let repo = store(PrefixMatch::CaseSensitive);
        let rows = repo.list_by_country_or_city_prefix("G", "A").await.unwrap();
        assert_eq!(codes(&rows), vec![31, 49]);
    }

    #[tokio::test]
    async fn wildcard_characters_are_literal() {
        let repo = InMemoryCountryRepository::default().with_rows([Country::new(1, "100% Land", "_City")]);
        assert!(repo.list_by_country_prefix("%").await.unwrap().is_empty());
        assert_eq!(repo.list_by_city_prefix("_").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_existing_code() {
        let repo = store(PrefixMatch::CaseSensitive);
        let err = repo.insert(&Country::new(33, "France", "Lyon")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = store(PrefixMatch::CaseSensitive);
        let ghost = Country::new(7, "Russia", "Moscow");
        assert!(matches!(repo.update(&ghost).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(repo.delete(&ghost).await, Err(ServiceError::NotFound(_))));

        let mut nl = repo.get_by_country_code(31).await.unwrap().unwrap();
        nl.city = "Rotterdam".into();
        repo.update(&nl).await.unwrap();
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().city, "Rotterdam");

        repo.delete(&nl).await.unwrap();
        assert!(repo.get_by_country_code(31).await.unwrap().is_none());
    }
}
