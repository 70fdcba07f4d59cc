use configs::PrefixMatch;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select, Set,
    SqlErr,
};

use models::country;

use crate::country::domain::Country;
use crate::country::query::like_prefix_pattern;
use crate::country::repository::CountryRepository;
use crate::errors::ServiceError;

/// PostgreSQL-backed store. Uniqueness of `country_code` is enforced by the
/// table's unique index as well as by the service's pre-insert check.
pub struct SeaOrmCountryRepository {
    pub db: DatabaseConnection,
    pub prefix_match: PrefixMatch,
}

impl SeaOrmCountryRepository {
    pub fn new(db: DatabaseConnection, prefix_match: PrefixMatch) -> Self {
        Self { db, prefix_match }
    }

    fn prefix_condition(&self, column: country::Column, prefix: &str) -> SimpleExpr {
        let pattern = like_prefix_pattern(prefix);
        match self.prefix_match {
            PrefixMatch::CaseSensitive => {
                Expr::col((country::Entity, column)).like(LikeExpr::new(pattern).escape('\\'))
            }
            PrefixMatch::IgnoreCase => Expr::expr(Func::lower(Expr::col((country::Entity, column))))
                .like(LikeExpr::new(pattern.to_lowercase()).escape('\\')),
        }
    }

    async fn fetch(&self, query: Select<country::Entity>) -> Result<Vec<Country>, ServiceError> {
        let rows = query.order_by_asc(country::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Country::from).collect())
    }
}

fn map_insert_err(e: DbErr, code: i32) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::country_duplicated(code),
        _ => ServiceError::Db(e.to_string()),
    }
}

#[async_trait::async_trait]
impl CountryRepository for SeaOrmCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, ServiceError> {
        self.fetch(country::Entity::find()).await
    }

    async fn list_by_country_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let cond = self.prefix_condition(country::Column::Country, prefix);
        self.fetch(country::Entity::find().filter(cond)).await
    }

    async fn list_by_city_prefix(&self, prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let cond = self.prefix_condition(country::Column::City, prefix);
        self.fetch(country::Entity::find().filter(cond)).await
    }

    async fn list_by_country_or_city_prefix(&self, country_prefix: &str, city_prefix: &str) -> Result<Vec<Country>, ServiceError> {
        let cond = Condition::any()
            .add(self.prefix_condition(country::Column::Country, country_prefix))
            .add(self.prefix_condition(country::Column::City, city_prefix));
        self.fetch(country::Entity::find().filter(cond)).await
    }

    async fn list_by_country_code(&self, code: i32) -> Result<Vec<Country>, ServiceError> {
        self.fetch(country::Entity::find().filter(country::Column::CountryCode.eq(code))).await
    }

    async fn get_by_country_code(&self, code: i32) -> Result<Option<Country>, ServiceError> {
        let found = country::Entity::find()
            .filter(country::Column::CountryCode.eq(code))
            .one(&self.db)
            .await?;
        Ok(found.map(Country::from))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, ServiceError> {
        let found = country::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Country::from))
    }

    async fn insert(&self, record: &Country) -> Result<Country, ServiceError> {
        let am = country::ActiveModel {
            country_code: Set(record.country_code),
            country: Set(record.country.clone()),
            city: Set(record.city.clone()),
            ..Default::default()
        };
        let created = am.insert(&self.db).await.map_err(|e| map_insert_err(e, record.country_code))?;
        Ok(Country::from(created))
    }

    async fn update(&self, record: &Country) -> Result<(), ServiceError> {
        let res = country::Entity::update_many()
            .col_expr(country::Column::Country, Expr::value(record.country.clone()))
            .col_expr(country::Column::City, Expr::value(record.city.clone()))
            .filter(country::Column::CountryCode.eq(record.country_code))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::country_not_found(record.country_code));
        }
        Ok(())
    }

    async fn delete(&self, record: &Country) -> Result<(), ServiceError> {
        let res = country::Entity::delete_many()
            .filter(country::Column::CountryCode.eq(record.country_code))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::country_not_found(record.country_code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    /// Codes kept away from real dialling codes and from other test modules.
    fn scratch_code(offset: i32) -> i32 {
        800_000 + (std::process::id() as i32 % 10_000) * 10 + offset
    }

    async fn purge(db: &DatabaseConnection, codes: &[i32]) -> Result<(), anyhow::Error> {
        country::Entity::delete_many()
            .filter(country::Column::CountryCode.is_in(codes.iter().copied()))
            .exec(db)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let code = scratch_code(1);
        purge(&db, &[code]).await?;
        let repo = SeaOrmCountryRepository::new(db.clone(), PrefixMatch::CaseSensitive);

        let stored = repo.insert(&Country::new(code, "Zz%Land", "Zz_Town")).await?;
        assert!(stored.id.is_some());
        assert_eq!(repo.get_by_country_code(code).await?, Some(stored.clone()));
        assert_eq!(repo.get_by_id(stored.id.unwrap()).await?, Some(stored.clone()));

        let dup = repo.insert(&Country::new(code, "Other", "Other")).await.unwrap_err();
        assert!(matches!(dup, ServiceError::Duplicate(_)));

        // `%` in the prefix is literal: "Zz%" matches, "Zz" + any char does not
        let hits = repo.list_by_country_prefix("Zz%").await?;
        assert_eq!(hits.iter().filter(|c| c.country_code == code).count(), 1);
        let miss = repo.list_by_country_prefix("Zz_L").await?;
        assert!(miss.iter().all(|c| c.country_code != code));

        let mut changed = stored.clone();
        changed.city = "Zz New Town".into();
        repo.update(&changed).await?;
        assert_eq!(repo.get_by_country_code(code).await?.unwrap().city, "Zz New Town");

        repo.delete(&changed).await?;
        assert!(repo.get_by_country_code(code).await?.is_none());
        assert!(matches!(repo.delete(&changed).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(repo.update(&changed).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_ignore_case_union() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let (a, b) = (scratch_code(2), scratch_code(3));
        purge(&db, &[a, b]).await?;
        let repo = SeaOrmCountryRepository::new(db.clone(), PrefixMatch::IgnoreCase);

        repo.insert(&Country::new(a, "Qqland", "Elsewhere")).await?;
        repo.insert(&Country::new(b, "Elsewhere", "Qqcity")).await?;

        let rows = repo.list_by_country_or_city_prefix("qqL", "QQC").await?;
        let mine: Vec<i32> = rows.iter().map(|c| c.country_code).filter(|c| *c == a || *c == b).collect();
        assert_eq!(mine, vec![a, b]);

        purge(&db, &[a, b]).await?;
        Ok(())
    }
}
