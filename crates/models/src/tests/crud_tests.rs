use crate::country;
use crate::db::connect;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use anyhow::Result;
use migration::MigratorTrait;

use super::db_tests_enabled;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Codes far outside the ITU range so parallel runs do not collide with real data
fn scratch_code(offset: i32) -> i32 {
    900_000 + (std::process::id() as i32 % 10_000) * 10 + offset
}

#[tokio::test]
async fn test_country_crud() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    let code = scratch_code(1);
    country::Entity::delete_many().filter(country::Column::CountryCode.eq(code)).exec(&db).await?;

    // Create
    let created = country::ActiveModel {
        country_code: Set(code),
        country: Set("Netherlands".into()),
        city: Set("Amsterdam".into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);
    assert_eq!(created.country_code, code);

    // Read by business key
    let found = country::Entity::find()
        .filter(country::Column::CountryCode.eq(code))
        .one(&db)
        .await?
        .expect("inserted row");
    assert_eq!(found, created);

    // Update
    let mut am: country::ActiveModel = found.into();
    am.city = Set("Rotterdam".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.city, "Rotterdam");
    assert_eq!(updated.country_code, code);

    // Delete
    country::Entity::delete_by_id(updated.id).exec(&db).await?;
    assert!(country::Entity::find_by_id(updated.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_country_code_unique_constraint() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    let code = scratch_code(2);
    country::Entity::delete_many().filter(country::Column::CountryCode.eq(code)).exec(&db).await?;

    let first = country::ActiveModel {
        country_code: Set(code),
        country: Set("France".into()),
        city: Set("Paris".into()),
        ..Default::default()
    };
    first.insert(&db).await?;

    let second = country::ActiveModel {
        country_code: Set(code),
        country: Set("France".into()),
        city: Set("Lyon".into()),
        ..Default::default()
    };
    let err = second.insert(&db).await.expect_err("duplicate code must be rejected");
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));

    country::Entity::delete_many().filter(country::Column::CountryCode.eq(code)).exec(&db).await?;
    Ok(())
}
