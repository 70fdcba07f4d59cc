//! Create `countries` table.
//!
//! `id` is the store-assigned surrogate key; `country_code` is the business
//! key and carries its own unique constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(pk_auto(Countries::Id))
                    .col(integer_uniq(Countries::CountryCode))
                    .col(string_len(Countries::Country, 128).not_null())
                    .col(string_len(Countries::City, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Countries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Countries { Table, Id, CountryCode, Country, City }
