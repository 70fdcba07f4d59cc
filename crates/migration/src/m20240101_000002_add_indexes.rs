use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Prefix scans on country name
        manager
            .create_index(
                Index::create()
                    .name("idx_countries_country")
                    .table(Countries::Table)
                    .col(Countries::Country)
                    .to_owned(),
            )
            .await?;

        // Prefix scans on city name
        manager
            .create_index(
                Index::create()
                    .name("idx_countries_city")
                    .table(Countries::Table)
                    .col(Countries::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_countries_country").table(Countries::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_countries_city").table(Countries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Countries { Table, Country, City }
