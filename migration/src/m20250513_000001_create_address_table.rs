use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(string(Address::Id).primary_key())
                    .col(string(Address::Country))
                    .col(string(Address::State))
                    .col(string(Address::City))
                    .col(string(Address::ZipCode))
                    .col(string(Address::Neighborhood))
                    .col(string_null(Address::Complement))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    Country,
    State,
    City,
    ZipCode,
    Neighborhood,
    Complement,
}
