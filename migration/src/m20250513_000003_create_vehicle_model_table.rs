use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleModel::Table)
                    .if_not_exists()
                    .col(string(VehicleModel::Id).primary_key())
                    .col(string(VehicleModel::Name))
                    .col(integer(VehicleModel::Year))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleModel {
    Table,
    Id,
    Name,
    Year,
}
