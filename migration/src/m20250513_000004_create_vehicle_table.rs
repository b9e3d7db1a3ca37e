use sea_orm_migration::{prelude::*, schema::*};

use super::m20250513_000003_create_vehicle_model_table::VehicleModel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(string(Vehicle::Id).primary_key())
                    .col(string(Vehicle::Plate))
                    .col(string(Vehicle::ModelId))
                    .col(string(Vehicle::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_model_id")
                            .from(Vehicle::Table, Vehicle::ModelId)
                            .to(VehicleModel::Table, VehicleModel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Plate,
    ModelId,
    UserId,
}
