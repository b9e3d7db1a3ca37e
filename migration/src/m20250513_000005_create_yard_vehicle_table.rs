use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250513_000002_create_yard_table::Yard, m20250513_000004_create_vehicle_table::Vehicle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(YardVehicle::Table)
                    .if_not_exists()
                    .col(string(YardVehicle::Id).primary_key())
                    .col(string_len(YardVehicle::Status, 16))
                    .col(timestamp_with_time_zone(YardVehicle::EnteredAt))
                    .col(timestamp_with_time_zone_null(YardVehicle::LeftAt))
                    .col(string(YardVehicle::VehicleId))
                    .col(string(YardVehicle::YardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yard_vehicle_vehicle_id")
                            .from(YardVehicle::Table, YardVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yard_vehicle_yard_id")
                            .from(YardVehicle::Table, YardVehicle::YardId)
                            .to(Yard::Table, Yard::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(YardVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum YardVehicle {
    Table,
    Id,
    Status,
    EnteredAt,
    LeftAt,
    VehicleId,
    YardId,
}
