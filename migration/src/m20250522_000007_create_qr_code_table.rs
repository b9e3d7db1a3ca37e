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
                    .table(QrCode::Table)
                    .if_not_exists()
                    .col(string(QrCode::Id).primary_key())
                    .col(string_null(QrCode::VehicleId))
                    .col(string(QrCode::YardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qr_code_vehicle_id")
                            .from(QrCode::Table, QrCode::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qr_code_yard_id")
                            .from(QrCode::Table, QrCode::YardId)
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
            .drop_table(Table::drop().table(QrCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QrCode {
    Table,
    Id,
    VehicleId,
    YardId,
}
