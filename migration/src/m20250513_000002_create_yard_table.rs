use sea_orm_migration::{prelude::*, schema::*};

use super::m20250513_000001_create_address_table::Address;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Yard::Table)
                    .if_not_exists()
                    .col(string(Yard::Id).primary_key())
                    .col(string(Yard::OwnerId))
                    .col(string_uniq(Yard::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yard_address_id")
                            .from(Yard::Table, Yard::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Yard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Yard {
    Table,
    Id,
    OwnerId,
    AddressId,
}
