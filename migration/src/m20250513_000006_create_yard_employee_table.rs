use sea_orm_migration::{prelude::*, schema::*};

use super::m20250513_000002_create_yard_table::Yard;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(YardEmployee::Table)
                    .if_not_exists()
                    .col(string(YardEmployee::Id).primary_key())
                    .col(string(YardEmployee::Name))
                    .col(string(YardEmployee::ImageUrl))
                    .col(string_len(YardEmployee::Role, 16))
                    .col(string(YardEmployee::UserId))
                    .col(string(YardEmployee::YardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yard_employee_yard_id")
                            .from(YardEmployee::Table, YardEmployee::YardId)
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
            .drop_table(Table::drop().table(YardEmployee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum YardEmployee {
    Table,
    Id,
    Name,
    ImageUrl,
    Role,
    UserId,
    YardId,
}
