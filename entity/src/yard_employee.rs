use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EmployeeRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "yard_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub role: EmployeeRole,
    pub user_id: String,
    pub yard_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::yard::Entity",
        from = "Column::YardId",
        to = "super::yard::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Yard,
}

impl Related<super::yard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
