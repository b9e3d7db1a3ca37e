use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "qr_code")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: Option<String>,
    pub yard_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::yard::Entity",
        from = "Column::YardId",
        to = "super::yard::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Yard,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::yard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
