use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub plate: String,
    pub model_id: String,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_model::Entity",
        from = "Column::ModelId",
        to = "super::vehicle_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    VehicleModel,
    #[sea_orm(has_many = "super::yard_vehicle::Entity")]
    YardVehicle,
    #[sea_orm(has_many = "super::qr_code::Entity")]
    QrCode,
}

impl Related<super::vehicle_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModel.def()
    }
}

impl Related<super::yard_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YardVehicle.def()
    }
}

impl Related<super::qr_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QrCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
