use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "yard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    #[sea_orm(unique)]
    pub address_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Address,
    #[sea_orm(has_many = "super::yard_employee::Entity")]
    YardEmployee,
    #[sea_orm(has_many = "super::yard_vehicle::Entity")]
    YardVehicle,
    #[sea_orm(has_many = "super::qr_code::Entity")]
    QrCode,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::yard_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YardEmployee.def()
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
