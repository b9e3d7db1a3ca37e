use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::yard::Entity")]
    Yard,
}

impl Related<super::yard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
