use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct QrCodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QrCodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::qr_code::Model>, DbErr> {
        entity::prelude::QrCode::find_by_id(id).one(self.db).await
    }
}
