use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::yard::YardRepository,
    error::AppError,
    model::{
        page::{PageRequest, PageResult},
        yard::{CreateYardParams, UpdateYardParams, Yard},
    },
    service::aggregate::AggregateCreationCoordinator,
};

pub struct YardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> YardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a yard together with its address
    pub async fn create(&self, params: CreateYardParams) -> Result<Yard, AppError> {
        AggregateCreationCoordinator::new(self.db)
            .create_yard(params)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Yard>, AppError> {
        Ok(YardRepository::new(self.db).get_by_id(id).await?)
    }

    /// Checks whether a yard exists, for routes nested under a yard
    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(YardRepository::new(self.db).exists(id).await?)
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<PageResult<Yard>, AppError> {
        Ok(YardRepository::new(self.db).get_paginated(page).await?)
    }

    /// Updates a yard's owner.
    /// Returns None if the yard doesn't exist
    pub async fn update(
        &self,
        id: &str,
        params: UpdateYardParams,
    ) -> Result<Option<Yard>, AppError> {
        Ok(YardRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a yard along with its address and everything it owns.
    ///
    /// Employees, yard vehicles, QR codes, the yard row and its address row are
    /// removed in one transaction. Vehicles themselves are kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Yard deleted
    /// - `Ok(false)` - Yard not found
    /// - `Err(AppError::DbErr)` - Delete failed and was rolled back
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        match YardRepository::new(&txn).delete(id).await {
            Ok(deleted) => {
                txn.commit().await?;
                if deleted {
                    tracing::info!(yard_id = %id, "Deleted yard");
                }
                Ok(deleted)
            }
            Err(err) => {
                tracing::warn!(yard_id = %id, error = %err, "Rolling back yard deletion");
                txn.rollback().await?;
                Err(err.into())
            }
        }
    }
}
