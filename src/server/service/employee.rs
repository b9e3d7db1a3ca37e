use sea_orm::DatabaseConnection;

use crate::server::{
    data::{employee::YardEmployeeRepository, yard::YardRepository},
    error::AppError,
    model::{
        employee::{CreateYardEmployeeParams, UpdateYardEmployeeParams, YardEmployee},
        page::{PageRequest, PageResult},
    },
};

pub struct YardEmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> YardEmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an employee to an existing yard.
    ///
    /// # Returns
    /// - `Ok(YardEmployee)` - Created employee
    /// - `Err(AppError::NotFound)` - Yard does not exist
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn create(&self, params: CreateYardEmployeeParams) -> Result<YardEmployee, AppError> {
        if !YardRepository::new(self.db).exists(&params.yard_id).await? {
            return Err(AppError::NotFound(format!(
                "Yard {} not found",
                params.yard_id
            )));
        }

        let employee = YardEmployeeRepository::new(self.db).create(params).await?;

        tracing::info!(employee_id = %employee.id, yard_id = %employee.yard_id, "Created employee");

        Ok(employee)
    }

    /// Gets an employee only if it belongs to the given yard
    pub async fn get_in_yard(
        &self,
        yard_id: &str,
        id: &str,
    ) -> Result<Option<YardEmployee>, AppError> {
        let employee = YardEmployeeRepository::new(self.db).get_by_id(id).await?;

        Ok(employee.filter(|e| e.yard_id == yard_id))
    }

    pub async fn get_paginated(
        &self,
        yard_id: &str,
        page: PageRequest,
    ) -> Result<PageResult<YardEmployee>, AppError> {
        Ok(YardEmployeeRepository::new(self.db)
            .get_by_yard_paginated(yard_id, page)
            .await?)
    }

    /// Updates an employee's own fields.
    /// Returns None if it doesn't exist or doesn't belong to the yard
    pub async fn update(
        &self,
        yard_id: &str,
        id: &str,
        params: UpdateYardEmployeeParams,
    ) -> Result<Option<YardEmployee>, AppError> {
        if self.get_in_yard(yard_id, id).await?.is_none() {
            return Ok(None);
        }

        Ok(YardEmployeeRepository::new(self.db).update(id, params).await?)
    }

    /// Removes an employee from a yard.
    /// Returns false if not found or doesn't belong to the yard
    pub async fn delete(&self, yard_id: &str, id: &str) -> Result<bool, AppError> {
        if self.get_in_yard(yard_id, id).await?.is_none() {
            return Ok(false);
        }

        Ok(YardEmployeeRepository::new(self.db).delete(id).await?)
    }
}
