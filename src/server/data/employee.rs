use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        employee::{CreateYardEmployeeParams, UpdateYardEmployeeParams, YardEmployee},
        page::{PageRequest, PageResult},
    },
    util::id::{generate_id, EMPLOYEE_PREFIX},
};

pub struct YardEmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YardEmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new employee with a generated id
    pub async fn create(&self, params: CreateYardEmployeeParams) -> Result<YardEmployee, DbErr> {
        let employee = entity::yard_employee::ActiveModel {
            id: ActiveValue::Set(generate_id(EMPLOYEE_PREFIX)),
            name: ActiveValue::Set(params.name),
            image_url: ActiveValue::Set(params.image_url),
            role: ActiveValue::Set(params.role),
            user_id: ActiveValue::Set(params.user_id),
            yard_id: ActiveValue::Set(params.yard_id),
        }
        .insert(self.db)
        .await?;

        Ok(YardEmployee::from_entity(employee))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<YardEmployee>, DbErr> {
        let employee = entity::prelude::YardEmployee::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(employee.map(YardEmployee::from_entity))
    }

    /// Gets one page of a yard's employees ordered by ID
    pub async fn get_by_yard_paginated(
        &self,
        yard_id: &str,
        page: PageRequest,
    ) -> Result<PageResult<YardEmployee>, DbErr> {
        let paginator = entity::prelude::YardEmployee::find()
            .filter(entity::yard_employee::Column::YardId.eq(yard_id))
            .order_by_asc(entity::yard_employee::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let employees = match page.index_within(total) {
            Some(index) => paginator.fetch_page(index).await?,
            None => Vec::new(),
        };

        Ok(PageResult::paginate(
            total,
            page.page_number,
            page.page_size,
            employees.into_iter().map(YardEmployee::from_entity).collect(),
        ))
    }

    /// Updates an employee's own fields.
    ///
    /// Fields left as `None` are not changed.
    ///
    /// # Returns
    /// - `Ok(Some(YardEmployee))` - Updated employee
    /// - `Ok(None)` - No employee with that ID
    /// - `Err(DbErr)` - Query or update failed
    pub async fn update(
        &self,
        id: &str,
        params: UpdateYardEmployeeParams,
    ) -> Result<Option<YardEmployee>, DbErr> {
        let Some(employee) = entity::prelude::YardEmployee::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::yard_employee::ActiveModel = employee.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(user_id) = params.user_id {
            active_model.user_id = ActiveValue::Set(user_id);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            employee
        };

        Ok(Some(YardEmployee::from_entity(updated)))
    }

    /// Deletes an employee, returning whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::YardEmployee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
