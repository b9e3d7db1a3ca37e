//! Yard employee factory for creating test employee entities.

use crate::factory::helpers::{next_id, next_prefixed_id};
use entity::sea_orm_active_enums::EmployeeRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test yard employees with customizable fields.
pub struct YardEmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::yard_employee::Model,
}

impl<'a> YardEmployeeFactory<'a> {
    /// Creates a new YardEmployeeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Employee {id}"` where id is auto-incremented
    /// - image_url: `"https://images.example.com/{id}.png"`
    /// - role: `EmployeeRole::Member`
    /// - user_id: `"user_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `yard_id` - Yard the employee works at
    ///
    /// # Returns
    /// - `YardEmployeeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, yard_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::yard_employee::Model {
                id: next_prefixed_id("emp"),
                name: format!("Employee {}", id),
                image_url: format!("https://images.example.com/{}.png", id),
                role: EmployeeRole::Member,
                user_id: format!("user_{}", id),
                yard_id: yard_id.into(),
            },
        }
    }

    /// Sets the employee name.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the employee role.
    ///
    /// # Arguments
    /// - `role` - Role within the yard
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: EmployeeRole) -> Self {
        self.entity.role = role;
        self
    }

    /// Sets the linked user ID.
    ///
    /// # Arguments
    /// - `user_id` - Identity provider ID of the employee
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::yard_employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::yard_employee::Model, DbErr> {
        entity::yard_employee::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            image_url: ActiveValue::Set(self.entity.image_url),
            role: ActiveValue::Set(self.entity.role),
            user_id: ActiveValue::Set(self.entity.user_id),
            yard_id: ActiveValue::Set(self.entity.yard_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a yard employee with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `yard_id` - Yard ID
///
/// # Returns
/// - `Ok(entity::yard_employee::Model)` - Created employee entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_yard_employee(
    db: &DatabaseConnection,
    yard_id: impl Into<String>,
) -> Result<entity::yard_employee::Model, DbErr> {
    YardEmployeeFactory::new(db, yard_id).build().await
}
