//! Yard factory for creating test yard entities.

use crate::factory::helpers::{next_id, next_prefixed_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test yards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::yard::YardFactory;
///
/// let yard = YardFactory::new(&db, &address.id)
///     .owner_id("owner-1")
///     .build()
///     .await?;
/// ```
pub struct YardFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    owner_id: String,
    address_id: String,
}

impl<'a> YardFactory<'a> {
    /// Creates a new YardFactory with default values.
    ///
    /// Defaults:
    /// - owner_id: `"owner_{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `address_id` - Address the yard is located at; must not belong to another yard
    ///
    /// # Returns
    /// - `YardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, address_id: impl Into<String>) -> Self {
        Self {
            db,
            id: next_prefixed_id("yrd"),
            owner_id: format!("owner_{}", next_id()),
            address_id: address_id.into(),
        }
    }

    /// Sets the owner ID.
    ///
    /// # Arguments
    /// - `owner_id` - Identity provider ID of the yard owner
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Builds and inserts the yard entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::yard::Model)` - Created yard entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::yard::Model, DbErr> {
        entity::yard::ActiveModel {
            id: ActiveValue::Set(self.id),
            owner_id: ActiveValue::Set(self.owner_id),
            address_id: ActiveValue::Set(self.address_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a yard with default values at the given address.
///
/// Shorthand for `YardFactory::new(db, address_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `address_id` - Address ID for the yard
///
/// # Returns
/// - `Ok(entity::yard::Model)` - Created yard entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_yard(
    db: &DatabaseConnection,
    address_id: impl Into<String>,
) -> Result<entity::yard::Model, DbErr> {
    YardFactory::new(db, address_id).build().await
}
