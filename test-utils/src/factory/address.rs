//! Address factory for creating test address entities.

use crate::factory::helpers::next_prefixed_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addresses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::address::AddressFactory;
///
/// let address = AddressFactory::new(&db)
///     .city("Curitiba")
///     .complement(None)
///     .build()
///     .await?;
/// ```
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::address::Model,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - country: `"Brazil"`
    /// - state: `"SP"`
    /// - city: `"Sao Paulo"`
    /// - zip_code: `"01310-100"`
    /// - neighborhood: `"Bela Vista"`
    /// - complement: `Some("Block A")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AddressFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::address::Model {
                id: next_prefixed_id("adr"),
                country: "Brazil".to_string(),
                state: "SP".to_string(),
                city: "Sao Paulo".to_string(),
                zip_code: "01310-100".to_string(),
                neighborhood: "Bela Vista".to_string(),
                complement: Some("Block A".to_string()),
            },
        }
    }

    /// Sets the city.
    ///
    /// # Arguments
    /// - `city` - City name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    /// Sets the complement.
    ///
    /// # Arguments
    /// - `complement` - Optional complement line
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn complement(mut self, complement: Option<String>) -> Self {
        self.entity.complement = complement;
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            country: ActiveValue::Set(self.entity.country),
            state: ActiveValue::Set(self.entity.state),
            city: ActiveValue::Set(self.entity.city),
            zip_code: ActiveValue::Set(self.entity.zip_code),
            neighborhood: ActiveValue::Set(self.entity.neighborhood),
            complement: ActiveValue::Set(self.entity.complement),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values.
///
/// Shorthand for `AddressFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::address::Model)` - Created address entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_address(db: &DatabaseConnection) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db).build().await
}
