//! Yard domain models and parameters.
//!
//! A yard is always stored together with its address; the two form one aggregate that
//! is created in a single transaction and deleted together.

use crate::{
    model::yard::{AddressDto, CreateAddressDto, CreateYardDto, UpdateYardDto, YardDto},
    server::{
        error::AppError,
        service::link::{LinkBuilder, YARDS},
        util::validate::{reject_blank, require_non_blank},
    },
};

/// Postal address of a yard.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

impl Address {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            country: entity.country,
            state: entity.state,
            city: entity.city,
            zip_code: entity.zip_code,
            neighborhood: entity.neighborhood,
            complement: entity.complement,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            country: self.country,
            state: self.state,
            city: self.city,
            zip_code: self.zip_code,
            neighborhood: self.neighborhood,
            complement: self.complement,
        }
    }
}

/// Yard with its address.
#[derive(Debug, Clone, PartialEq)]
pub struct Yard {
    pub id: String,
    pub owner_id: String,
    pub address: Address,
}

impl Yard {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `yard` - Yard entity
    /// - `address` - Address entity referenced by `yard.address_id`
    ///
    /// # Returns
    /// - `Yard` - Domain model with the address embedded
    pub fn from_entity(yard: entity::yard::Model, address: entity::address::Model) -> Self {
        Self {
            id: yard.id,
            owner_id: yard.owner_id,
            address: Address::from_entity(address),
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Arguments
    /// - `links` - Link builder for the current request
    ///
    /// # Returns
    /// - `YardDto` - DTO carrying the yard's resource links
    pub fn into_dto(self, links: &LinkBuilder) -> YardDto {
        YardDto {
            links: links.resource_links(YARDS, &self.id),
            id: self.id,
            owner_id: self.owner_id,
            address: self.address.into_dto(),
        }
    }
}

/// Validated address fields for a new address.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAddressParams {
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

impl CreateAddressParams {
    pub fn from_dto(dto: CreateAddressDto) -> Result<Self, AppError> {
        Ok(Self {
            country: require_non_blank("address.country", dto.country)?,
            state: require_non_blank("address.state", dto.state)?,
            city: require_non_blank("address.city", dto.city)?,
            zip_code: require_non_blank("address.zipCode", dto.zip_code)?,
            neighborhood: require_non_blank("address.neighborhood", dto.neighborhood)?,
            complement: dto.complement,
        })
    }
}

/// Parameters for creating a yard together with its address.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateYardParams {
    pub owner_id: String,
    pub address: CreateAddressParams,
}

impl CreateYardParams {
    /// Converts and validates the creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateYardParams)` - All required fields are non-blank
    /// - `Err(AppError::BadRequest)` - A required field is blank
    pub fn from_dto(dto: CreateYardDto) -> Result<Self, AppError> {
        Ok(Self {
            owner_id: require_non_blank("ownerId", dto.owner_id)?,
            address: CreateAddressParams::from_dto(dto.address)?,
        })
    }
}

/// Partial update of a yard's own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateYardParams {
    pub owner_id: Option<String>,
}

impl UpdateYardParams {
    pub fn from_dto(dto: UpdateYardDto) -> Result<Self, AppError> {
        Ok(Self {
            owner_id: reject_blank("ownerId", dto.owner_id)?,
        })
    }
}
