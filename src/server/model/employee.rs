//! Yard employee domain models and parameters.

use entity::sea_orm_active_enums::EmployeeRole;

use crate::{
    model::employee::{
        CreateYardEmployeeDto, EmployeeRoleDto, UpdateYardEmployeeDto, YardEmployeeDto,
    },
    server::{
        error::AppError,
        service::link::{yard_employees_path, LinkBuilder},
        util::validate::{reject_blank, require_non_blank},
    },
};

impl From<EmployeeRoleDto> for EmployeeRole {
    fn from(role: EmployeeRoleDto) -> Self {
        match role {
            EmployeeRoleDto::Admin => EmployeeRole::Admin,
            EmployeeRoleDto::Member => EmployeeRole::Member,
        }
    }
}

impl From<EmployeeRole> for EmployeeRoleDto {
    fn from(role: EmployeeRole) -> Self {
        match role {
            EmployeeRole::Admin => EmployeeRoleDto::Admin,
            EmployeeRole::Member => EmployeeRoleDto::Member,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YardEmployee {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub role: EmployeeRole,
    pub user_id: String,
    pub yard_id: String,
}

impl YardEmployee {
    pub fn from_entity(entity: entity::yard_employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            role: entity.role,
            user_id: entity.user_id,
            yard_id: entity.yard_id,
        }
    }

    /// Converts domain model to DTO for API responses, with links under the yard's
    /// `employees` path.
    pub fn into_dto(self, links: &LinkBuilder) -> YardEmployeeDto {
        YardEmployeeDto {
            links: links.resource_links(&yard_employees_path(&self.yard_id), &self.id),
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            role: self.role.into(),
            user_id: self.user_id,
            yard_id: self.yard_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateYardEmployeeParams {
    pub yard_id: String,
    pub name: String,
    pub image_url: String,
    pub role: EmployeeRole,
    pub user_id: String,
}

impl CreateYardEmployeeParams {
    /// Converts and validates the creation payload.
    ///
    /// # Arguments
    /// - `yard_id` - Yard from the request path
    /// - `dto` - Creation payload
    ///
    /// # Returns
    /// - `Ok(CreateYardEmployeeParams)` - `name` and `userId` are non-blank
    /// - `Err(AppError::BadRequest)` - A required field is blank
    pub fn from_dto(yard_id: String, dto: CreateYardEmployeeDto) -> Result<Self, AppError> {
        Ok(Self {
            yard_id,
            name: require_non_blank("name", dto.name)?,
            image_url: dto.image_url,
            role: dto.role.into(),
            user_id: require_non_blank("userId", dto.user_id)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateYardEmployeeParams {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub role: Option<EmployeeRole>,
    pub user_id: Option<String>,
}

impl UpdateYardEmployeeParams {
    pub fn from_dto(dto: UpdateYardEmployeeDto) -> Result<Self, AppError> {
        Ok(Self {
            name: reject_blank("name", dto.name)?,
            image_url: dto.image_url,
            role: dto.role.map(Into::into),
            user_id: reject_blank("userId", dto.user_id)?,
        })
    }
}
