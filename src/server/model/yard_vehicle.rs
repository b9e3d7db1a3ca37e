//! Yard vehicle domain models and parameters.
//!
//! A yard vehicle records one stay of a vehicle in a yard. It references its vehicle
//! either by id or by an inline vehicle definition, which may itself carry an inline
//! model definition.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::YardVehicleStatus;

use crate::{
    model::yard_vehicle::{
        CreateYardVehicleDto, UpdateYardVehicleDto, YardVehicleDto, YardVehicleStatusDto,
    },
    server::{
        error::AppError,
        model::{
            reference::Reference,
            vehicle::{CreateVehicleParams, Vehicle},
        },
        service::link::{yard_vehicles_path, LinkBuilder},
    },
};

impl From<YardVehicleStatusDto> for YardVehicleStatus {
    fn from(status: YardVehicleStatusDto) -> Self {
        match status {
            YardVehicleStatusDto::Scheduled => YardVehicleStatus::Scheduled,
            YardVehicleStatusDto::Waiting => YardVehicleStatus::Waiting,
            YardVehicleStatusDto::OnService => YardVehicleStatus::OnService,
            YardVehicleStatusDto::Finished => YardVehicleStatus::Finished,
            YardVehicleStatusDto::Cancelled => YardVehicleStatus::Cancelled,
        }
    }
}

impl From<YardVehicleStatus> for YardVehicleStatusDto {
    fn from(status: YardVehicleStatus) -> Self {
        match status {
            YardVehicleStatus::Scheduled => YardVehicleStatusDto::Scheduled,
            YardVehicleStatus::Waiting => YardVehicleStatusDto::Waiting,
            YardVehicleStatus::OnService => YardVehicleStatusDto::OnService,
            YardVehicleStatus::Finished => YardVehicleStatusDto::Finished,
            YardVehicleStatus::Cancelled => YardVehicleStatusDto::Cancelled,
        }
    }
}

/// A vehicle's stay in a yard.
#[derive(Debug, Clone, PartialEq)]
pub struct YardVehicle {
    pub id: String,
    pub status: YardVehicleStatus,
    pub entered_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub yard_id: String,
    pub vehicle: Vehicle,
}

impl YardVehicle {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `yard_vehicle` - Yard vehicle entity
    /// - `vehicle` - Already converted vehicle referenced by `yard_vehicle.vehicle_id`
    ///
    /// # Returns
    /// - `YardVehicle` - Domain model with the vehicle embedded
    pub fn from_entity(yard_vehicle: entity::yard_vehicle::Model, vehicle: Vehicle) -> Self {
        Self {
            id: yard_vehicle.id,
            status: yard_vehicle.status,
            entered_at: yard_vehicle.entered_at,
            left_at: yard_vehicle.left_at,
            yard_id: yard_vehicle.yard_id,
            vehicle,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// The yard vehicle carries links under its yard's `vehicles` path, and the embedded
    /// vehicle carries its own vehicle resource links.
    pub fn into_dto(self, links: &LinkBuilder) -> YardVehicleDto {
        YardVehicleDto {
            links: links.resource_links(&yard_vehicles_path(&self.yard_id), &self.id),
            id: self.id,
            status: self.status.into(),
            entered_at: self.entered_at,
            left_at: self.left_at,
            vehicle: self.vehicle.into_dto(links),
        }
    }
}

/// Parameters for recording a vehicle in a yard.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateYardVehicleParams {
    pub yard_id: String,
    pub status: YardVehicleStatus,
    pub entered_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub vehicle: Reference<String, CreateVehicleParams>,
}

impl CreateYardVehicleParams {
    /// Converts and validates the creation payload.
    ///
    /// # Arguments
    /// - `yard_id` - Yard from the request path
    /// - `dto` - Creation payload
    ///
    /// # Returns
    /// - `Ok(CreateYardVehicleParams)` - Payload is valid
    /// - `Err(AppError::BadRequest)` - `enteredAt` is missing, both/neither of `vehicleId`
    ///   and `vehicle` are provided, or the inline vehicle is invalid
    pub fn from_dto(yard_id: String, dto: CreateYardVehicleDto) -> Result<Self, AppError> {
        let entered_at = dto
            .entered_at
            .ok_or_else(|| AppError::BadRequest("enteredAt is required".to_string()))?;
        let spec = dto.vehicle.map(CreateVehicleParams::from_dto).transpose()?;

        Ok(Self {
            yard_id,
            status: dto.status.into(),
            entered_at,
            left_at: dto.left_at,
            vehicle: Reference::from_parts("vehicleId", "vehicle", dto.vehicle_id, spec)?,
        })
    }
}

/// Partial update of a yard vehicle's own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateYardVehicleParams {
    pub status: Option<YardVehicleStatus>,
    pub entered_at: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
}

impl UpdateYardVehicleParams {
    pub fn from_dto(dto: UpdateYardVehicleDto) -> Self {
        Self {
            status: dto.status.map(Into::into),
            entered_at: dto.entered_at,
            left_at: dto.left_at,
        }
    }
}
