use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    link::LinkDto,
    vehicle::{CreateVehicleDto, VehicleDto},
};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YardVehicleStatusDto {
    Scheduled,
    Waiting,
    OnService,
    Finished,
    Cancelled,
}

/// Yard vehicle creation payload.
///
/// Exactly one of `vehicle_id` or `vehicle` must be provided.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateYardVehicleDto {
    pub status: YardVehicleStatusDto,
    pub entered_at: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
    pub vehicle_id: Option<String>,
    pub vehicle: Option<CreateVehicleDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYardVehicleDto {
    pub status: Option<YardVehicleStatusDto>,
    pub entered_at: Option<DateTime<Utc>>,
    pub left_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YardVehicleDto {
    pub id: String,
    pub status: YardVehicleStatusDto,
    pub entered_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub vehicle: VehicleDto,
    pub links: Vec<LinkDto>,
}
