use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::link::LinkDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleModelDto {
    pub name: String,
    pub year: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModelDto {
    pub id: String,
    pub name: String,
    pub year: i32,
}

/// Vehicle creation payload.
///
/// Exactly one of `model_id` or `model` must be provided: an existing model is linked
/// by id, an inline model is created in the same transaction as the vehicle.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    pub plate: String,
    pub user_id: String,
    pub model_id: Option<String>,
    pub model: Option<CreateVehicleModelDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: String,
    pub plate: String,
    pub user_id: String,
    pub model: VehicleModelDto,
    pub links: Vec<LinkDto>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VehicleLookupQuery {
    /// QR code identifier attached to the vehicle
    pub qr_code_id: Option<String>,
}
