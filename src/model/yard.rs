use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::link::LinkDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressDto {
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateYardDto {
    pub owner_id: String,
    pub address: CreateAddressDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYardDto {
    pub owner_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YardDto {
    pub id: String,
    pub owner_id: String,
    pub address: AddressDto,
    pub links: Vec<LinkDto>,
}
