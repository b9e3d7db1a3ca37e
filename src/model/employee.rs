use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::link::LinkDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRoleDto {
    Admin,
    Member,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateYardEmployeeDto {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub role: EmployeeRoleDto,
    pub user_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYardEmployeeDto {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub role: Option<EmployeeRoleDto>,
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YardEmployeeDto {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub role: EmployeeRoleDto,
    pub user_id: String,
    pub yard_id: String,
    pub links: Vec<LinkDto>,
}
