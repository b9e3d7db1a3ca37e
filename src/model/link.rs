use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hypermedia link describing one navigation or action available on a resource.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub method: String,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: String,
}
