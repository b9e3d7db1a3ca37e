use crate::model::link::LinkDto;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A navigation or action link attached to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
    pub title: String,
}

impl Link {
    pub fn new(
        href: impl Into<String>,
        rel: impl Into<String>,
        method: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
            title: title.into(),
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// The media type is always `application/json`.
    pub fn into_dto(self) -> LinkDto {
        LinkDto {
            href: self.href,
            rel: self.rel,
            method: self.method,
            title: self.title,
            media_type: JSON_MEDIA_TYPE.to_string(),
        }
    }
}
