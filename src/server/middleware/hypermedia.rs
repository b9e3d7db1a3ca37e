//! Request-scoped hypermedia context.
//!
//! Handlers take a `LinkBuilder` as an extractor. The base URL is the configured
//! `APP_URL` when present, otherwise the scheme and `Host` header of the incoming
//! request, in both cases followed by `/api`. Without either source the extracted
//! builder produces no links.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::server::{service::link::LinkBuilder, state::AppState};

const API_PREFIX: &str = "/api";
const FORWARDED_PROTO: &str = "x-forwarded-proto";

impl FromRequestParts<AppState> for LinkBuilder {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let origin = state
            .app_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .or_else(|| request_origin(parts));

        let base = origin.map(|origin| format!("{}{}", origin, API_PREFIX));

        if base.is_none() {
            tracing::debug!("No base URL available for hypermedia links");
        }

        Ok(LinkBuilder::new(base.as_deref()))
    }
}

/// Reconstructs `scheme://host` from the request headers.
fn request_origin(parts: &Parts) -> Option<String> {
    let host = parts
        .headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())?;

    let scheme = parts
        .headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    Some(format!("{}://{}", scheme, host))
}
