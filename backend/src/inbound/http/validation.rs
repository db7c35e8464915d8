//! Shared validation helpers for inbound HTTP adapters.
//!
//! Clients only ever see `"Invalid data"`; the specific reason is logged at
//! debug level.

use std::fmt::Display;

use actix_web::error::PayloadError;
use actix_web::web;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::domain::Error;

use super::error::INVALID_DATA_MESSAGE;

/// Largest JSON body a handler will buffer, matching `JsonConfig`'s default.
pub(crate) const JSON_BODY_LIMIT: usize = 32 * 1024;

/// Why a request body could not be turned into a value.
#[derive(Debug, Error)]
pub(crate) enum BodyError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("failed to read request body: {0}")]
    Read(#[from] PayloadError),
    #[error("malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Map any validation failure to the generic `422 Invalid data` error.
pub(crate) fn invalid_data(reason: impl Display) -> Error {
    debug!(%reason, "request failed validation");
    Error::invalid_data(INVALID_DATA_MESSAGE)
}

/// Buffer at most `limit` bytes of a streamed body and decode it as JSON.
///
/// Handlers that must check the session before touching the body take a
/// `web::Payload` and call this afterwards. Nothing is read until then.
pub(crate) async fn read_json_body<T: DeserializeOwned>(
    mut payload: web::Payload,
    limit: usize,
) -> Result<T, BodyError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(BodyError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(serde_json::from_slice(&body)?)
}
