//! Axum extractor for resource payloads
//!
//! Wraps `Json<T>` so that malformed bodies are answered with the same
//! `ErrorResponse` shape as every other failure. Field rules are checked
//! later by the resource manager, not here.

use crate::core::error::RequestError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body rejected with a [`RequestError`]
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn add<T: Resource>(
///     State(manager): State<ResourceManager<T>>,
///     Payload(candidate): Payload<T>,
/// ) -> Result<(StatusCode, Json<T>), ResourceError> {
///     // candidate is well-formed JSON of the right shape
/// }
/// ```
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = RequestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "rejected request body");
            RequestError::from(rejection)
        })?;
        Ok(Payload(value))
    }
}
