//! Generic HTTP handlers shared by every resource
//!
//! Each resource is served by the same five handlers instantiated for its
//! type, with the resource's manager as router state:
//! - `POST   /add`         201 + stored record
//! - `GET    /get/all`     200 + array
//! - `GET    /get/{id}`    200 + record, or 404 with an empty body
//! - `PUT    /update`      200 + updated record
//! - `DELETE /delete/{id}` 204, or 404 with an empty body

use crate::core::error::ResourceError;
use crate::core::manager::ResourceManager;
use crate::core::resource::Resource;
use crate::core::validation::Payload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn add<T: Resource>(
    State(manager): State<ResourceManager<T>>,
    Payload(candidate): Payload<T>,
) -> Result<(StatusCode, Json<T>), ResourceError> {
    let stored = manager.add(candidate).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn get_by_id<T: Resource>(
    State(manager): State<ResourceManager<T>>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ResourceError> {
    manager
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ResourceError::NotFound {
            resource: T::SCHEMA.name,
            id,
        })
}

pub async fn get_all<T: Resource>(
    State(manager): State<ResourceManager<T>>,
) -> Result<Json<Vec<T>>, ResourceError> {
    Ok(Json(manager.get_all().await?))
}

pub async fn update<T: Resource>(
    State(manager): State<ResourceManager<T>>,
    Payload(modified): Payload<T>,
) -> Result<Json<T>, ResourceError> {
    Ok(Json(manager.update(modified).await?))
}

pub async fn delete_by_id<T: Resource>(
    State(manager): State<ResourceManager<T>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ResourceError> {
    match manager.delete_by_id(id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ResourceError::NotFound {
            resource: T::SCHEMA.name,
            id,
        }),
    }
}
