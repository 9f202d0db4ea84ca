//! Path parameter extractors
//!
//! Type-safe extraction of entity ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::value_objects::EntityId;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, reporting failures in the API error format
#[derive(Debug, Clone)]
pub struct EntityPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for EntityPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(EntityPath(inner))
    }
}

fn parse_id(raw: &str, field: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {field} format")))
}

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as EntityId
    pub fn post_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.post_id, "post_id")
    }
}

/// Path parameters with post_id and user_id
#[derive(Debug, serde::Deserialize)]
pub struct PostUserPath {
    pub post_id: String,
    pub user_id: String,
}

impl PostUserPath {
    /// Parse post_id as EntityId
    pub fn post_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.post_id, "post_id")
    }

    /// Parse user_id as EntityId
    pub fn user_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}
