//! Common repository traits
//!
//! This module defines generic interfaces for REST resource operations.

use crate::core::AppError;

/// Trait for creating new entities through the backend
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the backend)
/// * `CreateDTO` - DTO for creation (without ID, will be generated server side)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity as echoed by the backend
    /// * `Err(AppError)` - Transport failure or payload rejected
    async fn create(&self, data: &CreateDTO) -> Result<Entity, AppError>;
}

/// Trait for listing entities matching a set of filters
///
/// # Type Parameters
/// * `Entity` - Type of the listed entities
/// * `Query` - Filters sent as query parameters
pub trait List<Entity, Query> {
    /// Lists the entities matching `query`
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Entities in the order returned by the backend (can be empty)
    /// * `Err(AppError)` - Error during the request
    async fn list(&self, query: &Query) -> Result<Vec<Entity>, AppError>;
}
