//! Catalog service: the single CRUD implementation shared by books and
//! authors, parameterized over the entity repository.

use crate::{
    error::{AppError, AppResult},
    repository::EntityRepository,
};

#[derive(Clone)]
pub struct CatalogService<R> {
    repository: R,
}

impl<R: EntityRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<R::Entity>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<R::Entity> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, data: R::Create) -> AppResult<R::Entity> {
        self.repository.create(&data).await
    }

    /// Update an existing entity. The id is probed before the mutation; an
    /// unknown id rejects the update without touching storage.
    pub async fn update(&self, id: i32, data: R::Update) -> AppResult<()> {
        if !self.repository.exists(id).await? {
            return Err(AppError::Validation(format!(
                "No entity with id {} to update",
                id
            )));
        }
        self.repository.update(id, &data).await
    }

    /// Delete an existing entity. The entity is fetched first so a missing
    /// id reports not-found without touching storage.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.find_by_id(id).await?;
        self.repository.delete(id).await
    }
}
