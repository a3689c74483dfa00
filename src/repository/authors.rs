//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

use super::EntityRepository;

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for AuthorsRepository {
    type Entity = Author;
    type Create = CreateAuthor;
    type Update = UpdateAuthor;

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

        Ok(author)
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO authors (first_name, last_name) VALUES ($1, $2) RETURNING id",
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id).await
    }

    async fn update(&self, id: i32, author: &UpdateAuthor) -> AppResult<()> {
        sqlx::query(
            "UPDATE authors SET first_name = $1, last_name = $2, updated_at = NOW() WHERE id = $3",
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        // Books referencing the author make the FK reject this; the caller
        // sees it as a persistence failure.
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
