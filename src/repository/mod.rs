//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod users;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Shared CRUD contract for integer-keyed entities.
///
/// `exists` backs the update precondition; callers are expected to have
/// probed existence before `update` and fetched the entity before `delete`.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    type Entity: Send;
    type Create: Send + Sync;
    type Update: Send + Sync;

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Self::Entity>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    async fn create(&self, data: &Self::Create) -> AppResult<Self::Entity>;
    async fn update(&self, id: i32, data: &Self::Update) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Cheap connectivity probe for the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
