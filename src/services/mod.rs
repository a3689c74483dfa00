//! Business logic services

pub mod auth;
pub mod catalog;

use crate::{
    config::AuthConfig,
    error::AppResult,
    repository::{authors::AuthorsRepository, books::BooksRepository, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: catalog::CatalogService<BooksRepository>,
    pub authors: catalog::CatalogService<AuthorsRepository>,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            books: catalog::CatalogService::new(repository.books.clone()),
            authors: catalog::CatalogService::new(repository.authors.clone()),
            repository,
        }
    }

    /// Readiness probe: verifies database connectivity
    pub async fn ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
