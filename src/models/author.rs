//! Author model and wire-level DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Persisted author row
#[derive(Debug, Clone, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author representation exposed at the HTTP boundary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        AuthorDto {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,
}

/// Update author request. The body id must match the path id.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    pub id: i32,
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,
}
