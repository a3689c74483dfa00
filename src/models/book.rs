//! Book model and wire-level DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Persisted book row
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub author_id: i32,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub isbn: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book representation exposed at the HTTP boundary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub author_id: i32,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub isbn: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        BookDto {
            id: book.id,
            title: book.title,
            year: book.year,
            author_id: book.author_id,
            summary: book.summary,
            image_path: book.image_path,
            isbn: book.isbn,
            price: book.price,
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub year: i32,
    #[validate(range(min = 1, message = "Author id must be positive"))]
    pub author_id: i32,
    pub summary: Option<String>,
    #[validate(length(max = 255, message = "Image path must be at most 255 characters"))]
    pub image_path: Option<String>,
    #[validate(length(min = 10, max = 17, message = "ISBN must be 10-17 characters"))]
    pub isbn: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Update book request. Updates replace the stored fields wholesale; the
/// body id must match the path id.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub id: i32,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub year: i32,
    #[validate(range(min = 1, message = "Author id must be positive"))]
    pub author_id: i32,
    pub summary: Option<String>,
    #[validate(length(max = 255, message = "Image path must be at most 255 characters"))]
    pub image_path: Option<String>,
    #[validate(length(min = 10, max = 17, message = "ISBN must be 10-17 characters"))]
    pub isbn: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}
