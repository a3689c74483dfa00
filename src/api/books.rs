//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDto, CreateBook, UpdateBook},
};

use super::AuthenticatedUser;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = [BookDto]),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<BookDto>>> {
    let books = state.services.books.list().await?;
    tracing::info!(count = books.len(), "Listed books");

    Ok(Json(books.into_iter().map(BookDto::from).collect()))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDto>> {
    let book = state.services.books.get(id).await?;
    tracing::info!(book_id = id, "Fetched book");

    Ok(Json(BookDto::from(book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookDto>)> {
    book.validate()?;

    let created = state.services.books.create(book).await?;
    tracing::info!(book_id = created.id, "Created book");

    Ok((StatusCode::CREATED, Json(BookDto::from(created))))
}

/// Update an existing book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Invalid id, id mismatch or unknown book"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<StatusCode> {
    if id <= 0 {
        return Err(AppError::Validation("Book id must be positive".to_string()));
    }
    if book.id != id {
        return Err(AppError::Validation(
            "Path id does not match body id".to_string(),
        ));
    }
    book.validate()?;

    state.services.books.update(id, book).await?;
    tracing::info!(book_id = id, "Updated book");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if id <= 0 {
        return Err(AppError::Validation("Book id must be positive".to_string()));
    }

    state.services.books.delete(id).await?;
    tracing::info!(book_id = id, "Deleted book");

    Ok(StatusCode::NO_CONTENT)
}
