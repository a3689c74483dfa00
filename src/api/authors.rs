//! Author catalog endpoints. Mutations require the admin role.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::author::{AuthorDto, CreateAuthor, UpdateAuthor},
};

use super::AuthenticatedUser;

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = [AuthorDto]),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<AuthorDto>>> {
    let authors = state.services.authors.list().await?;
    tracing::info!(count = authors.len(), "Listed authors");

    Ok(Json(authors.into_iter().map(AuthorDto::from).collect()))
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDto),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorDto>> {
    let author = state.services.authors.get(id).await?;
    tracing::info!(author_id = id, "Fetched author");

    Ok(Json(AuthorDto::from(author)))
}

/// Create a new author (admin only)
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(author): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<AuthorDto>)> {
    claims.require_admin()?;
    author.validate()?;

    let created = state.services.authors.create(author).await?;
    tracing::info!(author_id = created.id, "Created author");

    Ok((StatusCode::CREATED, Json(AuthorDto::from(created))))
}

/// Update an existing author (admin only)
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 204, description = "Author updated"),
        (status = 400, description = "Invalid id, id mismatch or unknown author"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(author): Json<UpdateAuthor>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;

    if id <= 0 {
        return Err(AppError::Validation(
            "Author id must be positive".to_string(),
        ));
    }
    if author.id != id {
        return Err(AppError::Validation(
            "Path id does not match body id".to_string(),
        ));
    }
    author.validate()?;

    state.services.authors.update(id, author).await?;
    tracing::info!(author_id = id, "Updated author");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an author (admin only)
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;

    if id <= 0 {
        return Err(AppError::Validation(
            "Author id must be positive".to_string(),
        ));
    }

    state.services.authors.delete(id).await?;
    tracing::info!(author_id = id, "Deleted author");

    Ok(StatusCode::NO_CONTENT)
}
