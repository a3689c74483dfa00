//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

use super::EntityRepository;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for BooksRepository {
    type Entity = Book;
    type Create = CreateBook;
    type Update = UpdateBook;

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, year, author_id, summary, image_path, isbn, price,
                   created_at, updated_at
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, year, author_id, summary, image_path, isbn, price,
                   created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        Ok(book)
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, year, author_id, summary, image_path, isbn, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(book.year)
        .bind(book.author_id)
        .bind(&book.summary)
        .bind(&book.image_path)
        .bind(&book.isbn)
        .bind(book.price)
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id).await
    }

    async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE books
            SET title = $1, year = $2, author_id = $3, summary = $4,
                image_path = $5, isbn = $6, price = $7, updated_at = NOW()
            WHERE id = $8
            "#,
        )
        .bind(&book.title)
        .bind(book.year)
        .bind(book.author_id)
        .bind(&book.summary)
        .bind(&book.image_path)
        .bind(&book.isbn)
        .bind(book.price)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
