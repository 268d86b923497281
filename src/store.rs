//! Data access for the `book` table.
//!
//! Every method runs a single statement against the pool, so each call is its
//! own implicit transaction. Nothing here locks rows; concurrent writers to the
//! same id simply overwrite each other.

use sqlx::SqlitePool;

use crate::types::Book;

#[derive(Clone)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a transient `book`, or rewrites the stored row of a persisted one.
    ///
    /// A fresh insert writes the generated id back into `book.id`. Saving a book
    /// whose row has meanwhile been deleted touches nothing; it is not re-created.
    pub async fn add(&self, book: &mut Book) -> sqlx::Result<()> {
        match book.id {
            None => {
                let res = sqlx::query("INSERT INTO book (title, author) VALUES (?1, ?2)")
                    .bind(&book.title)
                    .bind(&book.author)
                    .execute(&self.pool)
                    .await?;
                let id = res.last_insert_rowid();
                book.id = Some(id);
                tracing::debug!(id, "book inserted");
            }
            Some(id) => {
                let res = sqlx::query("UPDATE book SET title = ?1, author = ?2 WHERE id = ?3")
                    .bind(&book.title)
                    .bind(&book.author)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                if res.rows_affected() == 0 {
                    tracing::debug!(id, "book no longer stored, nothing updated");
                } else {
                    tracing::debug!(id, "book updated");
                }
            }
        }
        Ok(())
    }

    /// Deletes the stored row for `book`. Transient books are ignored.
    pub async fn remove(&self, book: &Book) -> sqlx::Result<()> {
        let Some(id) = book.id else {
            tracing::debug!("remove called on a book that was never stored");
            return Ok(());
        };
        sqlx::query("DELETE FROM book WHERE id = ?1").bind(id).execute(&self.pool).await?;
        tracing::debug!(id, "book removed");
        Ok(())
    }

    pub async fn find_one_by_id(&self, id: i64) -> sqlx::Result<Option<Book>> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM book WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_one_by_title(&self, title: &str) -> sqlx::Result<Option<Book>> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM book WHERE title = ?1 LIMIT 1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_one_by_author(&self, author: &str) -> sqlx::Result<Option<Book>> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM book WHERE author = ?1 LIMIT 1")
            .bind(author)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns every stored book in whatever order SQLite scans them.
    pub async fn find_all(&self) -> sqlx::Result<Vec<Book>> {
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM book").fetch_all(&self.pool).await
    }

    /// Like [`find_all`](Self::find_all) but windowed. `limit == None` means no upper bound.
    pub async fn find_page(&self, offset: u32, limit: Option<u32>) -> sqlx::Result<Vec<Book>> {
        // SQLite treats a negative LIMIT as unlimited
        let limit = limit.map(i64::from).unwrap_or(-1);
        sqlx::query_as::<_, Book>("SELECT id, title, author FROM book LIMIT ?1 OFFSET ?2")
            .bind(limit)
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM book").fetch_one(&self.pool).await
    }
}
