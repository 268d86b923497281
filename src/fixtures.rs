//! Seed data for a fresh environment.

use crate::store::BookStore;
use crate::types::Book;

/// Title and author of every seeded book.
pub const BOOKS: [(&str, &str); 2] = [("The Eagle Has Landed", "Jack Higgins"), ("Carrie", "Stephen King")];

/// Persists the seed books and returns them with their assigned ids.
///
/// Running it twice inserts the books twice; callers run it once per environment.
pub async fn load(store: &BookStore) -> sqlx::Result<Vec<Book>> {
    let mut loaded = Vec::with_capacity(BOOKS.len());
    for (title, author) in BOOKS {
        let mut book = Book::new(title, author);
        store.add(&mut book).await?;
        tracing::info!(id = ?book.id, title = %book.title, "fixture book loaded");
        loaded.push(book);
    }
    Ok(loaded)
}
