#[cfg(test)]
mod tests {
    use crate::config::DatabaseConfig;
    use crate::db;
    use crate::tests::memory_pool;
    use tempfile::tempdir;

    async fn tables(pool: &sqlx::SqlitePool) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_init_db_creates_book_table() {
        let pool = memory_pool().await;
        assert!(tables(&pool).await.contains(&"book".to_string()));
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO book (title, author) VALUES ('Carrie', 'Stephen King')")
            .execute(&pool)
            .await
            .unwrap();

        db::init_db(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book").fetch_one(&pool).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("data").join("books.db");
        let cfg = DatabaseConfig { url: format!("sqlite://{}", db_path.display()), max_connections: 2 };

        let pool = db::connect(&cfg).await.unwrap();

        assert!(db_path.exists());
        assert!(tables(&pool).await.contains(&"book".to_string()));
        pool.close().await;
    }

    #[tokio::test]
    async fn test_autoincrement_ids_are_not_reused() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO book (title, author) VALUES ('a', 'b')").execute(&pool).await.unwrap();
        sqlx::query("DELETE FROM book").execute(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO book (title, author) VALUES ('c', 'd')").execute(&pool).await.unwrap();
        assert_eq!(res.last_insert_rowid(), 2);
    }
}
