#[cfg(test)]
mod tests {
    use crate::store::BookStore;
    use crate::tests::memory_pool;
    use crate::types::Book;

    async fn setup_store() -> BookStore {
        BookStore::new(memory_pool().await)
    }

    #[tokio::test]
    async fn test_add_assigns_id() {
        let store = setup_store().await;
        let mut book = Book::new("The Martian", "Andy Weir");
        assert!(book.id.is_none());

        store.add(&mut book).await.unwrap();

        let id = book.id.expect("id assigned on insert");
        let saved = store.find_one_by_id(id).await.unwrap().unwrap();
        assert_eq!(saved, book);
    }

    #[tokio::test]
    async fn test_add_existing_updates_in_place() {
        let store = setup_store().await;
        let mut book = Book::new("The Martian", "Andy Weir");
        store.add(&mut book).await.unwrap();
        let id = book.id.unwrap();

        book.title = "The Martian Updated".to_string();
        store.add(&mut book).await.unwrap();

        assert_eq!(book.id, Some(id));
        assert_eq!(store.count().await.unwrap(), 1);
        let saved = store.find_one_by_id(id).await.unwrap().unwrap();
        assert_eq!(saved.title, "The Martian Updated");
        assert_eq!(saved.author, "Andy Weir");
    }

    #[tokio::test]
    async fn test_add_does_not_resurrect_removed_book() {
        let store = setup_store().await;
        let mut book = Book::new("Carrie", "Stephen King");
        store.add(&mut book).await.unwrap();
        let id = book.id.unwrap();

        // A concurrent delete lands between fetch and save
        let mut fetched = store.find_one_by_id(id).await.unwrap().unwrap();
        store.remove(&book).await.unwrap();
        fetched.title = "Carrie (revised)".to_string();
        store.add(&mut fetched).await.unwrap();

        assert!(store.find_one_by_id(id).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_with_unknown_id_inserts_nothing() {
        let store = setup_store().await;
        let mut book = Book { id: Some(42), title: "Carrie".into(), author: "Stephen King".into() };

        store.add(&mut book).await.unwrap();

        assert!(store.find_one_by_id(42).await.unwrap().is_none());
        assert_eq!(book.id, Some(42));
    }

    #[tokio::test]
    async fn test_find_one_by_id_absent() {
        let store = setup_store().await;
        assert!(store.find_one_by_id(99999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all() {
        let store = setup_store().await;
        assert!(store.find_all().await.unwrap().is_empty());

        let mut eagle = Book::new("The Eagle Has Landed", "Jack Higgins");
        let mut carrie = Book::new("Carrie", "Stephen King");
        store.add(&mut eagle).await.unwrap();
        store.add(&mut carrie).await.unwrap();

        let books = store.find_all().await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.contains(&eagle));
        assert!(books.contains(&carrie));
    }

    #[tokio::test]
    async fn test_find_one_by_title_and_author() {
        let store = setup_store().await;
        let mut eagle = Book::new("The Eagle Has Landed", "Jack Higgins");
        let mut carrie = Book::new("Carrie", "Stephen King");
        store.add(&mut eagle).await.unwrap();
        store.add(&mut carrie).await.unwrap();

        let by_title = store.find_one_by_title("Carrie").await.unwrap().unwrap();
        assert_eq!(by_title.author, "Stephen King");

        let by_author = store.find_one_by_author("Jack Higgins").await.unwrap().unwrap();
        assert_eq!(by_author.title, "The Eagle Has Landed");

        assert!(store.find_one_by_title("Misery").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = setup_store().await;
        let mut book = Book::new("Carrie", "Stephen King");
        store.add(&mut book).await.unwrap();

        let found = store.find_one_by_title("Carrie").await.unwrap().unwrap();
        store.remove(&found).await.unwrap();

        assert!(store.find_one_by_title("Carrie").await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_transient_book_is_noop() {
        let store = setup_store().await;
        let mut stored = Book::new("Carrie", "Stephen King");
        store.add(&mut stored).await.unwrap();

        store.remove(&Book::new("Carrie", "Stephen King")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_page() {
        let store = setup_store().await;
        for i in 0..5 {
            let mut book = Book::new(format!("Title {}", i), "Author");
            store.add(&mut book).await.unwrap();
        }

        assert_eq!(store.find_page(0, Some(2)).await.unwrap().len(), 2);
        assert_eq!(store.find_page(3, Some(10)).await.unwrap().len(), 2);
        assert_eq!(store.find_page(1, None).await.unwrap().len(), 4);
        assert!(store.find_page(10, None).await.unwrap().is_empty());
    }
}
