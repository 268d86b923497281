use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    types::{Book, BookPayload, ListQuery},
};

const ENTITY: &str = "Book";
const INVALID_PARAMETERS: &str = "Invalid request parameters";

/// Path ids that do not parse as integers cannot name a stored book.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::NotFound(format!("{} not found", ENTITY)))
}

async fn fetch(state: &AppState, raw_id: &str) -> AppResult<Book> {
    let id = parse_id(raw_id)?;
    state.books.find_one_by_id(id).await?.ok_or_not_found(ENTITY)
}

pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected list query: {}", e);
        AppError::InvalidInput(INVALID_PARAMETERS.to_string())
    })?;
    let books = match (query.skip, query.limit) {
        (None, None) => state.books.find_all().await?,
        (skip, limit) => state.books.find_page(skip.unwrap_or(0), limit).await?,
    };
    Ok(Json(books))
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Book>> {
    Ok(Json(fetch(&state, &id).await?))
}

pub async fn create_book(State(state): State<AppState>, body: Bytes) -> AppResult<(StatusCode, Json<Book>)> {
    let BookPayload { title: Some(title), author: Some(author) } = BookPayload::from_body(&body) else {
        return Err(AppError::InvalidInput(INVALID_PARAMETERS.to_string()));
    };

    let mut book = Book::new(title, author);
    state.books.add(&mut book).await?;
    state.metrics.inc_books_created();
    tracing::info!(id = ?book.id, "book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// Overwrites only the fields that were supplied with a non-empty value.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Book>> {
    let mut book = fetch(&state, &id).await?;
    let payload = BookPayload::from_body(&body);
    if let Some(title) = payload.title {
        book.title = title;
    }
    if let Some(author) = payload.author {
        book.author = author;
    }

    state.books.add(&mut book).await?;
    state.metrics.inc_books_updated();
    tracing::info!(id = ?book.id, "book updated");

    Ok(Json(book))
}

pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let book = fetch(&state, &id).await?;
    state.books.remove(&book).await?;
    state.metrics.inc_books_deleted();
    tracing::info!(id = ?book.id, "book deleted");

    Ok(StatusCode::NO_CONTENT)
}
