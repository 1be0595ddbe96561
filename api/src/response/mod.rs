use db::models::query::Pagination;
use serde::Serialize;

/// Envelope for every successful JSON response.
///
/// ```json
/// { "payload": { ... } }
/// ```
///
/// Mutations that return nothing respond with a bare status code instead
/// (`204 No Content`), never with an empty envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub payload: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn new(payload: T) -> Self {
        Self { payload }
    }
}

/// Envelope for listings: the page of items plus pagination links.
///
/// ```json
/// {
///   "payload": [ ... ],
///   "pagination": { "previous": null, "self": 1, "next": 2, "limit": 25 }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct PagedResponse<T>
where
    T: Serialize,
{
    pub payload: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PagedResponse<T>
where
    T: Serialize,
{
    pub fn new(payload: Vec<T>, pagination: Pagination) -> Self {
        Self {
            payload,
            pagination,
        }
    }
}
