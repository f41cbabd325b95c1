use crate::domain::ids::BookId;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const BOOKS: &str = "/books";
pub const NEW_BOOK: &str = "/books/new";

pub const BOOKS_API: &str = "/api/books";
pub const REGISTER_API: &str = "/api/auth/register";

pub fn book(id: &BookId) -> String {
    format!("{BOOKS}/{id}")
}

pub fn book_reviews_api(id: &BookId) -> String {
    format!("{BOOKS_API}/{id}/reviews")
}
