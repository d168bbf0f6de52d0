mod errors;
mod library_service;

pub use errors::{LibraryApplicationError, Result};
pub use library_service::{
    ServiceDependencies, add_book, borrow_book, find_book, get_available_books, return_book,
};
