//! Domain models
//!
//! Form input is accepted as-is; the only validated input is the
//! integer book id taken from the request path.

pub mod book;
pub mod validation;

pub use book::{Book, BookForm};
pub use validation::ValidationError;
