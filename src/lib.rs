pub mod error;
pub mod executor;
pub mod output;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use error::{FilmqlError, Result};
pub use schema::SchemaBuilder;
pub use store::{Author, AuthorComment, Comment, Film, FilmStore};
