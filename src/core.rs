pub mod catalog;
pub mod movie;

pub use self::catalog::{MemoryCatalog, MovieCatalog};
pub use self::movie::NewMovie;
