mod memory;

use super::movie::{Movie, NewMovie};

pub trait MovieCatalog: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every movie, in insertion order.
    fn list(&self) -> Result<Vec<Movie>, Self::Error>;

    fn get(&self, id: &str) -> Result<Option<Movie>, Self::Error>;

    /// Appends `movie` under a freshly generated id. Returns the stored
    /// record along with the catalog as it stands right after the insert.
    fn create(&mut self, movie: NewMovie) -> Result<(Movie, Vec<Movie>), Self::Error>;

    /// Removes the first movie with `id`, if any. Returns whether something
    /// was removed and the catalog as it stands afterwards.
    fn delete(&mut self, id: &str) -> Result<(bool, Vec<Movie>), Self::Error>;
}

pub use self::memory::MemoryCatalog;
