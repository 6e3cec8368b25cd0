use super::MovieCatalog;
use crate::core::movie::{self, Movie, NewMovie};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog lock poisoned by a panicked request")]
    Poisoned,
}

type Error = CatalogError;

/// Process-local catalog. Clones share the same underlying list.
///
/// Every operation holds the one lock for its whole duration, so a create
/// or delete and the snapshot it returns are observed together.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    movies: Arc<Mutex<Vec<Movie>>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_movies(movie::seed())
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(Mutex::new(movies)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Movie>>, Error> {
        self.movies.lock().map_err(|_| CatalogError::Poisoned)
    }

    /// Panics a thread while it holds the lock.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let movies = Arc::clone(&self.movies);
        let _ = std::thread::spawn(move || {
            let _guard = movies.lock().unwrap();
            panic!("catalog poisoned on purpose");
        })
        .join();
    }
}

fn fresh_id(movies: &[Movie]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !movies.iter().any(|m| m.id == id) {
            return id;
        }
    }
}

impl MovieCatalog for MemoryCatalog {
    type Error = CatalogError;

    fn list(&self) -> Result<Vec<Movie>, Self::Error> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Movie>, Self::Error> {
        let movies = self.lock()?;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    fn create(&mut self, movie: NewMovie) -> Result<(Movie, Vec<Movie>), Self::Error> {
        let mut movies = self.lock()?;
        let movie = movie.into_movie(fresh_id(&movies));
        debug!(id = %movie.id, "adding movie");
        movies.push(movie.clone());
        Ok((movie, movies.clone()))
    }

    fn delete(&mut self, id: &str) -> Result<(bool, Vec<Movie>), Self::Error> {
        let mut movies = self.lock()?;
        let removed = match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                // keep relative order of the rest
                movies.remove(index);
                debug!(id, "removed movie");
                true
            }
            None => false,
        };
        Ok((removed, movies.clone()))
    }
}
