use super::{ApiError, ApiServer};
use crate::core::{MovieCatalog, NewMovie};
use anyhow::{anyhow, Result};
use rouille::{router, Request, Response};
use serde::Serialize;
use std::net::SocketAddr;
use tracing::info;

pub struct RouilleApiServer<C: MovieCatalog> {
    catalog: C,
}

impl<C: MovieCatalog> RouilleApiServer<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }
}

impl<C: MovieCatalog> ApiServer for RouilleApiServer<C> {
    fn run(&self, addr: SocketAddr) -> Result<()> {
        let catalog = self.catalog.clone();
        let server = rouille::Server::new(addr, move |request| {
            let mut local = catalog.clone();
            rouille::log(request, std::io::stdout(), || handle(&mut local, request))
        })
        .map_err(|e| anyhow!("failed to bind {}: {}", addr, e))?;

        info!("Starting server on {}", server.server_addr());
        server.run();
        Ok(())
    }
}

/// Dispatches one request against the catalog.
pub fn handle(catalog: &mut impl MovieCatalog, request: &Request) -> Response {
    let result = router!(request,
        (GET) (/movies) => {
            list_movies(catalog, request)
        },
        (POST) (/movies) => {
            create_movie(catalog, request)
        },
        (GET) (/movies/{id: String}) => {
            get_movie(catalog, request, id)
        },
        (DELETE) (/movies/{id: String}) => {
            delete_movie(catalog, request, id)
        },
        _ => Ok(fallback(request))
    );
    result.unwrap_or_else(ApiError::into_response)
}

fn catalog_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
    ApiError::Catalog(Box::new(e))
}

fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    Ok(Response::from_data("application/json", body))
}

fn list_movies(catalog: &impl MovieCatalog, _request: &Request) -> Result<Response, ApiError> {
    let movies = catalog.list().map_err(catalog_error)?;
    json_response(&movies)
}

fn get_movie(
    catalog: &impl MovieCatalog,
    _request: &Request,
    id: String,
) -> Result<Response, ApiError> {
    match catalog.get(&id).map_err(catalog_error)? {
        Some(movie) => json_response(&movie),
        None => Err(ApiError::NotFound(id)),
    }
}

fn create_movie(catalog: &mut impl MovieCatalog, request: &Request) -> Result<Response, ApiError> {
    let body = request.data().ok_or(ApiError::BodyConsumed)?;
    let input: NewMovie = serde_json::from_reader(body).map_err(ApiError::Decode)?;
    let (movie, movies) = catalog.create(input).map_err(catalog_error)?;
    info!(id = %movie.id, "created movie");
    json_response(&movies)
}

fn delete_movie(
    catalog: &mut impl MovieCatalog,
    _request: &Request,
    id: String,
) -> Result<Response, ApiError> {
    let (removed, movies) = catalog.delete(&id).map_err(catalog_error)?;
    if removed {
        info!(id = %id, "deleted movie");
    }
    json_response(&movies)
}

/// Known paths with an unsupported method get a 405, anything else a 404.
fn fallback(request: &Request) -> Response {
    let url = request.url();
    let allow = if url == "/movies" {
        "GET, POST"
    } else if url
        .strip_prefix("/movies/")
        .map_or(false, |id| !id.contains('/'))
    {
        "GET, DELETE"
    } else {
        return Response::empty_404();
    };
    Response::text("Method not allowed")
        .with_status_code(405)
        .with_additional_header("Allow", allow)
}
