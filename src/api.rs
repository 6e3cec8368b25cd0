mod error;
mod rouille;

use anyhow::Result;
use std::net::SocketAddr;

pub trait ApiServer {
    /// Serves until the process is stopped. Only returns on startup failure.
    fn run(&self, addr: SocketAddr) -> Result<()>;
}

pub use self::error::ApiError;
pub use self::rouille::RouilleApiServer;
