use super::{Commands, DEFAULT_HOST, DEFAULT_PORT};
use crate::api::ApiServer;
use crate::core::MovieCatalog;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid port")]
    InvalidPort,
    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

pub struct CommandRunner<C: MovieCatalog, T: ApiServer> {
    catalog: C,
    api_server: T,
}

impl<C: MovieCatalog, T: ApiServer> CommandRunner<C, T> {
    pub fn new(catalog: C, api_server: T) -> Self {
        Self {
            catalog,
            api_server,
        }
    }

    pub fn run(&mut self, command: &Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Serve { port, host }) => {
                run_server(&self.api_server, host, *port)?;
            }
            Some(Commands::Seed) => {
                print_catalog(&self.catalog, &mut io::stdout().lock())?;
            }
            None => {
                run_server(&self.api_server, DEFAULT_HOST, DEFAULT_PORT)?;
            }
        }

        Ok(())
    }
}

fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr, CliError> {
    if port == 0 {
        return Err(CliError::InvalidPort);
    }
    (host, port)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| CliError::InvalidHost(host.to_string()))
}

fn run_server(server: &impl ApiServer, host: &str, port: u16) -> Result<()> {
    let addr = resolve_addr(host, port)?;
    server
        .run(addr)
        .with_context(|| format!("server on {} stopped", addr))
}

fn print_catalog(catalog: &impl MovieCatalog, out: &mut impl Write) -> Result<()> {
    let movies = catalog.list()?;
    serde_json::to_writer_pretty(&mut *out, &movies)?;
    writeln!(out)?;
    Ok(())
}
