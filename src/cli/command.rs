mod runner;

use clap::Subcommand;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server (what runs without a subcommand)
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Print the startup catalog as JSON
    Seed,
}

pub use self::runner::CommandRunner;
