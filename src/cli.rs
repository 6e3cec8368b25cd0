mod command;

use clap::Parser;
use self::command::Commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory movie catalog over HTTP", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start with an empty catalog instead of the seed records
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

pub use self::command::CommandRunner;
