use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod precache;
pub mod push;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the local agent host and its API
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Install and activate the agent once against the origin and list
    /// the cached assets
    Precache {},
    /// Deliver a push message to a running agent
    Push {
        /// Base URL of the running agent
        #[arg(long, default_value = "http://127.0.0.1:2222")]
        url: String,

        /// Raw payload, either a JSON record or plain text
        #[arg(long)]
        payload: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Precache {}) => {
            precache::run().await?;
        }
        Some(Command::Push { url, payload }) => {
            push::run(&url, payload).await?;
        }
        None => {}
    }

    Ok(())
}
