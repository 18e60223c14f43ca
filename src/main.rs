use anyhow::Result;
use sync_agent::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
