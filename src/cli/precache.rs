use anyhow::Result;

use crate::cache::{Cache, CacheStorage};
use crate::core::{AppConfig, init_tracing};
use crate::host::LocalHost;

pub async fn run() -> Result<()> {
    init_tracing();

    let config = AppConfig::default();
    let host = LocalHost::new(&config)?;
    let registration = host.register(&config)?;

    println!(
        "Precaching {} assets from {}...",
        config.assets.len(),
        config.origin
    );
    registration.install().await?;
    registration.activate().await?;

    let cache = host.caches.open(&config.cache_name).await?;
    for key in cache.keys().await? {
        println!("{}", key);
    }
    println!("Finished precaching into {}", config.cache_name);

    Ok(())
}
