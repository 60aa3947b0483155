use deckhand_common::Result;

use super::Console;

/// Images and cluster topology, fetched concurrently
pub async fn overview(console: &Console) -> Result<()> {
    console.initialize().await
}

pub async fn images(console: &Console) -> Result<()> {
    console.load_images().await
}

pub async fn cluster(console: &Console) -> Result<()> {
    console.load_cluster_info().await
}
