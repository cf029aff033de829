use anyhow::Result;
use std::time::Duration;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Appends one line with the elapsed seconds of a top-level run.
pub async fn append_timing(path: &str, elapsed: Duration) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", elapsed.as_secs_f64()).as_bytes())
        .await?;
    file.flush().await?;
    Ok(())
}
