#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jobflow_lib::run().await?;
    Ok(())
}
