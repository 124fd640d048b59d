#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashmatch_server::run().await
}
