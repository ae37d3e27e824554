use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    action_shrink_cli::main_entry().await
}
