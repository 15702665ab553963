#![cfg(feature = "demo")]
use telepulse_datasource::demo_cli;
use telepulse_datasource::DsResult;

#[tokio::main]
async fn main() -> DsResult<()> {
    demo_cli::run().await
}
