use std::process::ExitCode;

use anyhow::Result;
use tracing::warn;

use config::BootstrapConfig;
use model_bootstrap::{init_logging, ModelBootstrap};
use model_fetcher::Inventory;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();

    let config = BootstrapConfig::from_env();
    println!("ComfyUI root: {}", config.comfyui_dir.display());

    let bootstrap = ModelBootstrap::new(config.clone())?;
    bootstrap.login().await;
    let report = bootstrap.run().await;

    println!("\n{}", "═".repeat(60));
    println!("  Download complete. Model inventory:");
    println!("{}", "═".repeat(60));
    let inventory = Inventory::scan(&config.models_dir())?;
    print!("{}", inventory.render());

    println!("\n  ComfyUI root: {}", config.comfyui_dir.display());
    println!("  Start ComfyUI and open http://localhost:8188\n");

    if report.has_failures() {
        warn!("{} artifact(s) failed to download", report.failed);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
