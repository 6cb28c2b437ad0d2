use anyhow::Context;
use salp_config::SalpConfig;
use salp_stub::StubServer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;

/// Handle `salp serve`: run the development backend until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: &SalpConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let addr = args.addr.as_deref().unwrap_or(&config.server.addr);
    let server = StubServer::bind(addr).context("failed to start development backend")?;

    if !flags.quiet {
        eprintln!("Development backend listening on http://{}", server.addr());
        eprintln!("Predictions: POST {}", server.predict_url());
        eprintln!("Press Ctrl-C to stop.");
    }

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    drop(server);
    Ok(())
}
