use anyhow::Context;
use salp_config::SalpConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `SALP_*` env) and apply
/// the `--endpoint` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SalpConfig> {
    let config = SalpConfig::load_with_dotenv().context("failed to load salp configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: SalpConfig, flags: &GlobalFlags) -> anyhow::Result<SalpConfig> {
    if let Some(endpoint) = &flags.endpoint {
        config.backend.endpoint = endpoint.trim().to_string();
        config.validate().context("invalid --endpoint")?;
    }
    Ok(config)
}
