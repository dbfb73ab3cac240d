use anyhow::Context;
use nyaya_config::NyayaConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (including `.env`) and apply command-line
/// overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NyayaConfig> {
    let mut config =
        NyayaConfig::load_with_dotenv().context("failed to load nyaya configuration")?;
    apply_overrides(&mut config, flags);
    config
        .validate()
        .context("invalid --api-url or --timeout")?;

    tracing::debug!(origin = config.api.origin(), "configuration loaded");
    Ok(config)
}

fn apply_overrides(config: &mut NyayaConfig, flags: &GlobalFlags) {
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(secs) = flags.timeout {
        config.api.timeout_secs = secs;
    }
}
