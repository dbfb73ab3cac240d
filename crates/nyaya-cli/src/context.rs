use nyaya_client::ApiClient;
use nyaya_config::NyayaConfig;

/// Shared resources built once at startup.
pub struct AppContext {
    pub client: ApiClient,
    pub config: NyayaConfig,
}

impl AppContext {
    pub fn init(config: NyayaConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self { client, config })
    }
}
