//! Command handlers

pub mod check;
pub mod eval;

use sdr_core::{ClientConfig, GrokClient};

use crate::args::ConnectionArgs;

/// Build the Grok client from CLI connection options
pub(crate) fn client_config(connection: &ConnectionArgs) -> ClientConfig {
    let mut config = ClientConfig::default()
        .with_base_url(connection.base_url.clone())
        .with_model(connection.model.clone());
    config.api_key = connection.api_key.clone().filter(|k| !k.trim().is_empty());
    config
}

pub(crate) fn grok_client(config: ClientConfig) -> anyhow::Result<GrokClient> {
    Ok(GrokClient::new(config)?)
}
