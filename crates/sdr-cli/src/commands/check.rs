//! Connectivity check

use anyhow::{Result, bail};

use super::{client_config, grok_client};
use crate::args::ConnectionArgs;
use crate::console::CliConsole;

/// Send a tiny completion and report whether the API answered
pub async fn check(connection: ConnectionArgs, verbose: bool) -> Result<()> {
    let console = CliConsole::new(verbose);
    let config = client_config(&connection);

    if !config.has_api_key() {
        bail!("No API key: pass --api-key or set XAI_API_KEY");
    }

    console.info(&format!(
        "Testing {} with model {}",
        config.completions_url(),
        config.model
    ));

    let client = grok_client(config)?;
    if client.test_connection().await {
        console.success(&format!("Connected to {} ({})", client.config().base_url, client.model()));
        Ok(())
    } else {
        console.error("Connection test failed");
        bail!("could not reach {}", client.config().completions_url())
    }
}
