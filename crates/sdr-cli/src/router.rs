//! Command routing logic for CLI

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    match cli.command {
        Commands::Run {
            connection,
            config,
            catalog,
            categories,
            output,
            no_save,
            format,
            top,
        } => {
            commands::eval::run(commands::eval::RunOptions {
                connection,
                config,
                catalog,
                categories,
                output,
                no_save,
                format,
                top,
                verbose,
            })
            .await
        }
        Commands::Check { connection } => commands::check::check(connection, verbose).await,
        Commands::List { catalog } => commands::eval::list(catalog.as_deref()),
        Commands::Report { input, format } => commands::eval::report(&input, format).await,
        Commands::Compare { baseline, current } => {
            commands::eval::compare(&baseline, &current).await
        }
    }
}
