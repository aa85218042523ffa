use folio_config::FolioConfig;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler. The seed is only loaded for
/// commands that read it.
pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &FolioConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => commands::schema::handle(args, flags),
        Commands::Seed => {
            let provider = bootstrap::load_provider(flags, config)?;
            commands::seed::handle(&provider, flags)
        }
        Commands::Articles => {
            let provider = bootstrap::load_provider(flags, config)?;
            commands::articles::handle(&provider, flags)
        }
        Commands::Article(args) => {
            let provider = bootstrap::load_provider(flags, config)?;
            commands::article::handle(args, &provider, flags)
        }
    }
}
