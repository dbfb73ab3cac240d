use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Consult(args) => commands::consult::handle(&args, ctx, flags).await,
        Commands::Crime => commands::crime::handle(ctx, flags).await,
        Commands::Women => commands::women::handle(ctx, flags).await,
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Ipc { action } => commands::ipc::handle(&action, ctx, flags).await,
    }
}
