use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Form(args) => commands::form::handle(&args, ctx, flags).await,
        Commands::Predict(args) => commands::predict::handle(&args, ctx, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, &ctx.config, flags).await,
        Commands::Fields | Commands::Schema(_) => {
            unreachable!("fields/schema are pre-dispatched in main")
        }
    }
}
