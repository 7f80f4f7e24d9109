use crate::cli::Cmd;
use crate::core::context::AppCtx;

pub mod init_config;
pub mod questions;
pub mod serve;
pub mod story;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Serve { bind } => serve::run(ctx, bind.as_deref()).await,
        Cmd::Story {
            query,
            out,
            show_research,
        } => story::run(ctx, &query, out.as_deref(), show_research).await,
        Cmd::Questions { topic } => questions::run(ctx, &topic).await,
        Cmd::InitConfig { force } => init_config::run(ctx, force),
    }
}
