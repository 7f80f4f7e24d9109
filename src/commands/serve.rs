use crate::api::Pipeline;
use crate::core::context::AppCtx;
use crate::server;
use console::style;
use std::sync::Arc;

/// Run the HTTP endpoints until interrupted.
pub async fn run(ctx: &AppCtx, bind: Option<&str>) -> Result<(), String> {
    let bind = bind.unwrap_or(ctx.config.server.bind.as_str());
    let pipeline = Pipeline::from_config(&ctx.config).map_err(|e| e.to_string())?;

    println!(
        "Serving on {} (config: {})",
        style(bind).yellow(),
        ctx.config_path.display()
    );
    server::serve(bind, Arc::new(pipeline))
        .await
        .map_err(|e| format!("Server error on {}: {}", bind, e))
}
