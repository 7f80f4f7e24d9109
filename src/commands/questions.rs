use crate::api::{validate_topic, Pipeline};
use crate::core::context::AppCtx;
use spinners::{Spinner, Spinners};

/// Print clarifying questions for `topic`.
pub async fn run(ctx: &AppCtx, topic: &str) -> Result<(), String> {
    validate_topic(topic).map_err(|e| e.to_string())?;

    let pipeline = Pipeline::from_config(&ctx.config).map_err(|e| e.to_string())?;

    let mut sp = Spinner::new(Spinners::Dots9, "Thinking of questions...".into());
    match pipeline.clarify(topic).await {
        Ok(result) => {
            sp.stop_with_message("✔ Questions ready.".into());
            println!("\n{}", result.questions);
            Ok(())
        }
        Err(e) => {
            sp.stop_with_message("✖ Question generation failed.".into());
            Err(e.to_string())
        }
    }
}
