use crate::api::{validate_query, Pipeline, StoryRecord};
use crate::core::context::AppCtx;
use console::style;
use spinners::{Spinner, Spinners};
use std::fs;
use std::path::Path;

/// Research `query`, generate the story and print it.
pub async fn run(
    ctx: &AppCtx,
    query: &str,
    out: Option<&Path>,
    show_research: bool,
) -> Result<(), String> {
    validate_query(query).map_err(|e| e.to_string())?;

    let pipeline = Pipeline::from_config(&ctx.config).map_err(|e| e.to_string())?;

    let mut sp = Spinner::new(
        Spinners::Dots9,
        "Researching and writing your story...".into(),
    );
    let record = match pipeline.run(query).await {
        Ok(record) => {
            sp.stop_with_message("✔ Story ready.".into());
            record
        }
        Err(e) => {
            sp.stop_with_message("✖ Story generation failed.".into());
            return Err(e.to_string());
        }
    };

    print_record(&record, show_research);

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
        fs::write(path, json)
            .map_err(|e| format!("Unable to write {}: {}", path.display(), e))?;
        println!("{} {}", style("Saved to").green(), path.display());
    }

    Ok(())
}

fn print_record(record: &StoryRecord, show_research: bool) {
    println!("\n{}", style(&record.title).green().bold());
    println!(
        "{}",
        style(format!(
            "{} words · about {} min · id {}",
            record.word_count, record.estimated_duration_minutes, record.id
        ))
        .dim()
    );
    if show_research {
        println!("\n{}", style("Research brief:").yellow().bold());
        println!("{}", record.research);
    }
    println!("\n{}", record.story);
}
