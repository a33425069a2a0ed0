use clap::Parser;
use mselect::{format_selection, App, AppFlags, Cli, Config, GraphqlCatalog};
use mselect_core::{OutputTarget, ProgramOptions};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

// The terminal belongs to the UI, so logs only go to a file when asked for.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_cli(Cli::parse())?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    let catalog = GraphqlCatalog::new(config.endpoint.as_str(), config.timeout)?;
    log::info!("using catalog at {}", catalog.endpoint());

    let flags = AppFlags {
        source: Arc::new(catalog),
        list_height: config.list_height,
    };
    // Draw on stderr so stdout carries only the selection.
    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("mselect".to_string()),
        output: OutputTarget::Stderr,
        ..ProgramOptions::default()
    };
    let app = mselect_core::run_with::<App>(flags, options).await?;

    let text = format_selection(&app.selection(), config.output)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
