use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rk_core::Post;
use tracing_subscriber::EnvFilter;

use rk_cli::commands::{about, activities, chart, classify, descriptions, posts, util};
use rk_cli::{Cli, Commands, Config};

/// Load config, apply the `--data` override, and read the posts file.
fn load_posts(cli: &Cli) -> Result<(Config, Vec<Post>)> {
    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(data) = &cli.data {
        config.data_path.clone_from(data);
    }
    tracing::debug!(?config, "loaded configuration");

    let posts = util::load_posts(&config)?;
    Ok((config, posts))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::About { json }) => {
            let (config, loaded) = load_posts(&cli)?;
            about::run(&mut stdout, &loaded, &config.date_format, *json)?;
        }
        Some(Commands::Activities { json, top }) => {
            let (config, loaded) = load_posts(&cli)?;
            let top = top.unwrap_or(config.top_activities);
            activities::run(&mut stdout, &loaded, top, *json)?;
        }
        Some(Commands::Descriptions { search, json }) => {
            let (config, loaded) = load_posts(&cli)?;
            descriptions::run(
                &mut stdout,
                &loaded,
                search.as_deref(),
                &config.date_format,
                *json,
            )?;
        }
        Some(Commands::Posts { limit, json }) => {
            let (config, loaded) = load_posts(&cli)?;
            posts::run(&mut stdout, &loaded, *limit, &config.date_format, *json)?;
        }
        Some(Commands::Chart { kind, top }) => {
            let (config, loaded) = load_posts(&cli)?;
            let top = top.unwrap_or(config.top_activities);
            chart::run(&mut stdout, &loaded, *kind, top)?;
        }
        Some(Commands::Classify { text, json }) => {
            // Classify works on literal text and needs no data file
            classify::run(&mut stdout, text, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
