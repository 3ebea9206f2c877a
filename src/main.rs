mod assistant;
mod calendar;
mod cli;
mod config;
mod content;
mod db;
mod gateway;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    AppConfig::ensure_data_dir()?;
    let conn = db::open(&AppConfig::db_path()?)?;

    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&conn, &config)?,
        Some(Commands::Calendar { month, year }) => handlers::handle_calendar(&config, month, year)?,
        Some(Commands::Location {
            query,
            lat,
            lng,
            pick,
        }) => {
            let coords = lat.zip(lng);
            handlers::handle_location(&conn, &mut config, &query, coords, pick)?
        }
        Some(Commands::Method { id }) => handlers::handle_method(&conn, &mut config, id)?,
        Some(Commands::Lang { language }) => handlers::handle_lang(&mut config, &language)?,
        Some(Commands::Mark { prayer }) => handlers::handle_mark(&conn, &config, &prayer)?,
        Some(Commands::Fast) => handlers::handle_fast(&conn)?,
        Some(Commands::Pages { delta }) => handlers::handle_pages(&conn, &delta)?,
        Some(Commands::Progress) => handlers::handle_progress(&conn, &config)?,
        Some(Commands::Quran { number, search }) => {
            handlers::handle_quran(&config, number, search.as_deref())?
        }
        Some(Commands::Dua { category, search }) => {
            handlers::handle_dua(&config, category.as_deref(), search.as_deref())?
        }
        Some(Commands::Quote) => handlers::handle_quote(&config)?,
        Some(Commands::Ask { message, reset }) => {
            handlers::handle_ask(&conn, &config, &message, reset)?
        }

        // No subcommand → launch TUI
        None => tui::app::run(conn, config)?,
    }

    Ok(())
}
