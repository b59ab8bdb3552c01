use super::logging;
use super::render::{render_list, render_messages};
use super::screen::Screen;
use super::setup::{Cli, Commands};
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use std::io;
use todoapp::commands::CmdResult;
use todoapp::config::{StorageKind, TodoConfig};
use todoapp::error::{Result, TodoError};
use todoapp::init::{initialize, TodoContext};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_file = cli.config_file.clone().or_else(TodoConfig::default_file);
    let mut config = match &cli.config_file {
        Some(explicit) => TodoConfig::load_required(explicit)?,
        None => TodoConfig::load(config_file.as_deref())?,
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if cli.memory {
        config.storage = StorageKind::Memory;
    }

    logging::init(cli.verbose, &config.log_level);
    debug!(?config_file, storage = %config.storage, "configuration resolved");

    let mut ctx = initialize(config)?;
    // stderr, so `list --json` stays parseable
    eprint!("{}", render_messages(&ctx.startup_messages));

    match cli.command {
        None => handle_list(&ctx, false),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Add { due, text }) => handle_add(&mut ctx, text, due),
        Some(Commands::Remove { position }) => handle_remove(&mut ctx, position),
        Some(Commands::Screen) => handle_screen(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
    }
}

fn handle_list(ctx: &TodoContext, json: bool) -> Result<()> {
    let result = ctx.api.list();
    if json {
        let out = serde_json::to_string_pretty(&result.listed)
            .map_err(|e| TodoError::Api(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", render_list(&result.listed));
    }
    Ok(())
}

fn handle_add(ctx: &mut TodoContext, text: Vec<String>, due: Option<DateTime<Utc>>) -> Result<()> {
    let result = ctx.api.add(text.join(" "), due)?;
    print_result(&result);
    Ok(())
}

fn handle_remove(ctx: &mut TodoContext, position: usize) -> Result<()> {
    let result = ctx.api.remove(position)?;
    print_result(&result);
    Ok(())
}

fn handle_screen(ctx: &mut TodoContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Screen::new(&mut ctx.api, stdout.lock()).run(stdin.lock())
}

fn handle_path(ctx: &TodoContext) -> Result<()> {
    match &ctx.data_file {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", "(in memory, nothing is saved)".dimmed()),
    }
    Ok(())
}

fn handle_config(ctx: &TodoContext) -> Result<()> {
    for (key, value) in ctx.config.entries() {
        println!("{} = {}", key.bold(), value);
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
    print!("{}", render_list(&result.listed));
}
