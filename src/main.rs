// Main entry point
use clap::Parser;
use colored::Colorize;
use country_explorer::application::favourites::{
    add_to_favourites, remove_from_favourites, toggle_favourite, Toggle,
};
use country_explorer::application::lookup::{handle_search, SearchOutcome};
use country_explorer::infrastructure::config::{self, load_config, Logging};
use country_explorer::infrastructure::storage::db::init_database;
use country_explorer::interfaces::cli::Cli;
use country_explorer::interfaces::session::{SessionCommand, SESSION_HELP};
use country_explorer::presentation::render::{
    format_country, format_favourites, outcome_message, source_indicator,
};
use country_explorer::presentation::theme::Theme;
use country_explorer::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    // Setup database path (from config or default)
    let db_path = config::get_database_path(&config);
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_conn = init_database(&db_path).await?;
    let state = AppState::connect(db_conn, config.clone()).await?;

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);
    let emoji = config.enable_emoji;

    if cli.status {
        print_status(&state).await?;
        return Ok(());
    }

    if let Some(name) = &cli.add {
        add_to_favourites(&state, name).await;
        println!("Added {} to favourites", name.green());
    }
    if let Some(name) = &cli.remove {
        remove_from_favourites(&state, name).await;
        println!("Removed {} from favourites", name.yellow());
    }

    if cli.interactive {
        tokio::select! {
            result = run_session(&state, &theme, emoji) => {
                result?;
            }
            _ = &mut shutdown_rx => {
                eprintln!("\nInterrupted");
            }
        }
        return Ok(());
    }

    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        let outcome = tokio::select! {
            outcome = handle_search(&state, &query) => outcome,
            _ = &mut shutdown_rx => {
                eprintln!("\nSearch interrupted");
                return Ok(());
            }
        };

        if cli.json {
            match outcome.record() {
                Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                None => println!("null"),
            }
        } else {
            if cli.toggle {
                print_toggle(&toggle_favourite(&state).await);
            }
            print_outcome(&state, &outcome, &theme, emoji).await;
        }
    } else if cli.toggle {
        eprintln!("{}", "--toggle needs a country name".red());
        std::process::exit(1);
    }

    if cli.favourites {
        print!(
            "{}",
            format_favourites(&state.favourites.list().await, &theme, emoji)
        );
    }

    if cli.query.is_empty() && cli.add.is_none() && cli.remove.is_none() && !cli.favourites {
        eprintln!("{}", "Please provide a country name".red());
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = config::log_level_filter(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn print_outcome(state: &AppState, outcome: &SearchOutcome, theme: &Theme, emoji: bool) {
    if let Some(record) = outcome.record() {
        let is_favourite = state.favourites.contains(record.common_name()).await;
        let source = source_indicator(outcome, emoji);
        print!(
            "{}",
            format_country(record, theme, source, is_favourite, emoji)
        );
    } else if let Some(message) = outcome_message(outcome) {
        eprintln!("{}", message.bright_black());
    }
}

fn print_toggle(toggle: &Toggle) {
    match toggle {
        Toggle::Added(name) => println!("Added {} to favourites", name.green()),
        Toggle::Removed(name) => println!("Removed {} from favourites", name.yellow()),
        Toggle::NothingDisplayed => eprintln!("{}", "No country to add".bright_black()),
    }
}

async fn run_session(state: &AppState, theme: &Theme, emoji: bool) -> anyhow::Result<()> {
    use std::io::Write;
    use tokio::io::{AsyncBufReadExt, BufReader};

    println!("{}", SESSION_HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", "country>".green().bold());
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match SessionCommand::parse(&line) {
            SessionCommand::Search(text) => {
                let outcome = handle_search(state, &text).await;
                print_outcome(state, &outcome, theme, emoji).await;
            }
            SessionCommand::Open(n) => {
                let names = state.favourites.list().await;
                match names.get(n - 1) {
                    Some(name) => {
                        let outcome = handle_search(state, name).await;
                        print_outcome(state, &outcome, theme, emoji).await;
                    }
                    None => eprintln!("{}", format!("No favourite number {}", n).red()),
                }
            }
            SessionCommand::Toggle => print_toggle(&toggle_favourite(state).await),
            SessionCommand::ListFavourites => {
                print!("{}", format_favourites(&state.favourites.list().await, theme, emoji));
            }
            SessionCommand::Add(name) => {
                add_to_favourites(state, &name).await;
                print_toggle(&Toggle::Added(name));
            }
            SessionCommand::Remove(name) => {
                remove_from_favourites(state, &name).await;
                print_toggle(&Toggle::Removed(name));
            }
            SessionCommand::Help => println!("{}", SESSION_HELP),
            SessionCommand::Quit => break,
            SessionCommand::Blank => {}
            SessionCommand::Unknown(line) => {
                eprintln!("{}", format!("✘ Unknown command: {}", line).red());
            }
        }
    }

    Ok(())
}

async fn print_status(state: &AppState) -> anyhow::Result<()> {
    println!("{}", "ce Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = state.config.read().await;
    let db_path = config::get_database_path(&config);

    let count = state.store.count().await?;
    println!("Database: {} ({} keys)", db_path.display(), count);
    println!("Favourites: {}", state.favourites.list().await.len());
    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Directory: {}", config.directory.base_url);

    Ok(())
}
