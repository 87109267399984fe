//! `Rasoi` - TUI cooking companion.
//!
//! Entry point for the application.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use rasoi::app::App;
use rasoi::cli::Args;
use rasoi::config::Credentials;
use rasoi::llm::RecipeFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Resolve credentials before the terminal takes over the screen, so a
    // missing key is a plain one-line failure instead of a garbled TUI.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("rasoi: {err}");
            std::process::exit(1);
        }
    };
    let fetcher = RecipeFetcher::new(&credentials);

    // Initialize the terminal with the crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, args, fetcher);

    // Restore the terminal
    ratatui::restore();

    result.context("terminal event loop failed")
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    args: Args,
    fetcher: RecipeFetcher,
) -> std::io::Result<()> {
    let mut app = App::new(fetcher);

    // Auto-submit when launched with a dish name
    if let Some(dish) = args.dish {
        app.search_for(&dish);
    }

    // Main event loop
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Poll for key events with a short timeout
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        // Process any pending fetch events
        app.process_events();

        // Advance the loading animation
        app.tick();

        // Check if we should quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
