//! CLI argument parsing using clap.

use clap::Parser;

/// `Rasoi` - Terminal cooking companion
///
/// Generates a structured recipe for any dish with Gemini and guides you
/// through cooking it. If a dish name is provided, generation starts
/// immediately; otherwise the app opens on the search screen.
#[derive(Parser, Debug)]
#[command(name = "rasoi", version, about, long_about = None)]
pub struct Args {
    /// Dish to generate right away (optional - if omitted, shows the search screen)
    pub dish: Option<String>,
}
