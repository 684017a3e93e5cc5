// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

pub mod handlers;
pub mod menu;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from selectable character classes", long_about = None)]
pub struct Args {
    /// Password length (at least 4)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Print a JSON array of reports instead of plain passwords
    #[arg(long)]
    pub json: bool,

    /// Show a strength score and entropy estimate for each password
    #[arg(long)]
    pub strength: bool,

    /// Prompt for the generation options
    #[arg(long, short)]
    pub interactive: bool,
}

impl Args {
    // Command-line flags layered over the configured defaults
    pub fn to_options(&self, config: &Config) -> PasswordGenerationOptions {
        let defaults = config.password_options();
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_lowercase: defaults.include_lowercase && !self.no_lowercase,
            include_uppercase: defaults.include_uppercase && !self.no_uppercase,
            include_numbers: defaults.include_numbers && !self.no_numbers,
            include_symbols: defaults.include_symbols && !self.no_symbols,
        }
    }

    pub fn count(&self, config: &Config) -> usize {
        self.count.unwrap_or(config.default_password_count)
    }
}
