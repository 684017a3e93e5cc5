// src/cli/menu.rs
use inquire::{Confirm, InquireError, Text};

use crate::models::PasswordGenerationOptions;

// Ask for every generation option, offering `defaults` as the preset answers.
// Prompts and banner go to stderr so stdout keeps only the generated output.
pub fn prompt_options(defaults: &PasswordGenerationOptions) -> Result<PasswordGenerationOptions, InquireError> {
    eprintln!("🔐 Password generator");

    let default_length = defaults.length.to_string();
    let length = Text::new("Password length:")
        .with_default(&default_length)
        .prompt()
        .and_then(|s| parse_length(&s))?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(defaults.include_lowercase)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(defaults.include_uppercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(defaults.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(defaults.include_symbols)
        .prompt()?;

    Ok(PasswordGenerationOptions {
        length,
        include_lowercase,
        include_uppercase,
        include_numbers,
        include_symbols,
    })
}

pub fn parse_length(input: &str) -> Result<usize, InquireError> {
    input
        .trim()
        .parse()
        .map_err(|_| InquireError::Custom("Invalid number".into()))
}
