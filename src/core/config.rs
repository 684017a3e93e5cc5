// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

use crate::models::PasswordGenerationOptions;

// Configuration for the generator front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_lowercase: bool,
    pub default_include_uppercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_password_count: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_lowercase: true,
            default_include_uppercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            default_password_count: 1,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables, with warnings for ignored values
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key lookup; unknown or malformed values keep the default.
    // Runs before the logger exists, so problems are returned for the caller to log.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length, &mut warnings);
        parse_into(&lookup, "DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase, &mut warnings);
        parse_into(&lookup, "DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase, &mut warnings);
        parse_into(&lookup, "DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers, &mut warnings);
        parse_into(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols, &mut warnings);
        parse_into(&lookup, "DEFAULT_PASSWORD_COUNT", &mut config.default_password_count, &mut warnings);

        if config.default_password_count == 0 {
            warnings.push("DEFAULT_PASSWORD_COUNT must be at least 1, using 1".to_string());
            config.default_password_count = 1;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        (config, warnings)
    }

    // Generation options described by the configured defaults
    pub fn password_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            include_lowercase: self.default_include_lowercase,
            include_uppercase: self.default_include_uppercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, slot: &mut T, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key)),
        }
    }
}
