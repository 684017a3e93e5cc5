// src/cli/handlers.rs
use std::io::Write;

use anyhow::{bail, Context};

use crate::cli::{menu, Args};
use crate::core::config::Config;
use crate::generators::{self, GeneratorError, PasswordGenerator, RandomSource, RngSource};
use crate::models::{GeneratedPassword, PasswordGenerationOptions};

pub fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let options = if args.interactive {
        menu::prompt_options(&args.to_options(config)).context("Failed to read generation options")?
    } else {
        args.to_options(config)
    };

    let count = args.count(config);
    if count == 0 {
        bail!("Password count must be at least 1");
    }

    log::info!("Generating {} password(s) with {:?}", count, options);

    let with_stats = args.strength || args.json;
    let mut rng = RngSource::os();
    let reports = generate_reports(&options, count, with_stats, &mut rng)
        .context("Failed to generate password")?;

    write_reports(out, &reports, args.json)
}

pub fn generate_reports<R>(
    options: &PasswordGenerationOptions,
    count: usize,
    with_stats: bool,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let generator = PasswordGenerator::new();
    let entropy = generators::estimate_entropy_bits(options);

    (0..count)
        .map(|_| -> Result<GeneratedPassword, GeneratorError> {
            let password = generator.generate_with(options, &mut *rng)?;
            let strength = generators::analyze_password_strength(&password);
            Ok(GeneratedPassword {
                length: password.chars().count(),
                classes: options.selected_classes(),
                strength: with_stats.then_some(strength),
                entropy_bits: with_stats.then_some(entropy),
                password,
            })
        })
        .collect()
}

pub fn write_reports<W: Write>(out: &mut W, reports: &[GeneratedPassword], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports).context("Failed to serialize passwords")?;
        writeln!(out)?;
        return Ok(());
    }

    for report in reports {
        writeln!(out, "{}", report.password)?;
        if let (Some(strength), Some(entropy)) = (report.strength, report.entropy_bits) {
            writeln!(out, "  Strength: {}/100, entropy: {:.1} bits", strength, entropy)?;
        }
    }
    Ok(())
}
