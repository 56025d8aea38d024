use std::path::PathBuf;

use clap::Parser;

use crate::{models::TaxFormModel, settings::Settings};

/// Tax calculator for a bill amount and a tax percentage.
///
/// Opens the calculator window, or with `--amount` prints the tax for the
/// given values and exits.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Settings file to read instead of the per-user default.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Locale for currency formatting, e.g. `en_US` or `de-DE`.
    #[arg(long)]
    pub locale: Option<String>,

    /// Log filter (`info`, `debug`, or a full `RUST_LOG` style directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Suppress log output on stdout.
    #[arg(long)]
    pub quiet: bool,

    /// Bill amount. Prints the tax and exits instead of opening the window.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Tax percentage used with `--amount`.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub tax_percent: String,

    /// Round the tax up to the next whole unit. Used with `--amount`.
    #[arg(long)]
    pub round_up: bool,
}

impl Cli {
    /// Overrides file settings with any flags given on the command line.
    pub fn apply_to(
        &self,
        settings: &mut Settings,
    ) {
        if let Some(locale) = &self.locale {
            settings.locale = Some(locale.clone());
        }
        if let Some(level) = &self.log_level {
            settings.log_level = Some(level.clone());
        }
        if let Some(file) = &self.log_file {
            settings.log_file = Some(file.clone());
        }
        if self.quiet {
            settings.log_stdout = false;
        }
    }

    /// The form values for a one-shot calculation, if `--amount` was given.
    pub fn one_shot(&self) -> Option<TaxFormModel> {
        self.amount
            .as_ref()
            .map(|amount| TaxFormModel::new(amount.as_str(), self.tax_percent.as_str(), self.round_up))
    }
}
