//! `yubin` — build and query the Japanese postal code dataset.
//!
//! Two commands:
//! - `yubin fetch` downloads the published source archives, joins them,
//!   and writes per-prefix partition files.
//! - `yubin lookup` resolves a postal code against a partition host and
//!   optionally composes a US-style address from it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod exit_codes;
mod fetch;
mod lookup;

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "yubin", version, about = "Japanese postal code dataset pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the source archives and write partition files
    Fetch {
        /// URL of the Japanese-script archive (ken_all)
        #[arg(long, env = "YUBIN_JA_URL", default_value = fetch::DEFAULT_JA_URL)]
        ja_url: String,

        /// URL of the romanization archive (roman)
        #[arg(long, env = "YUBIN_ROME_URL", default_value = fetch::DEFAULT_ROME_URL)]
        rome_url: String,

        /// Output directory for partition files
        #[arg(long, short, default_value = "public/postal")]
        out: PathBuf,

        /// Suppress progress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Look up a postal code against a partition host
    Lookup {
        /// The postal code (7 digits, separators allowed)
        zip: String,

        /// Base URL the partition files are served under
        #[arg(long, env = "YUBIN_BASE_URL")]
        base_url: String,

        /// Street number/name to compose into an address
        #[arg(long)]
        street: Option<String>,

        /// Building name to compose into an address
        #[arg(long)]
        building: Option<String>,

        /// Domestic phone number, converted to international form
        #[arg(long)]
        phone: Option<String>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            eprintln!("Usage: yubin <command> [options]");
            eprintln!("       yubin --help for more information");
            Ok(())
        }
        Some(Commands::Fetch {
            ja_url,
            rome_url,
            out,
            quiet,
        }) => fetch::cmd_fetch(ja_url, rome_url, out, quiet),
        Some(Commands::Lookup {
            zip,
            base_url,
            street,
            building,
            phone,
            json,
        }) => lookup::cmd_lookup(zip, base_url, street, building, phone, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn with_code(code: u8, msg: impl Into<String>) -> Self {
        Self {
            code,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
