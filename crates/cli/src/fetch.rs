//! `yubin fetch` — download the source archives and build the dataset.
//!
//! Pipeline: download both ZIPs (in parallel) → extract + decode the
//! CSV from each → load the two tables → inner-join on postal code →
//! partition by 3-digit prefix → write one JSON file per prefix.
//!
//! Downloads are a single attempt each. The sources are stable
//! publisher mirrors, and this runs as a batch job where a failed run
//! is simply re-run.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use url::Url;

use yubin_core::{merge_tables, partition_by_prefix};
use yubin_io::archive::extract_csv;
use yubin_io::table::{load_ja_table, load_rome_table, LoadStats};
use yubin_io::writer::write_partitions;

use crate::exit_codes;
use crate::CliError;

// ── Constants ───────────────────────────────────────────────────────

pub const DEFAULT_JA_URL: &str =
    "https://www.post.japanpost.jp/zipcode/dl/kogaki/zip/ken_all.zip";
pub const DEFAULT_ROME_URL: &str =
    "https://www.post.japanpost.jp/zipcode/dl/roman/KEN_ALL_ROME.zip";

const DOWNLOAD_TIMEOUT_SECS: u64 = 120;
const USER_AGENT: &str = concat!("yubin/", env!("CARGO_PKG_VERSION"));

// ── Command ─────────────────────────────────────────────────────────

pub fn cmd_fetch(
    ja_url: String,
    rome_url: String,
    out: PathBuf,
    quiet: bool,
) -> Result<(), CliError> {
    for raw in [&ja_url, &rome_url] {
        Url::parse(raw).map_err(|e| CliError::usage(format!("invalid url {}: {}", raw, e)))?;
    }

    progress(quiet, &format!("downloading {}", ja_url));
    progress(quiet, &format!("downloading {}", rome_url));
    let rome_handle = {
        let rome_url = rome_url.clone();
        thread::spawn(move || download(&rome_url))
    };
    let ja_bytes = download(&ja_url)?;
    let rome_bytes = rome_handle
        .join()
        .map_err(|_| CliError::with_code(exit_codes::EXIT_ERROR, "download thread panicked"))??;

    let ja_csv = extract_csv(&ja_bytes).map_err(|msg| archive_error(&ja_url, msg))?;
    let rome_csv = extract_csv(&rome_bytes).map_err(|msg| archive_error(&rome_url, msg))?;

    let (ja_table, ja_stats) = load_ja_table(&ja_csv)
        .map_err(|msg| CliError::with_code(exit_codes::EXIT_FETCH_PARSE, msg))?;
    let (rome_table, rome_stats) = load_rome_table(&rome_csv)
        .map_err(|msg| CliError::with_code(exit_codes::EXIT_FETCH_PARSE, msg))?;
    progress(quiet, &table_summary("ken_all", ja_table.len(), &ja_stats));
    progress(quiet, &table_summary("roman", rome_table.len(), &rome_stats));

    let (merged, merge_stats) = merge_tables(&ja_table, &rome_table);
    if !quiet {
        for zip in &merge_stats.invalid {
            eprintln!("warning: skip invalid entry: {}", zip);
        }
    }
    progress(
        quiet,
        &format!(
            "joined {} codes ({} ja-only, {} roman-only dropped)",
            merge_stats.joined, merge_stats.only_ja, merge_stats.only_rome
        ),
    );

    let partitions = partition_by_prefix(&merged);
    let written = write_partitions(&out, &partitions)
        .map_err(|msg| CliError::with_code(exit_codes::EXIT_FETCH_WRITE, msg))?;
    progress(
        quiet,
        &format!("wrote {} partition files to {}", written, out.display()),
    );

    Ok(())
}

// ── Download ────────────────────────────────────────────────────────

fn download(url: &str) -> Result<Vec<u8>, CliError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CliError::with_code(exit_codes::EXIT_ERROR, e.to_string()))?;

    let response = client.get(url).send().map_err(|e| {
        CliError::with_code(
            exit_codes::EXIT_FETCH_DOWNLOAD,
            format!("download failed for {}: {}", url, e),
        )
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::with_code(
            exit_codes::EXIT_FETCH_DOWNLOAD,
            format!("download failed for {}: HTTP {}", url, status.as_u16()),
        ));
    }

    let bytes = response.bytes().map_err(|e| {
        CliError::with_code(
            exit_codes::EXIT_FETCH_DOWNLOAD,
            format!("download failed for {}: {}", url, e),
        )
    })?;
    Ok(bytes.to_vec())
}

fn archive_error(url: &str, msg: String) -> CliError {
    CliError::with_code(
        exit_codes::EXIT_FETCH_ARCHIVE,
        format!("bad archive from {}: {}", url, msg),
    )
}

fn table_summary(name: &str, kept: usize, stats: &LoadStats) -> String {
    format!(
        "{}: {} codes from {} rows ({} short, {} empty skipped)",
        name, kept, stats.rows, stats.skipped_short, stats.skipped_empty
    )
}

fn progress(quiet: bool, msg: &str) {
    if !quiet {
        eprintln!("{}", msg);
    }
}
