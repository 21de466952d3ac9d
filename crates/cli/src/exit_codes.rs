//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                              |
//! |---------|-----------|------------------------------------------|
//! | 0       | Universal | Success                                  |
//! | 1       | Universal | General error (unspecified)              |
//! | 2       | Universal | CLI usage error (bad args)               |
//! | 10-19   | fetch     | Dataset build pipeline                   |
//! | 20-29   | lookup    | Postal code lookup                       |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Fetch (10-19)
// =============================================================================

/// Downloading a source archive failed (transport error or non-2xx).
pub const EXIT_FETCH_DOWNLOAD: u8 = 10;

/// The downloaded bytes were not a readable ZIP, or held no CSV entry.
pub const EXIT_FETCH_ARCHIVE: u8 = 11;

/// The extracted CSV could not be parsed.
pub const EXIT_FETCH_PARSE: u8 = 12;

/// Writing partition files failed.
pub const EXIT_FETCH_WRITE: u8 = 13;

// =============================================================================
// Lookup (20-29)
// =============================================================================

/// No entry exists for the requested postal code.
pub const EXIT_LOOKUP_NOT_FOUND: u8 = 20;

/// Fetching the partition file failed (transport or server error).
pub const EXIT_LOOKUP_NETWORK: u8 = 21;
