//! `yubin lookup` — resolve a postal code against a partition host.
//!
//! Prints the romanized and Japanese names for the code; with --street,
//! --building, or --phone it also composes a US-style address the way a
//! checkout form would.

use serde::Serialize;

use yubin_client::{ClientError, PostalClient};
use yubin_core::address::{compose_address, ComposedAddress};
use yubin_core::sanitize::{sanitize_building, sanitize_phone, sanitize_street, sanitize_zip};
use yubin_core::PostalEntry;

use crate::exit_codes;
use crate::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupOutput {
    zip: String,
    entry: PostalEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<ComposedAddress>,
}

pub fn cmd_lookup(
    zip: String,
    base_url: String,
    street: Option<String>,
    building: Option<String>,
    phone: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let zip = sanitize_zip(&zip);
    if zip.len() != 7 {
        return Err(
            CliError::usage(format!("postal code must be 7 digits, got '{}'", zip))
                .hint("e.g. 1000001 or 100-0001"),
        );
    }

    let client = PostalClient::new(&base_url).map_err(network_error)?;
    let entry = client.lookup(&zip).map_err(network_error)?;
    let Some(entry) = entry else {
        return Err(CliError::with_code(
            exit_codes::EXIT_LOOKUP_NOT_FOUND,
            format!("no entry for postal code {}", zip),
        ));
    };

    let compose = street.is_some() || building.is_some() || phone.is_some();
    let address = compose.then(|| {
        let street = sanitize_street(street.as_deref().unwrap_or(""));
        let building = sanitize_building(building.as_deref().unwrap_or(""));
        let phone = sanitize_phone(phone.as_deref().unwrap_or(""));
        compose_address(&zip, &entry, &street, &building, &phone)
    });

    let output = LookupOutput { zip, entry, address };
    if json {
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| CliError::with_code(exit_codes::EXIT_ERROR, e.to_string()))?;
        println!("{}", rendered);
    } else {
        print_plain(&output);
    }
    Ok(())
}

fn print_plain(output: &LookupOutput) {
    let entry = &output.entry;
    println!(
        "{}  {} {} {}",
        output.zip, entry.prefecture_ja, entry.city_ja, entry.town_ja
    );
    println!(
        "{}  {} {} {}",
        " ".repeat(output.zip.len()),
        entry.town_en,
        entry.city_en,
        entry.prefecture_en
    );
    if let Some(address) = &output.address {
        println!("address: {}", address.single_line);
        if let Some(phone) = &address.phone_intl {
            println!("phone:   {}", phone);
        }
    }
}

fn network_error(err: ClientError) -> CliError {
    CliError::with_code(exit_codes::EXIT_LOOKUP_NETWORK, err.to_string())
}
