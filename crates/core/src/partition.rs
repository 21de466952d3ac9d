//! Prefix partitioning of the merged table.

use std::collections::BTreeMap;

use crate::entry::PostalEntry;

/// Number of leading digits that define a partition.
pub const PREFIX_LEN: usize = 3;

/// One output partition: full postal code → entry, all codes sharing a
/// prefix. BTreeMap ordering gives ascending lexicographic keys, which
/// for fixed-width digit strings is also ascending numeric order.
pub type Partition = BTreeMap<String, PostalEntry>;

/// Serialized name for one prefix's partition document. The writer and
/// the lookup client both derive paths from this template, so it is a
/// contract.
pub fn partition_file_name(prefix: &str) -> String {
    format!("prefix-{}.json", prefix)
}

/// Group merged entries by the first three characters of the postal code.
///
/// Keys shorter than the prefix length, or with a multi-byte character
/// straddling the prefix boundary, are dropped — a malformed-data
/// safety net, not an error path. No entry is duplicated across
/// partitions, and nothing else is lost: the union of all partitions'
/// keys equals the input keys with a well-formed prefix.
pub fn partition_by_prefix(merged: &BTreeMap<String, PostalEntry>) -> BTreeMap<String, Partition> {
    let mut partitions: BTreeMap<String, Partition> = BTreeMap::new();
    for (zip, entry) in merged {
        if zip.len() < PREFIX_LEN || !zip.is_char_boundary(PREFIX_LEN) {
            continue;
        }
        let prefix = zip[..PREFIX_LEN].to_string();
        partitions
            .entry(prefix)
            .or_default()
            .insert(zip.clone(), entry.clone());
    }
    partitions
}
