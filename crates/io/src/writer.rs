//! Partition file output.
//!
//! One compact JSON file per 3-digit prefix, named by
//! [`yubin_core::partition_file_name`]. Files are written in ascending
//! prefix order and overwrite whatever is already there, so a re-run
//! converges on the new dataset.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use yubin_core::{partition_file_name, Partition};

/// Write every partition under `out_dir`, creating the directory if
/// needed. Returns the number of files written.
pub fn write_partitions(
    out_dir: &Path,
    partitions: &BTreeMap<String, Partition>,
) -> Result<usize, String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("cannot create {}: {}", out_dir.display(), e))?;

    let mut written = 0;
    for (prefix, partition) in partitions {
        let json = serde_json::to_string(partition)
            .map_err(|e| format!("cannot serialize prefix {}: {}", prefix, e))?;
        let path = out_dir.join(partition_file_name(prefix));
        fs::write(&path, json).map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
        written += 1;
    }

    Ok(written)
}
