//! ZIP payload extraction.
//!
//! Both source datasets ship as a ZIP archive containing exactly one
//! CSV encoded in Shift-JIS. We take the first entry whose name ends in
//! `.csv` (case-insensitive) and decode it to UTF-8.

use std::io::{Cursor, Read};

use zip::ZipArchive;

/// Extract the CSV payload from a ZIP archive held in memory and decode
/// it from Shift-JIS.
///
/// Fails if the bytes are not a readable ZIP or if no entry has a
/// `.csv` name. A failure here aborts the whole run — there is nothing
/// to recover per-record at this stage.
pub fn extract_csv(bytes: &[u8]) -> Result<String, String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("invalid zip archive: {}", e))?;

    let csv_index = find_csv_entry(&mut archive)?;
    let Some(index) = csv_index else {
        return Err("no csv entry in archive".to_string());
    };

    let mut entry = archive
        .by_index(index)
        .map_err(|e| format!("cannot read archive entry: {}", e))?;
    let mut raw = Vec::new();
    entry
        .read_to_end(&mut raw)
        .map_err(|e| format!("cannot read archive entry: {}", e))?;

    let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(&raw);
    Ok(decoded.into_owned())
}

fn find_csv_entry<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Option<usize>, String> {
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| format!("cannot read archive entry: {}", e))?;
        if entry.name().to_lowercase().ends_with(".csv") {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_and_decodes_shift_jis() {
        let text = "01101,\"060\",\"0600000\",\"東京都\",\"千代田区\",\"千代田\"\n";
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(text);
        let zip_bytes = build_zip(&[("KEN_ALL.CSV", &encoded)]);

        let decoded = extract_csv(&zip_bytes).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let zip_bytes = build_zip(&[("readme.txt", b"hi"), ("Ken_All.Csv", b"a,b,c\n")]);
        let decoded = extract_csv(&zip_bytes).unwrap();
        assert_eq!(decoded, "a,b,c\n");
    }

    #[test]
    fn test_no_csv_entry_is_an_error() {
        let zip_bytes = build_zip(&[("readme.txt", b"hi")]);
        let err = extract_csv(&zip_bytes).unwrap_err();
        assert!(err.contains("no csv entry"), "got: {}", err);
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        let err = extract_csv(b"definitely not a zip").unwrap_err();
        assert!(err.contains("invalid zip"), "got: {}", err);
    }
}
