//! Spreadsheet artifact construction and staging.
//!
//! The workbook encoder is a black box: codes go in, XLSX bytes come out.
//! Every regeneration stages the fresh bytes to a temp file; that file is
//! the retrievable handle a save action materializes from. Superseded
//! artifacts delete their staged file when dropped, and the whole staging
//! directory is removed on quit.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use rust_xlsxwriter::Workbook;

use super::error::{AppError, Result};

/// Fixed file name offered when the user saves the spreadsheet.
pub const EXPORT_FILE_NAME: &str = "extracted_codes.xlsx";

/// Name of the single worksheet in the export.
pub const SHEET_NAME: &str = "Codes";

/// Encode the full code list as a single-sheet workbook: one column, no
/// header row, one row per code in list order.
pub fn build_workbook(codes: &[String]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (row, code) in codes.iter().enumerate() {
        worksheet.write_string(row as u32, 0, code.as_str())?;
    }
    Ok(workbook.save_to_buffer()?)
}

/// Get the staging directory for export artifacts.
pub fn export_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("codesieve-exports");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Remove the entire export staging directory.
pub fn cleanup_export_dir() {
    let dir = std::env::temp_dir().join("codesieve-exports");
    let _ = fs::remove_dir_all(dir);
}

/// Compute a staged path unique to this generation of the list. The
/// sequence number keeps back-to-back exports of identical lists from
/// sharing a file, so releasing the old handle never touches the new one.
fn staged_export_path(codes: &[String]) -> PathBuf {
    static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

    let mut hasher = DefaultHasher::new();
    codes.hash(&mut hasher);
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed).hash(&mut hasher);
    export_dir().join(format!("{:016x}.xlsx", hasher.finish()))
}

/// A fully built export: the workbook bytes plus the staged file that
/// serves as the downloadable handle. Dropping the artifact releases the
/// staged file.
pub struct ExportArtifact {
    bytes: Vec<u8>,
    row_count: usize,
    staged_path: PathBuf,
}

impl ExportArtifact {
    /// Encode `codes` and stage the result. An empty list never produces
    /// an artifact; callers drop the previous one instead.
    pub fn stage(codes: &[String]) -> Result<Self> {
        if codes.is_empty() {
            return Err(AppError::Export(
                "an empty code list has no spreadsheet".to_string(),
            ));
        }

        let bytes = build_workbook(codes)?;
        let staged_path = staged_export_path(codes);
        fs::write(&staged_path, &bytes)?;

        Ok(Self {
            bytes,
            row_count: codes.len(),
            staged_path,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The staged file backing this artifact, valid until the artifact is
    /// superseded or dropped.
    pub fn staged_path(&self) -> &Path {
        &self.staged_path
    }

    /// Materialize the artifact at `dest`. Safe to repeat; every call
    /// writes the same bytes.
    pub fn save_to(&self, dest: &Path) -> Result<()> {
        fs::write(dest, &self.bytes)?;
        Ok(())
    }
}

impl Drop for ExportArtifact {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.staged_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// Read back the single column of a produced workbook, top to bottom.
    fn decode_first_column(bytes: &[u8]) -> Vec<String> {
        let cursor = std::io::Cursor::new(bytes.to_vec());
        let mut archive = zip::ZipArchive::new(cursor).expect("artifact is a zip package");

        let mut shared = String::new();
        archive
            .by_name("xl/sharedStrings.xml")
            .expect("shared strings part present")
            .read_to_string(&mut shared)
            .unwrap();
        let strings: Vec<String> = shared
            .split("<t>")
            .skip(1)
            .map(|chunk| chunk.split("</t>").next().unwrap().to_string())
            .collect();

        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .expect("worksheet part present")
            .read_to_string(&mut sheet)
            .unwrap();
        sheet
            .split("<v>")
            .skip(1)
            .map(|chunk| chunk.split("</v>").next().unwrap())
            .map(|index| strings[index.parse::<usize>().unwrap()].clone())
            .collect()
    }

    #[test]
    fn test_workbook_is_a_zip_package() {
        let bytes = build_workbook(&codes(&["ABCDEFGHIJ"])).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_column_round_trips_in_order() {
        let list = codes(&["AB12CD34EF", "GH56IJ78KL90", "ZZZZZZZZZZ"]);
        let bytes = build_workbook(&list).unwrap();
        assert_eq!(decode_first_column(&bytes), list);
    }

    #[test]
    fn test_duplicates_keep_their_own_rows() {
        let list = codes(&["ABCDEFGHIJ", "ABCDEFGHIJ"]);
        let bytes = build_workbook(&list).unwrap();
        assert_eq!(decode_first_column(&bytes), list);
    }

    #[test]
    fn test_stage_rejects_empty_list() {
        let result = ExportArtifact::stage(&[]);
        assert!(matches!(result, Err(AppError::Export(_))));
    }

    #[test]
    fn test_stage_writes_handle_and_drop_releases_it() {
        let artifact = ExportArtifact::stage(&codes(&["ABCDEFGHIJ"])).unwrap();
        let staged = artifact.staged_path().to_path_buf();
        assert!(staged.exists());
        assert_eq!(artifact.row_count(), 1);

        drop(artifact);
        assert!(!staged.exists());
    }

    #[test]
    fn test_successive_stages_use_distinct_handles() {
        let list = codes(&["ABCDEFGHIJ"]);
        let first = ExportArtifact::stage(&list).unwrap();
        let second = ExportArtifact::stage(&list).unwrap();
        assert_ne!(first.staged_path(), second.staged_path());

        // Releasing the superseded handle leaves the new one intact
        let second_path = second.staged_path().to_path_buf();
        drop(first);
        assert!(second_path.exists());
    }

    #[test]
    fn test_save_to_is_idempotent() {
        let artifact = ExportArtifact::stage(&codes(&["ABCDEFGHIJ", "KLMNOPQRST"])).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(EXPORT_FILE_NAME);

        artifact.save_to(&dest).unwrap();
        let first = fs::read(&dest).unwrap();
        artifact.save_to(&dest).unwrap();
        let second = fs::read(&dest).unwrap();

        assert_eq!(first, artifact.bytes());
        assert_eq!(first, second);
    }
}
