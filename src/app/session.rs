//! The owning session state: the selected source file, the authoritative
//! code list, and the export artifact derived from it.
//!
//! Every mutation funnels through `replace_codes` or `remove_code`, and
//! each of them rebuilds the artifact before touching the list, so a
//! present artifact always matches the list exactly as it stands. A failed
//! rebuild leaves both the list and the previous artifact in place.

use std::path::Path;

use super::error::Result;
use super::exporter::ExportArtifact;
use super::grid;

#[derive(Default)]
pub struct CodeSession {
    source_path: Option<String>,
    codes: Vec<String>,
    artifact: Option<ExportArtifact>,
}

impl CodeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Remember the selected input file. The code list is untouched until
    /// the next extraction commits.
    pub fn set_source_path(&mut self, path: String) {
        self.source_path = Some(path);
    }

    /// File name of the selected input, for window/label display.
    pub fn source_display_name(&self) -> Option<String> {
        self.source_path.as_ref().map(|path| {
            Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone())
        })
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn artifact(&self) -> Option<&ExportArtifact> {
        self.artifact.as_ref()
    }

    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    /// Replace the whole list (the post-extraction commit). The new
    /// artifact is staged first; only on success is the list swapped in
    /// and the superseded artifact released. An empty list drops the
    /// artifact entirely.
    pub fn replace_codes(&mut self, codes: Vec<String>) -> Result<()> {
        let artifact = if codes.is_empty() {
            None
        } else {
            Some(ExportArtifact::stage(&codes)?)
        };
        self.codes = codes;
        self.artifact = artifact;
        Ok(())
    }

    /// Remove every occurrence of `value` from the list and rebuild the
    /// artifact. Returns how many entries were removed; a value not
    /// present is a no-op that keeps the current artifact.
    pub fn remove_code(&mut self, value: &str) -> Result<usize> {
        let mut candidate = self.codes.clone();
        let removed = grid::remove_code(&mut candidate, value);
        if removed == 0 {
            return Ok(0);
        }
        self.replace_codes(candidate)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_session_starts_absent() {
        let session = CodeSession::new();
        assert!(session.codes().is_empty());
        assert!(!session.has_artifact());
        assert!(session.source_path().is_none());
    }

    #[test]
    fn test_replace_with_codes_makes_artifact_present() {
        let mut session = CodeSession::new();
        session.replace_codes(codes(&["ABCDEFGHIJ"])).unwrap();

        assert_eq!(session.codes().len(), 1);
        let artifact = session.artifact().expect("artifact present");
        assert_eq!(artifact.row_count(), 1);
        assert!(artifact.staged_path().exists());
    }

    #[test]
    fn test_replace_supersedes_and_invalidates_old_handle() {
        let mut session = CodeSession::new();
        session.replace_codes(codes(&["ABCDEFGHIJ"])).unwrap();
        let old_handle = session.artifact().unwrap().staged_path().to_path_buf();

        session
            .replace_codes(codes(&["KLMNOPQRST", "UVWXYZ0123"]))
            .unwrap();
        let new_handle = session.artifact().unwrap().staged_path().to_path_buf();

        assert_ne!(old_handle, new_handle);
        assert!(!old_handle.exists());
        assert!(new_handle.exists());
        assert_eq!(session.artifact().unwrap().row_count(), 2);
    }

    #[test]
    fn test_replace_with_empty_returns_to_absent() {
        let mut session = CodeSession::new();
        session.replace_codes(codes(&["ABCDEFGHIJ"])).unwrap();
        let old_handle = session.artifact().unwrap().staged_path().to_path_buf();

        session.replace_codes(Vec::new()).unwrap();
        assert!(session.codes().is_empty());
        assert!(!session.has_artifact());
        assert!(!old_handle.exists());
    }

    #[test]
    fn test_remove_deletes_every_occurrence_and_rebuilds() {
        let mut session = CodeSession::new();
        session
            .replace_codes(codes(&["AAAAAAAAAA", "BBBBBBBBBB", "AAAAAAAAAA"]))
            .unwrap();

        let removed = session.remove_code("AAAAAAAAAA").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(session.codes(), &codes(&["BBBBBBBBBB"])[..]);
        assert_eq!(session.artifact().unwrap().row_count(), 1);
    }

    #[test]
    fn test_remove_missing_value_keeps_current_artifact() {
        let mut session = CodeSession::new();
        session.replace_codes(codes(&["ABCDEFGHIJ"])).unwrap();
        let handle = session.artifact().unwrap().staged_path().to_path_buf();

        let removed = session.remove_code("NOTPRESENT").unwrap();
        assert_eq!(removed, 0);
        assert_eq!(session.artifact().unwrap().staged_path(), handle.as_path());
        assert!(handle.exists());
    }

    #[test]
    fn test_removing_last_code_returns_to_absent() {
        let mut session = CodeSession::new();
        session.replace_codes(codes(&["ABCDEFGHIJ"])).unwrap();
        let handle = session.artifact().unwrap().staged_path().to_path_buf();

        let removed = session.remove_code("ABCDEFGHIJ").unwrap();
        assert_eq!(removed, 1);
        assert!(session.codes().is_empty());
        assert!(!session.has_artifact());
        assert!(!handle.exists());
    }

    #[test]
    fn test_remove_on_empty_session_is_noop() {
        let mut session = CodeSession::new();
        assert_eq!(session.remove_code("ABCDEFGHIJ").unwrap(), 0);
        assert!(!session.has_artifact());
    }

    #[test]
    fn test_source_display_name() {
        let mut session = CodeSession::new();
        assert_eq!(session.source_display_name(), None);

        session.set_source_path("/home/user/vouchers.txt".to_string());
        assert_eq!(
            session.source_display_name().as_deref(),
            Some("vouchers.txt")
        );
    }
}
