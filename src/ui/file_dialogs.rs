use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::{spreadsheet_filter, text_files_filter};

/// Pick the input text file. Returns None if the user cancelled.
pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter(&text_files_filter());
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Pick where to save the exported spreadsheet. The dialog is pre-filled
/// with the fixed artifact file name.
pub fn native_save_dialog(directory: Option<&str>, preset_file: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(&spreadsheet_filter());
    nfc.set_preset_file(preset_file);
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
