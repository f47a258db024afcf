/// Filter pattern for the input picker.
///
/// FLTK format: "Description\tPattern". The input is expected (not
/// enforced beyond this filter) to be UTF-8 plain text.
pub fn text_files_filter() -> String {
    "Text Files\t*.txt".to_string()
}

/// Filter pattern for the spreadsheet save dialog.
pub fn spreadsheet_filter() -> String {
    "Excel Workbook\t*.xlsx".to_string()
}
