/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    SelectFile,
    ExtractCodes,
    SaveSpreadsheet,
    FileQuit,
    WindowClose,

    // Preview
    RemoveCode(String),

    // View
    ToggleDarkMode,

    // Settings & Help
    OpenSettings,
    ShowAbout,

    // Background extraction
    ExtractionFinished(Result<Vec<String>, String>),
}
