use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app::Sender, button::Button, dialog, frame::Frame, menu::MenuBar, prelude::*, window::Window,
};

use super::exporter::{self, EXPORT_FILE_NAME};
use super::extractor::extract_codes;
use super::messages::Message;
use super::platform::detect_system_dark_mode;
use super::session::CodeSession;
use super::settings::{AppSettings, ThemeMode};
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::grid_view::GridView;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub session: CodeSession,
    /// Extraction in flight; re-triggering is disabled until it reports back.
    pub busy: bool,
    pub window: Window,
    pub menu: MenuBar,
    pub grid: GridView,
    pub source_label: Frame,
    pub select_button: Button,
    pub extract_button: Button,
    pub save_button: Button,
    pub total_label: Frame,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    /// Last directory used in a file open/save dialog.
    pub last_directory: Option<String>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        Self {
            session: CodeSession::new(),
            busy: false,
            window: widgets.wind,
            menu: widgets.menu,
            grid: widgets.grid,
            source_label: widgets.source_label,
            select_button: widgets.select_button,
            extract_button: widgets.extract_button,
            save_button: widgets.save_button,
            total_label: widgets.total_label,
            sender,
            settings,
            dark_mode,
            last_directory: None,
        }
    }

    // --- File selection & extraction ---

    pub fn select_file(&mut self) {
        if self.busy {
            return;
        }
        if let Some(path) = native_open_dialog(self.last_directory.as_deref()) {
            // Remember the parent directory for future open/save dialogs
            if let Some(parent) = Path::new(&path).parent() {
                self.last_directory = Some(parent.to_string_lossy().to_string());
            }
            self.session.set_source_path(path);
            self.extract_button.activate();
            self.update_source_label();
        }
    }

    /// Kick off extraction on a worker thread. The file read is the only
    /// operation that leaves the event loop; its result comes back as an
    /// `ExtractionFinished` message.
    pub fn start_extraction(&mut self) {
        if self.busy {
            return;
        }
        let Some(path) = self.session.source_path().map(str::to_string) else {
            dialog::message_default("Select a text file first.");
            return;
        };

        self.set_busy(true);
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = fs::read_to_string(&path)
                .map(|text| extract_codes(&text))
                .map_err(|e| format!("Error reading {}: {}", path, e));
            sender.send(Message::ExtractionFinished(result));
        });
    }

    pub fn finish_extraction(&mut self, result: Result<Vec<String>, String>) {
        self.set_busy(false);
        match result {
            Ok(codes) => {
                if let Err(e) = self.session.replace_codes(codes) {
                    eprintln!("Failed to build spreadsheet: {}", e);
                    dialog::alert_default(&format!("Error building spreadsheet: {}", e));
                }
                self.refresh_preview();
            }
            Err(message) => {
                eprintln!("Extraction failed: {}", message);
                dialog::alert_default(&message);
            }
        }
    }

    // --- Preview editing ---

    pub fn remove_code(&mut self, value: &str) {
        if self.busy {
            return;
        }
        if self.settings.borrow().confirm_remove {
            let prompt = format!("Remove every occurrence of \"{}\"?", value);
            if dialog::choice2_default(&prompt, "Remove", "Cancel", "") != Some(0) {
                return;
            }
        }
        match self.session.remove_code(value) {
            Ok(0) => {}
            Ok(_) => self.refresh_preview(),
            Err(e) => {
                eprintln!("Failed to rebuild spreadsheet: {}", e);
                dialog::alert_default(&format!("Error updating spreadsheet: {}", e));
            }
        }
    }

    /// Recompute the grid and the affordances that depend on the list:
    /// the total line and whether saving is possible.
    pub fn refresh_preview(&mut self) {
        let codes = self.session.codes();
        self.grid.refresh(codes);

        let total = codes.len();
        let label = if total == 1 {
            "Total: 1 code".to_string()
        } else {
            format!("Total: {} codes", total)
        };
        self.total_label.set_label(&label);

        if self.session.has_artifact() {
            self.save_button.activate();
        } else {
            self.save_button.deactivate();
        }
        self.window.redraw();
    }

    // --- Saving ---

    pub fn save_spreadsheet(&mut self) {
        // Guarded: the button and menu entry are only live with an artifact
        let Some(artifact) = self.session.artifact() else {
            return;
        };
        if let Some(dest) = native_save_dialog(self.last_directory.as_deref(), EXPORT_FILE_NAME) {
            if let Err(e) = artifact.save_to(Path::new(&dest)) {
                eprintln!("Failed to save spreadsheet: {}", e);
                dialog::alert_default(&format!("Error saving file: {}", e));
                return;
            }
            if let Some(parent) = Path::new(&dest).parent() {
                self.last_directory = Some(parent.to_string_lossy().to_string());
            }
        }
    }

    // --- View & settings ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_current_theme();
    }

    pub fn apply_current_theme(&mut self) {
        apply_theme(
            &mut self.window,
            &mut self.menu,
            &mut [&mut self.source_label, &mut self.total_label],
            &mut [
                &mut self.select_button,
                &mut self.extract_button,
                &mut self.save_button,
            ],
            self.dark_mode,
        );
        self.grid.apply_theme(self.dark_mode);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
        self.update_menu_checkbox("View/Toggle Dark Mode", self.dark_mode);
    }

    pub fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
                return;
            }
            self.apply_settings(new_settings);
        }
    }

    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        self.dark_mode = match new_settings.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        };
        self.grid.set_label_size(new_settings.label_size as i32);
        *self.settings.borrow_mut() = new_settings;
        self.apply_current_theme();
    }

    /// Handle a quit request. Returns `true` if the app should exit.
    pub fn handle_quit(&mut self) -> bool {
        if self.busy {
            let choice =
                dialog::choice2_default("Extraction is still running.", "Quit Anyway", "Cancel", "");
            if choice != Some(0) {
                return false;
            }
        }
        exporter::cleanup_export_dir();
        true
    }

    fn update_source_label(&mut self) {
        match self.session.source_display_name() {
            Some(name) => {
                self.source_label.set_label(&name);
                self.window.set_label(&format!("{} - CodeSieve", name));
            }
            None => {
                self.source_label.set_label("No file selected");
                self.window.set_label("CodeSieve");
            }
        }
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        if busy {
            self.extract_button.set_label("Extracting...");
            self.extract_button.deactivate();
            self.select_button.deactivate();
        } else {
            self.extract_button.set_label("Extract Codes");
            self.select_button.activate();
            if self.session.source_path().is_some() {
                self.extract_button.activate();
            }
        }
        self.window.redraw();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
