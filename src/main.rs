use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use code_sieve::app::messages::Message;
use code_sieve::app::platform::detect_system_dark_mode;
use code_sieve::app::settings::{AppSettings, ThemeMode};
use code_sieve::app::state::AppState;
use code_sieve::ui::dialogs::about::show_about_dialog;
use code_sieve::ui::main_window::build_main_window;
use code_sieve::ui::menu::build_menu;
#[cfg(target_os = "windows")]
use code_sieve::ui::theme::set_windows_titlebar_theme;

fn main() {
    let app = app::App::default();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let dark_mode = match settings.borrow().theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };
    let label_size = settings.borrow().label_size as i32;

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, dark_mode);

    let mut state = AppState::new(widgets, sender, settings, dark_mode);
    state.grid.set_label_size(label_size);
    state.apply_current_theme();
    state.refresh_preview();

    state.window.show();
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&state.window, dark_mode);

    // The window's X button routes through the same quit path as File/Quit
    state.window.set_callback({
        let s = sender;
        move |_| s.send(Message::WindowClose)
    });

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SelectFile => state.select_file(),
                Message::ExtractCodes => state.start_extraction(),
                Message::ExtractionFinished(result) => state.finish_extraction(result),
                Message::RemoveCode(value) => state.remove_code(&value),
                Message::SaveSpreadsheet => state.save_spreadsheet(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::OpenSettings => state.open_settings(),
                Message::ShowAbout => show_about_dialog(),
                Message::FileQuit | Message::WindowClose => {
                    if state.handle_quit() {
                        app.quit();
                    }
                }
            }
        }
    }
}
