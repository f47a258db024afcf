use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    enums::Align,
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{AppSettings, ThemeMode};

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(330, 340)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    // Theme section
    Frame::default()
        .with_pos(15, 15)
        .with_size(300, 25)
        .with_label("Theme:")
        .with_align(Align::Left | Align::Inside);
    let theme_group = Group::default().with_pos(30, 45).with_size(270, 75);
    let mut theme_light = RadioRoundButton::default()
        .with_pos(30, 45)
        .with_size(270, 25)
        .with_label("Light");
    let mut theme_dark = RadioRoundButton::default()
        .with_pos(30, 70)
        .with_size(270, 25)
        .with_label("Dark");
    let mut theme_system = RadioRoundButton::default()
        .with_pos(30, 95)
        .with_size(270, 25)
        .with_label("System Default");
    theme_group.end();

    match current_settings.theme_mode {
        ThemeMode::Light => theme_light.set_value(true),
        ThemeMode::Dark => theme_dark.set_value(true),
        ThemeMode::SystemDefault => theme_system.set_value(true),
    }

    // Code label size section
    Frame::default()
        .with_pos(15, 130)
        .with_size(300, 25)
        .with_label("Code size:")
        .with_align(Align::Left | Align::Inside);
    let size_group = Group::default().with_pos(30, 160).with_size(270, 75);
    let mut size_small = RadioRoundButton::default()
        .with_pos(30, 160)
        .with_size(270, 25)
        .with_label("Small (11)");
    let mut size_medium = RadioRoundButton::default()
        .with_pos(30, 185)
        .with_size(270, 25)
        .with_label("Medium (13)");
    let mut size_large = RadioRoundButton::default()
        .with_pos(30, 210)
        .with_size(270, 25)
        .with_label("Large (15)");
    size_group.end();

    match current_settings.label_size {
        11 => size_small.set_value(true),
        15 => size_large.set_value(true),
        _ => size_medium.set_value(true),
    }

    // Removal section
    let mut check_confirm = CheckButton::default()
        .with_pos(15, 250)
        .with_size(300, 25)
        .with_label("Confirm before removing a code");
    check_confirm.set_value(current_settings.confirm_remove);

    // Buttons at bottom
    let mut save_btn = Button::default()
        .with_pos(130, 295)
        .with_size(90, 30)
        .with_label("Save");
    let mut cancel_btn = Button::default()
        .with_pos(230, 295)
        .with_size(90, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    save_btn.set_callback(move |_| {
        let new_settings = AppSettings {
            theme_mode: if theme_light.value() {
                ThemeMode::Light
            } else if theme_dark.value() {
                ThemeMode::Dark
            } else {
                ThemeMode::SystemDefault
            },
            label_size: if size_small.value() {
                11
            } else if size_large.value() {
                15
            } else {
                13
            },
            confirm_remove: check_confirm.value(),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    let outcome = result.borrow().clone();
    outcome
}
