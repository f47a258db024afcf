use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    frames: &mut [&mut Frame],
    buttons: &mut [&mut Button],
    is_dark: bool,
) {
    if is_dark {
        // Dark mode colors
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        for frame in frames.iter_mut() {
            frame.set_label_color(Color::from_rgb(220, 220, 220));
        }
        for button in buttons.iter_mut() {
            button.set_color(Color::from_rgb(45, 45, 45));
            button.set_label_color(Color::from_rgb(220, 220, 220));
        }
    } else {
        // Light mode colors
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        for frame in frames.iter_mut() {
            frame.set_label_color(Color::Black);
        }
        for button in buttons.iter_mut() {
            button.set_color(Color::from_rgb(225, 225, 225));
            button.set_label_color(Color::Black);
        }
    }

    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
